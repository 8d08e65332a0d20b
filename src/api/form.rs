//! Lenient extraction of the `POST /store_data` body.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
//! The first value of a repeated key wins and file parts are skipped. A body
//! that cannot be read, wholly or partly, contributes whatever fields were
//! decoded before the problem; extraction itself never rejects.

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Multipart, RawForm, Request},
    http::header::CONTENT_TYPE,
};
use tracing::warn;

use super::dto::StoreDataForm;

impl StoreDataForm {
    /// Builds the form from decoded `(name, value)` pairs in body order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "analogValue" => &mut form.analog_value,
                "voltage" => &mut form.voltage,
                "tdsValue" => &mut form.tds_value,
                "turbidity" => &mut form.turbidity,
                "gpsData" => &mut form.gps_data,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        form
    }
}

impl<S> FromRequest<S> for StoreDataForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            return Ok(match Multipart::from_request(req, state).await {
                Ok(multipart) => from_multipart(multipart).await,
                Err(rejection) => {
                    warn!(error = %rejection, "Unreadable multipart body; storing an empty reading");
                    Self::default()
                }
            });
        }

        Ok(match RawForm::from_request(req, state).await {
            Ok(RawForm(body)) => Self::from_pairs(form_urlencoded::parse(&body)),
            Err(rejection) => {
                warn!(error = %rejection, "Body is not a form; storing an empty reading");
                Self::default()
            }
        })
    }
}

async fn from_multipart(mut multipart: Multipart) -> StoreDataForm {
    let mut pairs = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Multipart body cut short; keeping fields read so far");
                break;
            }
        };

        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(e) => {
                warn!(field = %name, error = %e, "Unreadable multipart field; keeping fields read so far");
                break;
            }
        }
    }

    StoreDataForm::from_pairs(pairs)
}
