use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::models::{NewReading, SensorData},
    sensors::{self, GpsFix},
};

/// Form body of `POST /store_data`. Every field is optional free text.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreDataForm {
    pub analog_value: Option<String>,
    pub voltage: Option<String>,
    /// Total dissolved solids
    pub tds_value: Option<String>,
    pub turbidity: Option<String>,
    /// Composite GPS blob, e.g. `lat:12.9,long:77.5,date:2024-01-01,time:10:00:00`
    pub gps_data: Option<String>,
}

impl From<&StoreDataForm> for NewReading {
    fn from(form: &StoreDataForm) -> Self {
        let gps = GpsFix::parse(form.gps_data.as_deref());
        Self {
            analog_value: sensors::parse_decimal(form.analog_value.as_deref()),
            voltage: sensors::parse_decimal(form.voltage.as_deref()),
            tds_value: sensors::parse_decimal(form.tds_value.as_deref()),
            turbidity: sensors::parse_integer(form.turbidity.as_deref()),
            gps_lat: gps.lat,
            gps_long: gps.long,
            gps_date: gps.date,
            gps_time: gps.time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoreDataResponse {
    pub status: String,
    pub message: String,
}

impl StoreDataResponse {
    pub fn stored() -> Self {
        Self {
            status: "success".to_owned(),
            message: "Data received and stored!".to_owned(),
        }
    }
}

/// One stored reading as served by `GET /get_data`. `id` and `timestamp`
/// are not part of the projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorDataDto {
    pub gps_lat: Option<String>,
    pub gps_long: Option<String>,
    pub analog_value: Option<f64>,
    pub voltage: Option<f64>,
    pub tds_value: Option<f64>,
    pub turbidity: Option<i64>,
    pub gps_date: Option<String>,
    pub gps_time: Option<String>,
}

impl From<SensorData> for SensorDataDto {
    fn from(r: SensorData) -> Self {
        Self {
            gps_lat: r.gps_lat,
            gps_long: r.gps_long,
            analog_value: r.analog_value,
            voltage: r.voltage,
            tds_value: r.tds_value,
            turbidity: r.turbidity,
            gps_date: r.gps_date,
            gps_time: r.gps_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of readings currently stored.
    pub readings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> StoreDataForm {
        let get = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_owned())
        };
        StoreDataForm {
            analog_value: get("analogValue"),
            voltage: get("voltage"),
            tds_value: get("tdsValue"),
            turbidity: get("turbidity"),
            gps_data: get("gpsData"),
        }
    }

    #[test]
    fn complete_form_is_fully_coerced() {
        let reading = NewReading::from(&form(&[
            ("analogValue", "512"),
            ("voltage", "2.5"),
            ("tdsValue", "310.75"),
            ("turbidity", "3"),
            ("gpsData", "lat:12.9,long:77.5,date:2024-01-01,time:10:00:00"),
        ]));

        assert_eq!(
            reading,
            NewReading {
                analog_value: Some(512.0),
                voltage: Some(2.5),
                tds_value: Some(310.75),
                turbidity: Some(3),
                gps_lat: Some("12.9".into()),
                gps_long: Some("77.5".into()),
                gps_date: Some("2024-01-01".into()),
                gps_time: Some("10:00:00".into()),
            }
        );
    }

    #[test]
    fn empty_form_is_all_null() {
        assert_eq!(NewReading::from(&StoreDataForm::default()), NewReading::default());
    }

    #[test]
    fn each_field_degrades_independently() {
        let reading = NewReading::from(&form(&[
            ("analogValue", "n/a"),
            ("voltage", "3.3"),
            ("turbidity", "4.5"),
            ("gpsData", "lat:1,lat:2"),
        ]));

        assert_eq!(reading.analog_value, None);
        assert_eq!(reading.voltage, Some(3.3));
        assert_eq!(reading.tds_value, None);
        assert_eq!(reading.turbidity, None);
        assert_eq!(reading.gps_lat.as_deref(), Some("2"));
        assert_eq!(reading.gps_long, None);
    }

    #[test]
    fn stored_response_matches_wire_format() {
        let body = serde_json::to_value(StoreDataResponse::stored()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "success", "message": "Data received and stored!" })
        );
    }
}
