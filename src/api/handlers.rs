use axum::{extract::State, Json};
use tracing::info;
use utoipa::OpenApi;

use super::{
    dto::{HealthResponse, SensorDataDto, StoreDataForm, StoreDataResponse},
    errors::AppError,
};
use crate::db::{models::NewReading, ReadingStore};

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Accept one reading from a sensor node and append it to the store.
///
/// Fields that are missing or do not parse are stored as null; a body that
/// is not a form at all is treated as an empty form (see [`super::form`]).
/// Only a storage fault fails the request.
#[utoipa::path(
    post,
    path = "/store_data",
    request_body(content = StoreDataForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Reading stored", body = StoreDataResponse),
        (status = 500, description = "Storage fault"),
    ),
    tag = "readings"
)]
pub async fn store_data(
    State(store): State<ReadingStore>,
    form: StoreDataForm,
) -> Result<Json<StoreDataResponse>, AppError> {
    info!(
        analog_value = ?form.analog_value,
        voltage = ?form.voltage,
        tds_value = ?form.tds_value,
        turbidity = ?form.turbidity,
        gps_data = ?form.gps_data,
        "Received sensor reading"
    );

    let stored = store.insert(&NewReading::from(&form)).await?;
    info!(id = stored.id, "Sensor reading stored");

    Ok(Json(StoreDataResponse::stored()))
}

/// Return every stored reading. No ordering, filtering or paging is applied.
#[utoipa::path(
    get,
    path = "/get_data",
    responses(
        (status = 200, description = "All stored readings", body = Vec<SensorDataDto>),
        (status = 500, description = "Storage fault"),
    ),
    tag = "readings"
)]
pub async fn get_data(
    State(store): State<ReadingStore>,
) -> Result<Json<Vec<SensorDataDto>>, AppError> {
    let rows = store.fetch_all().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Returns `200 OK` with the stored reading count when the store is reachable.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Storage fault"),
    ),
    tag = "system"
)]
pub async fn health(State(store): State<ReadingStore>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok".to_owned(),
        readings: store.count().await?,
    }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(store_data, get_data, health),
    components(schemas(StoreDataForm, StoreDataResponse, SensorDataDto, HealthResponse)),
    tags(
        (name = "readings", description = "Water-quality sensor readings"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Water Quality Sensor API",
        version = "0.1.0",
        description = "Ingestion and query of water-quality sensor telemetry"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
