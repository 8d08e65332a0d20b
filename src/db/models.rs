use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A full `sensor_data` row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct SensorReading {
    pub id: i64,
    pub analog_value: Option<f64>,
    pub voltage: Option<f64>,
    /// Total dissolved solids
    pub tds_value: Option<f64>,
    pub turbidity: Option<i64>,
    pub gps_lat: Option<String>,
    pub gps_long: Option<String>,
    pub gps_date: Option<String>,
    pub gps_time: Option<String>,
    /// Server-side insert time (UTC, `CURRENT_TIMESTAMP`).
    pub timestamp: NaiveDateTime,
}

/// The eight-column projection served by `GET /get_data`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SensorData {
    pub gps_lat: Option<String>,
    pub gps_long: Option<String>,
    pub analog_value: Option<f64>,
    pub voltage: Option<f64>,
    pub tds_value: Option<f64>,
    pub turbidity: Option<i64>,
    pub gps_date: Option<String>,
    pub gps_time: Option<String>,
}

/// Coerced values for one insert; `id` and `timestamp` are assigned by SQLite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReading {
    pub analog_value: Option<f64>,
    pub voltage: Option<f64>,
    pub tds_value: Option<f64>,
    pub turbidity: Option<i64>,
    pub gps_lat: Option<String>,
    pub gps_long: Option<String>,
    pub gps_date: Option<String>,
    pub gps_time: Option<String>,
}
