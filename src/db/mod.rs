pub mod models;

use std::path::{Path, PathBuf};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};
use thiserror::Error;
use tracing::{debug, info};

use models::{NewReading, SensorData, SensorReading};

const SCHEMA: &str = r#"
CREATE TABLE sensor_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    analog_value REAL,
    voltage REAL,
    tds_value REAL,
    turbidity INTEGER,
    gps_lat TEXT,
    gps_long TEXT,
    gps_date TEXT,
    gps_time TEXT,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("cannot inspect database file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to the `sensor_data` SQLite file.
///
/// Holds only the connection options: every operation opens its own
/// connection, runs a single statement and closes it again. Clones are cheap
/// and share nothing but the file location.
#[derive(Debug, Clone)]
pub struct ReadingStore {
    options: SqliteConnectOptions,
}

impl ReadingStore {
    /// Opens the store at `path`, creating the file and table if the file is
    /// absent. An existing file is used as-is; no migration is attempted.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let exists = path.try_exists().map_err(|source| StoreError::Io {
            path: path.to_owned(),
            source,
        })?;

        let store = Self {
            options: SqliteConnectOptions::new().filename(path),
        };

        if !exists {
            let mut conn = store.options.clone().create_if_missing(true).connect().await?;
            sqlx::query(SCHEMA).execute(&mut conn).await?;
            conn.close().await?;
            info!(path = %path.display(), "Database initialised and sensor_data table created");
        }

        Ok(store)
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        Ok(self.options.connect().await?)
    }

    /// Appends one reading and returns the stored row, including the
    /// server-assigned `id` and `timestamp`.
    pub async fn insert(&self, reading: &NewReading) -> Result<SensorReading, StoreError> {
        let mut conn = self.connect().await?;

        let row = sqlx::query_as::<_, SensorReading>(
            r#"
            INSERT INTO sensor_data
                (analog_value, voltage, tds_value, turbidity,
                 gps_lat, gps_long, gps_date, gps_time)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, analog_value, voltage, tds_value, turbidity,
                      gps_lat, gps_long, gps_date, gps_time, timestamp
            "#,
        )
        .bind(reading.analog_value)
        .bind(reading.voltage)
        .bind(reading.tds_value)
        .bind(reading.turbidity)
        .bind(reading.gps_lat.as_deref())
        .bind(reading.gps_long.as_deref())
        .bind(reading.gps_date.as_deref())
        .bind(reading.gps_time.as_deref())
        .fetch_one(&mut conn)
        .await?;

        conn.close().await?;

        debug!(id = row.id, timestamp = %row.timestamp, "Sensor reading inserted");
        Ok(row)
    }

    /// Every stored reading, in whatever order SQLite yields them.
    pub async fn fetch_all(&self) -> Result<Vec<SensorData>, StoreError> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query_as::<_, SensorData>(
            r#"
            SELECT gps_lat, gps_long, analog_value, voltage,
                   tds_value, turbidity, gps_date, gps_time
            FROM sensor_data
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sensor_data")
            .fetch_one(&mut conn)
            .await?;

        conn.close().await?;
        Ok(count)
    }
}
