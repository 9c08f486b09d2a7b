//! SQLite-backed reading store

use breeze_core::Reading;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::{ReadingStore, StoreError, StoreResult};

/// On-disk store. Timestamps are kept as Unix epoch milliseconds so
/// sub-second precision survives a round trip.
pub struct SqliteStore {
    // rusqlite::Connection is Send but not Sync; the async mutex makes the
    // store shareable across handler tasks.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS readings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dt INTEGER NOT NULL,
                temperature REAL NOT NULL,
                humidity REAL NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_readings_dt ON readings (dt);",
        )?;
        tracing::debug!("sqlite reading store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait::async_trait]
impl ReadingStore for SqliteStore {
    async fn insert(
        &self,
        temperature: f64,
        humidity: f64,
        timestamp: DateTime<Utc>,
    ) -> StoreResult<Reading> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO readings (dt, temperature, humidity) VALUES (?1, ?2, ?3)",
            params![timestamp.timestamp_millis(), temperature, humidity],
        )?;
        Ok(Reading {
            temperature,
            humidity,
            timestamp,
        })
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Reading>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT dt, temperature, humidity FROM readings ORDER BY dt ASC, id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })?;

        let mut readings = Vec::new();
        for row in rows {
            let (dt, temperature, humidity) = row?;
            let timestamp = Utc
                .timestamp_millis_opt(dt)
                .single()
                .ok_or(StoreError::Timestamp(dt))?;
            readings.push(Reading {
                temperature,
                humidity,
                timestamp,
            });
        }
        Ok(readings)
    }
}
