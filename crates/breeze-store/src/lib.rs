//! Reading persistence for the sensor API
//!
//! Stores sit behind a narrow async trait so the HTTP layer does not care
//! whether readings live in memory or on disk.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use breeze_core::Reading;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored timestamp out of range: {0}")]
    Timestamp(i64),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary for sensor readings.
#[async_trait::async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist one sample under the given (server-assigned) timestamp.
    async fn insert(
        &self,
        temperature: f64,
        humidity: f64,
        timestamp: DateTime<Utc>,
    ) -> StoreResult<Reading>;

    /// Every stored reading, ascending by timestamp.
    async fn fetch_all(&self) -> StoreResult<Vec<Reading>>;
}
