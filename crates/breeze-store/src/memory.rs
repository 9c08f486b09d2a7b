//! In-memory reading store for tests and zero-config runs

use breeze_core::Reading;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::{ReadingStore, StoreResult};

/// Volatile store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    readings: Mutex<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReadingStore for MemoryStore {
    async fn insert(
        &self,
        temperature: f64,
        humidity: f64,
        timestamp: DateTime<Utc>,
    ) -> StoreResult<Reading> {
        let reading = Reading {
            temperature,
            humidity,
            timestamp,
        };
        self.readings.lock().await.push(reading);
        Ok(reading)
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Reading>> {
        let mut all = self.readings.lock().await.clone();
        all.sort_by_key(|r| r.timestamp);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 25, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn fetch_is_ascending_even_for_unordered_inserts() {
        let store = MemoryStore::new();
        store.insert(24.0, 40.0, ts(12)).await.unwrap();
        store.insert(20.0, 50.0, ts(8)).await.unwrap();
        store.insert(22.0, 45.0, ts(10)).await.unwrap();

        let all = store.fetch_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(all[0].temperature, 20.0);
    }

    #[tokio::test]
    async fn empty_store_fetches_empty() {
        let store = MemoryStore::new();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }
}
