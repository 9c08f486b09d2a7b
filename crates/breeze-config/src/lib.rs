//! Deployment configuration for the breeze services
//!
//! TOML file located via `BREEZE_CONFIG` (default `config.toml`); every
//! field is optional and falls back to a sane default, so a missing file is
//! a valid zero-config deployment.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `[station]`: where the observing display lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    /// Minutes east of UTC for local-date bucketing. One fixed offset per
    /// deployment keeps every consumer bucketing identically.
    pub utc_offset_minutes: Option<i32>,
}

/// `[http]`: the sensor API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub bind: Option<String>,
}

/// `[store]`: reading persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database. Absent means in-memory only.
    pub sqlite_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub station: Option<StationConfig>,
    pub http: Option<HttpConfig>,
    pub store: Option<StoreConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Load configuration from the `BREEZE_CONFIG` path if present.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("BREEZE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let cfg = if Path::new(&path).exists() {
            let s = fs::read_to_string(&path)?;
            toml::from_str::<AppConfig>(&s)?
        } else {
            AppConfig::default()
        };
        Ok(cfg)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// HTTP bind address (default 0.0.0.0:8080).
    pub fn http_bind(&self) -> String {
        self.http
            .as_ref()
            .and_then(|h| h.bind.clone())
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
    }

    /// Fixed display offset for local-date bucketing (default UTC).
    /// Out-of-range offsets also fall back to UTC.
    pub fn display_offset(&self) -> FixedOffset {
        let minutes = self
            .station
            .as_ref()
            .and_then(|s| s.utc_offset_minutes)
            .unwrap_or(0);
        FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// SQLite database path, if on-disk persistence is configured.
    pub fn sqlite_path(&self) -> Option<String> {
        self.store.as_ref().and_then(|s| s.sqlite_path.clone())
    }
}
