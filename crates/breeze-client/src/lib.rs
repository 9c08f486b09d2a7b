//! HTTP client for the sensor API
//!
//! Pulls the stored reading batch and runs the aggregation engine over it,
//! standing in for the display frontend. The engine itself never fetches;
//! this crate is the seam between transport and aggregation.

use anyhow::{anyhow, Result};
use breeze_core::{overview, Overview, Reading};
use chrono::{DateTime, FixedOffset, Utc};
use url::Url;

pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base })
    }

    /// Fetch every stored reading from `GET /api/sensor`.
    ///
    /// The batch arrives in whatever order the server kept it; the engine
    /// re-sorts, so callers need not care.
    pub async fn fetch_readings(&self) -> Result<Vec<Reading>> {
        let url = self.base.join("/api/sensor")?;
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(anyhow!("sensor fetch failed: {}", resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Fetch the batch and aggregate it for display.
    pub async fn fetch_overview(&self, now: DateTime<Utc>, offset: FixedOffset) -> Result<Overview> {
        let readings = self.fetch_readings().await?;
        Ok(overview(readings, now, offset))
    }
}
