//! Single-call aggregation over a raw reading batch

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::forecast_window;
use crate::normalize::sort_readings;
use crate::rollups::{summarize, MetricSummary};
use crate::types::{ForecastEntry, Metric, Reading};
use crate::FORECAST_SLOTS;

/// Everything the display needs from one fetch batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    /// The forecast strip (temperature, as on the original display).
    pub forecast: Vec<ForecastEntry>,

    pub temperature: MetricSummary,

    pub humidity: MetricSummary,
}

/// Aggregate a raw, possibly unordered batch of readings.
///
/// A pure function of the batch, the supplied clock instant, and the
/// display offset. Hosts call this whenever fresh data arrives; nothing is
/// cached between calls. `now` is a parameter rather than a clock read so
/// rolling-week results stay deterministic under test.
pub fn overview(readings: Vec<Reading>, now: DateTime<Utc>, offset: FixedOffset) -> Overview {
    let sorted = sort_readings(readings);

    Overview {
        forecast: forecast_window(&sorted, Metric::Temperature, offset, FORECAST_SLOTS),
        temperature: summarize(&sorted, Metric::Temperature, now, offset),
        humidity: summarize(&sorted, Metric::Humidity, now, offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(day: u32, hour: u32, temperature: f64, humidity: f64) -> Reading {
        Reading {
            temperature,
            humidity,
            timestamp: Utc.with_ymd_and_hms(2023, 3, day, hour, 0, 0).unwrap(),
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn empty_batch_yields_the_empty_overview() {
        let now = Utc.with_ymd_and_hms(2023, 3, 26, 0, 0, 0).unwrap();
        let result = overview(Vec::new(), now, utc());

        assert!(result.forecast.is_empty());
        assert!(result.temperature.daily.is_empty());
        assert!(result.temperature.week_peak.is_none());
        assert!(result.humidity.daily.is_empty());
        assert!(result.humidity.week_peak.is_none());
    }

    #[test]
    fn order_of_the_input_batch_does_not_matter() {
        let now = Utc.with_ymd_and_hms(2023, 3, 26, 0, 0, 0).unwrap();
        let batch = vec![
            reading(25, 14, 24.0, 40.0),
            reading(24, 9, 20.0, 55.0),
            reading(25, 8, 22.0, 45.0),
            reading(23, 18, 19.0, 60.0),
        ];
        let mut shuffled = batch.clone();
        shuffled.reverse();

        assert_eq!(overview(batch, now, utc()), overview(shuffled, now, utc()));
    }

    #[test]
    fn aggregates_both_metrics_and_the_strip() {
        let now = Utc.with_ymd_and_hms(2023, 3, 26, 0, 0, 0).unwrap();
        let batch = vec![
            reading(24, 9, 20.0, 55.0),
            reading(25, 8, 22.0, 45.0),
            reading(25, 14, 24.0, 40.0),
        ];
        let result = overview(batch, now, utc());

        // Sparse last day: fallback keeps all three readings on the strip.
        assert_eq!(result.forecast.len(), 3);
        assert_eq!(result.temperature.daily.len(), 2);
        assert_eq!(result.temperature.daily[1].average, 23.0);
        assert_eq!(result.humidity.peak_day.unwrap().average, 55.0);
        assert_eq!(result.temperature.week_peak.unwrap().value, 24.0);
    }
}
