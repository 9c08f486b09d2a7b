//! Core data types for sensor readings and display aggregates

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One timestamped temperature/humidity sample.
///
/// Immutable once ingested; the only meaningful relationship between
/// readings is chronological order. Duplicate timestamps are valid and both
/// samples are retained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub temperature: f64,

    pub humidity: f64,

    /// The upstream feed serializes this field as `datetime` (ISO-8601).
    #[serde(rename = "datetime")]
    pub timestamp: DateTime<Utc>,
}

/// Metric a display aggregation runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    /// The selected field of a reading.
    pub fn value_of(&self, reading: &Reading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::Humidity => reading.humidity,
        }
    }

    /// Glyph appended to displayed values (`24°`, `52%`).
    pub fn unit_glyph(&self) -> char {
        match self {
            Metric::Temperature => '°',
            Metric::Humidity => '%',
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct MetricParseError(String);

impl FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            other => Err(MetricParseError(other.to_string())),
        }
    }
}

/// Mean of one metric over a single local calendar date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub average: f64,
}

/// The raw reading holding the highest metric value inside the rolling
/// week. Absent when no reading falls inside the window, which is distinct
/// from any numeric value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeekPeak {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// One card on the forecast strip. A pure projection of a reading, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    /// Unique per entry even when two readings share a timestamp.
    pub key: String,

    /// Two-line label: date on the first line, 12-hour time on the second.
    pub label: String,

    /// Metric value with its unit glyph, e.g. `24°`.
    pub display_value: String,

    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reading_deserializes_wire_shape() {
        let json = r#"{"datetime":"2023-03-25T12:10:00.000Z","temperature":24.0,"humidity":25.0}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.temperature, 24.0);
        assert_eq!(reading.humidity, 25.0);
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2023, 3, 25, 12, 10, 0).unwrap()
        );
    }

    #[test]
    fn metric_selects_field() {
        let reading = Reading {
            temperature: 22.0,
            humidity: 48.0,
            timestamp: Utc.with_ymd_and_hms(2023, 3, 25, 12, 0, 0).unwrap(),
        };
        assert_eq!(Metric::Temperature.value_of(&reading), 22.0);
        assert_eq!(Metric::Humidity.value_of(&reading), 48.0);
    }

    #[test]
    fn metric_from_str() {
        assert_eq!("temperature".parse::<Metric>().unwrap(), Metric::Temperature);
        assert_eq!("Humidity".parse::<Metric>().unwrap(), Metric::Humidity);
        assert!("pressure".parse::<Metric>().is_err());
    }
}
