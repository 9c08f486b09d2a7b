//! Forecast-strip selection over the most recent readings

use chrono::FixedOffset;

use crate::buckets::local_date;
use crate::format;
use crate::types::{ForecastEntry, Metric, Reading};

/// Select the readings shown on the forecast strip and project them into
/// display entries.
///
/// The strip prefers the local calendar date of the newest reading. When
/// that day holds fewer than `slots` readings (sensor downtime, sparse
/// sampling) the date filter is dropped and the newest `slots` readings of
/// the whole sequence are shown instead, whatever dates they span: recency
/// beats same-day purity. The same-day path never truncates, so an
/// over-sampling device can produce more than `slots` entries.
///
/// `sorted` must be ascending by timestamp. Empty input yields an empty
/// strip.
pub fn forecast_window(
    sorted: &[Reading],
    metric: Metric,
    offset: FixedOffset,
    slots: usize,
) -> Vec<ForecastEntry> {
    let Some(last) = sorted.last() else {
        return Vec::new();
    };
    let last_date = local_date(last, offset);

    let same_day: Vec<&Reading> = sorted
        .iter()
        .filter(|r| local_date(r, offset) == last_date)
        .collect();

    let selected: Vec<&Reading> = if same_day.len() < slots {
        let tail_start = sorted.len().saturating_sub(slots);
        sorted[tail_start..].iter().collect()
    } else {
        same_day
    };

    selected
        .iter()
        .enumerate()
        .map(|(index, reading)| {
            let value = metric.value_of(reading);
            ForecastEntry {
                // Position suffix keeps keys unique when timestamps repeat.
                key: format!("{}-{}", reading.timestamp.to_rfc3339(), index),
                label: format::forecast_label(reading.timestamp, offset),
                display_value: format::metric_value(value, metric),
                value,
            }
        })
        .collect()
}
