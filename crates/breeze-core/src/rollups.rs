//! Daily rollups and extremum selection

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::buckets::bucket_by_day;
use crate::types::{DailyAverage, Metric, Reading, WeekPeak};
use crate::{RETAINED_DAYS, WEEK_WINDOW_HOURS};

/// Per-metric aggregate consumed by the analysis pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSummary {
    /// Daily averages, ascending by date, at most [`RETAINED_DAYS`] entries.
    pub daily: Vec<DailyAverage>,

    /// Retained day with the highest average (hottest / most humid).
    pub peak_day: Option<DailyAverage>,

    /// Retained day with the lowest average (coldest / least humid).
    pub low_day: Option<DailyAverage>,

    /// Highest raw reading inside the trailing week.
    pub week_peak: Option<WeekPeak>,
}

/// Mean of `metric` per day bucket, ascending by date, trimmed to the
/// `keep_days` most recent dates.
///
/// Every bucket holds at least one reading by construction, so the mean is
/// always defined. Trimming is by date order: when more than `keep_days`
/// distinct dates exist, only the latest survive.
pub fn daily_averages(
    buckets: &BTreeMap<NaiveDate, Vec<Reading>>,
    metric: Metric,
    keep_days: usize,
) -> Vec<DailyAverage> {
    let mut averages: Vec<DailyAverage> = buckets
        .iter()
        .map(|(date, readings)| {
            let sum: f64 = readings.iter().map(|r| metric.value_of(r)).sum();
            DailyAverage {
                date: *date,
                average: sum / readings.len() as f64,
            }
        })
        .collect();

    if averages.len() > keep_days {
        averages.drain(..averages.len() - keep_days);
    }
    averages
}

/// The day with the highest average. Ties keep the earliest date.
pub fn peak_day(daily: &[DailyAverage]) -> Option<&DailyAverage> {
    daily.iter().fold(None, |best, entry| match best {
        None => Some(entry),
        Some(b) if entry.average > b.average => Some(entry),
        Some(b) => Some(b),
    })
}

/// The day with the lowest average. Ties keep the earliest date.
pub fn low_day(daily: &[DailyAverage]) -> Option<&DailyAverage> {
    daily.iter().fold(None, |best, entry| match best {
        None => Some(entry),
        Some(b) if entry.average < b.average => Some(entry),
        Some(b) => Some(b),
    })
}

/// Highest raw reading with `timestamp >= now - window`.
///
/// Runs over raw readings, not daily averages, so a single spike shows up
/// even when its day averaged low. Ties keep the first reading in
/// chronological order. `None` when nothing falls inside the window; stale
/// data never leaks into the weekly callout.
pub fn week_peak(
    sorted: &[Reading],
    metric: Metric,
    now: DateTime<Utc>,
    window: Duration,
) -> Option<WeekPeak> {
    let cutoff = now - window;
    sorted
        .iter()
        .filter(|r| r.timestamp >= cutoff)
        .fold(None::<&Reading>, |best, r| match best {
            None => Some(r),
            Some(b) if metric.value_of(r) > metric.value_of(b) => Some(r),
            Some(b) => Some(b),
        })
        .map(|r| WeekPeak {
            timestamp: r.timestamp,
            value: metric.value_of(r),
        })
}

/// Full rollup for one metric with the default retention and window.
///
/// `sorted` must be ascending by timestamp.
pub fn summarize(
    sorted: &[Reading],
    metric: Metric,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> MetricSummary {
    let buckets = bucket_by_day(sorted, offset);
    let daily = daily_averages(&buckets, metric, RETAINED_DAYS);
    let peak = peak_day(&daily).copied();
    let low = low_day(&daily).copied();
    let week = week_peak(sorted, metric, now, Duration::hours(WEEK_WINDOW_HOURS));

    MetricSummary {
        daily,
        peak_day: peak,
        low_day: low,
        week_peak: week,
    }
}
