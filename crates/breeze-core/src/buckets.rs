//! Grouping readings by local calendar date

use chrono::{FixedOffset, NaiveDate};
use std::collections::BTreeMap;

use crate::types::Reading;

/// The calendar date a reading falls on in the display offset.
pub fn local_date(reading: &Reading, offset: FixedOffset) -> NaiveDate {
    reading.timestamp.with_timezone(&offset).date_naive()
}

/// Partition readings into per-day buckets keyed by local calendar date.
///
/// The key is the date as the observer perceives it, not the UTC date: two
/// readings minutes apart in UTC land in different buckets when local
/// midnight falls between them. Buckets preserve the chronological order of
/// their readings and are rebuilt from scratch on every aggregation call.
pub fn bucket_by_day(
    readings: &[Reading],
    offset: FixedOffset,
) -> BTreeMap<NaiveDate, Vec<Reading>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Reading>> = BTreeMap::new();
    for reading in readings {
        buckets
            .entry(local_date(reading, offset))
            .or_default()
            .push(*reading);
    }
    buckets
}
