//! Chronological normalization of raw reading batches

use crate::types::Reading;

/// Sort a batch of readings ascending by timestamp.
///
/// The upstream feed gives no ordering guarantee, so every other engine
/// stage runs on the output of this one. The sort is stable: readings that
/// share a timestamp keep their relative input order, and duplicates are
/// retained.
pub fn sort_readings(mut readings: Vec<Reading>) -> Vec<Reading> {
    readings.sort_by_key(|r| r.timestamp);
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(hour: u32, temperature: f64) -> Reading {
        Reading {
            temperature,
            humidity: 50.0,
            timestamp: Utc.with_ymd_and_hms(2023, 3, 25, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_batch_stays_empty() {
        assert!(sort_readings(Vec::new()).is_empty());
    }

    #[test]
    fn orders_out_of_order_batch() {
        let sorted = sort_readings(vec![reading(12, 3.0), reading(8, 1.0), reading(10, 2.0)]);
        let temps: Vec<f64> = sorted.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn permutations_converge() {
        let a = vec![reading(8, 1.0), reading(10, 2.0), reading(12, 3.0)];
        let b = vec![reading(12, 3.0), reading(8, 1.0), reading(10, 2.0)];
        assert_eq!(sort_readings(a.clone()), sort_readings(b));
        assert_eq!(sort_readings(a.clone()), a);
    }

    #[test]
    fn duplicate_timestamps_are_retained_in_input_order() {
        let first = reading(9, 1.0);
        let second = reading(9, 2.0);
        let sorted = sort_readings(vec![first, second]);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].temperature, 1.0);
        assert_eq!(sorted[1].temperature, 2.0);
    }
}
