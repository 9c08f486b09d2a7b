//! Human-readable labels for dates, times, and metric values

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};

use crate::types::Metric;

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short day label: `Mar 25`.
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", SHORT_MONTHS[date.month0() as usize], date.day())
}

/// 12-hour time label with zero-padded minutes: `4:05 PM`, `12:00 AM`.
pub fn time_label(local: DateTime<FixedOffset>) -> String {
    let (is_pm, hour12) = local.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour12, local.minute(), meridiem)
}

/// Two-line forecast-card label: date on the first line, time on the
/// second.
pub fn forecast_label(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = timestamp.with_timezone(&offset);
    format!("{}\n{}", day_label(local.date_naive()), time_label(local))
}

/// Single-line timestamp label for extremum callouts: `Mar 25 4:05 PM`.
pub fn instant_label(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = timestamp.with_timezone(&offset);
    format!("{} {}", day_label(local.date_naive()), time_label(local))
}

/// Raw metric value with its unit glyph. Integral values render without a
/// fraction (`24°`), everything else as-is (`24.5°`).
pub fn metric_value(value: f64, metric: Metric) -> String {
    if value.fract() == 0.0 {
        format!("{}{}", value as i64, metric.unit_glyph())
    } else {
        format!("{}{}", value, metric.unit_glyph())
    }
}

/// Daily-average callout value, fixed to one decimal: `24.5°`.
pub fn average_value(value: f64, metric: Metric) -> String {
    format!("{:.1}{}", value, metric.unit_glyph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn day_label_uses_short_month_and_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(day_label(date), "Mar 5");
    }

    #[test]
    fn time_label_handles_noon_and_midnight() {
        let offset = utc_offset();
        let midnight = offset.with_ymd_and_hms(2023, 3, 25, 0, 0, 0).unwrap();
        let noon = offset.with_ymd_and_hms(2023, 3, 25, 12, 5, 0).unwrap();
        let evening = offset.with_ymd_and_hms(2023, 3, 25, 16, 9, 0).unwrap();

        assert_eq!(time_label(midnight), "12:00 AM");
        assert_eq!(time_label(noon), "12:05 PM");
        assert_eq!(time_label(evening), "4:09 PM");
    }

    #[test]
    fn forecast_label_is_two_lines() {
        let ts = Utc.with_ymd_and_hms(2023, 3, 25, 16, 30, 0).unwrap();
        assert_eq!(forecast_label(ts, utc_offset()), "Mar 25\n4:30 PM");
    }

    #[test]
    fn forecast_label_respects_offset() {
        // 19:01Z at UTC+5 is 00:01 the next day.
        let ts = Utc.with_ymd_and_hms(2023, 3, 25, 19, 1, 0).unwrap();
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(forecast_label(ts, offset), "Mar 26\n12:01 AM");
    }

    #[test]
    fn instant_label_is_single_line() {
        let ts = Utc.with_ymd_and_hms(2023, 3, 25, 16, 30, 0).unwrap();
        assert_eq!(instant_label(ts, utc_offset()), "Mar 25 4:30 PM");
    }

    #[test]
    fn metric_value_trims_integral_fractions() {
        assert_eq!(metric_value(24.0, Metric::Temperature), "24°");
        assert_eq!(metric_value(24.5, Metric::Temperature), "24.5°");
        assert_eq!(metric_value(52.0, Metric::Humidity), "52%");
    }

    #[test]
    fn average_value_is_one_decimal() {
        assert_eq!(average_value(22.0, Metric::Temperature), "22.0°");
        assert_eq!(average_value(47.25, Metric::Humidity), "47.2%");
    }
}
