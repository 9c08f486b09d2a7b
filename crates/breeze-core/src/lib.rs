//! Aggregation engine for sensor telemetry display
//!
//! Turns a raw, irregularly sampled batch of temperature/humidity readings
//! into the forecast strip, per-day averages, and extremum callouts that a
//! display renders. Pure and synchronous: no I/O, no clock access, no state
//! across calls.

pub mod buckets;
pub mod forecast;
pub mod format;
pub mod normalize;
pub mod overview;
pub mod rollups;
pub mod types;

pub use buckets::*;
pub use forecast::*;
pub use normalize::*;
pub use overview::*;
pub use rollups::*;
pub use types::*;

/// Entries the forecast strip displays when enough same-day data exists.
pub const FORECAST_SLOTS: usize = 24;

/// Distinct calendar dates retained for the daily-average charts.
pub const RETAINED_DAYS: usize = 7;

/// Trailing window, in hours, for the weekly raw-reading extremes.
pub const WEEK_WINDOW_HOURS: i64 = 7 * 24;
