//! Day count conventions.
//!
//! The library measures time to maturity with a single simplified
//! Actual/360 convention: the actual number of days between two dates
//! over a fixed 360-day year.

mod act360;

pub use act360::Act360;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount {
    /// Returns the convention's conventional name.
    fn name(&self) -> &'static str;

    /// Returns the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Returns the number of days counted between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
