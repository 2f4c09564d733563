//! Break allowance lookup.
//!
//! This module derives the statutory break for a shift from the
//! configured break schedule, and converts break minutes to hours.

use rust_decimal::Decimal;

use crate::config::BreakSchedule;

use super::rounding::round2;

/// Looks up the break allowance in minutes for a shift's scheduled hours.
///
/// The scheduled hours are floored to a whole bucket; hours above the
/// schedule's largest bucket saturate at that bucket's allowance.
/// Scheduled hours are never negative (guaranteed upstream).
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::break_minutes;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/payroll").unwrap();
/// let minutes = break_minutes(Decimal::new(85, 1), config.break_schedule()); // 8.5h
/// assert_eq!(minutes, Decimal::new(55, 0));
/// ```
pub fn break_minutes(scheduled_hours: Decimal, schedule: &BreakSchedule) -> Decimal {
    schedule.minutes_for(scheduled_hours)
}

/// Converts break minutes to hours, rounded to 2 decimal places.
///
/// ```
/// use payroll_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(Decimal::new(55, 0)), Decimal::new(92, 2)); // 0.92
/// ```
pub fn minutes_to_hours(minutes: Decimal) -> Decimal {
    round2(minutes / Decimal::new(60, 0))
}
