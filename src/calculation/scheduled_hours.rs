//! Scheduled-hours calculation from clock-in/clock-out times.
//!
//! This module converts a start/end time-of-day pair into the number of
//! scheduled hours for the shift, assuming an end time earlier than the
//! start time rolls into the next day.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::rounding::round2;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a 24-hour "HH:MM" time-of-day string.
pub(crate) fn parse_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// Calculates the scheduled hours between two times of day.
///
/// Both arguments are 24-hour "HH:MM" strings with no date component. If
/// the end time is earlier than the start time, the shift is assumed to
/// roll into the next day and 24 hours are added. The result is rounded
/// to 2 decimal places.
///
/// An identical start and end time yields 0 hours, not 24.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] if either value does not parse.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::scheduled_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(scheduled_hours("09:00", "17:00").unwrap(), Decimal::new(8, 0));
/// assert_eq!(scheduled_hours("22:00", "06:00").unwrap(), Decimal::new(8, 0));
/// assert_eq!(scheduled_hours("09:00", "09:00").unwrap(), Decimal::ZERO);
/// ```
pub fn scheduled_hours(start_time: &str, end_time: &str) -> EngineResult<Decimal> {
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;

    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }

    Ok(round2(Decimal::new(minutes, 0) / Decimal::new(60, 0)))
}
