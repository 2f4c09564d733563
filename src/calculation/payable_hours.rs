//! Payable-hours derivation.
//!
//! Payable hours are the scheduled hours minus the statutory break
//! allowance, floored at zero.

use rust_decimal::Decimal;

use super::rounding::round2;

/// Calculates payable hours from scheduled hours and break hours.
///
/// The result is `max(0, scheduled - break)` rounded to 2 decimal places;
/// it is never negative even if the break allowance exceeds the shift.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::payable_hours;
/// use rust_decimal::Decimal;
///
/// let payable = payable_hours(Decimal::new(8, 0), Decimal::new(92, 2));
/// assert_eq!(payable, Decimal::new(708, 2)); // 7.08
/// ```
pub fn payable_hours(scheduled_hours: Decimal, break_hours: Decimal) -> Decimal {
    round2((scheduled_hours - break_hours).max(Decimal::ZERO))
}
