//! Calculation logic for the payroll engine.
//!
//! This module contains the hours engine (scheduled hours, break
//! allowance lookup, payable hours, work schedule CSV parsing, and
//! day/week/month/year aggregation) and the pay engine (payslip pay
//! breakdowns from a compensation basis, period hours, and adjustments).

mod aggregate;
mod break_time;
mod pay_breakdown;
mod payable_hours;
mod rounding;
mod schedule_csv;
mod scheduled_hours;

pub use aggregate::aggregate_work_hours;
pub use break_time::{break_minutes, minutes_to_hours};
pub use pay_breakdown::{calculate_pay_breakdown, hourly_equivalent};
pub use payable_hours::payable_hours;
pub use schedule_csv::parse_schedule_csv;
pub use scheduled_hours::scheduled_hours;
