//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod hours_summary;
mod pay_components;
mod pay_period;
mod work_record;

pub use employee::{CompensationBasis, Employee};
pub use hours_summary::{AggregatedHours, HoursBucket};
pub use pay_components::{Adjustment, PayComponents, PayslipResult, PeriodHours};
pub use pay_period::PayPeriod;
pub use work_record::{WorkRecord, WorkScheduleEntry};
