//! Employee model and related types.
//!
//! This module defines the Employee struct and the CompensationBasis enum
//! for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The compensation arrangement for an employee.
///
/// The basis is a tagged variant that cannot be constructed without its
/// required rate, so a payslip can never be calculated against a missing
/// salary or hourly rate.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationBasis;
/// use rust_decimal::Decimal;
///
/// let basis = CompensationBasis::FullTime {
///     monthly_salary: Decimal::new(4000, 0),
/// };
/// assert!(basis.is_full_time());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompensationBasis {
    /// Salaried employment paid a flat amount per month.
    FullTime {
        /// The monthly salary.
        monthly_salary: Decimal,
    },
    /// Hourly employment paid per payable hour worked.
    PartTime {
        /// The hourly rate.
        hourly_rate: Decimal,
    },
}

impl CompensationBasis {
    /// Returns true for salaried (full-time) employment.
    pub fn is_full_time(&self) -> bool {
        matches!(self, CompensationBasis::FullTime { .. })
    }
}

/// Represents an employee subject to payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The compensation arrangement, including its rate.
    pub compensation_basis: CompensationBasis,
}
