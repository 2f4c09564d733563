//! Payslip calculation result models.
//!
//! This module contains the [`PayComponents`] breakdown produced by the pay
//! engine, its input shapes, and the [`PayslipResult`] envelope returned by
//! the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// A named allowance or deduction line on a payslip.
///
/// Stored loosely as a JSON list in the backing database; the engine
/// validates each entry at the boundary instead of trusting the stored
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// The display name of the line (e.g., "transport", "CPF employee").
    pub name: String,
    /// The non-negative amount of the line.
    pub amount: Decimal,
}

/// Hours worked in a pay period, split by pay category.
///
/// All fields default to zero when absent from the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodHours {
    /// Regular hours worked (used for hourly-paid employees).
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked on public holidays.
    #[serde(default)]
    pub holiday_hours: Decimal,
}

/// The deterministic pay breakdown for one employee and one period.
///
/// Computed fresh from the employee's compensation basis and the period's
/// hours and adjustment lines; never mutated incrementally. Values carry
/// full precision; two-decimal formatting happens at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponents {
    /// The monthly salary (full-time) or rate times regular hours (part-time).
    pub basic_pay: Decimal,
    /// Overtime hours paid at the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Public holiday hours paid at the holiday multiplier.
    pub holiday_pay: Decimal,
    /// Sum of all allowance lines.
    pub total_allowances: Decimal,
    /// Sum of all deduction lines.
    pub total_deductions: Decimal,
    /// basic + overtime + holiday + allowances, before deductions.
    pub gross_amount: Decimal,
    /// Gross amount minus deductions.
    pub net_amount: Decimal,
    /// Employer-side statutory contribution on the gross amount.
    pub employer_contribution: Decimal,
}

/// The complete result of a payslip calculation as returned by the API.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayComponents, PayPeriod, PayslipResult};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayslipResult {
///     payslip_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
///     components: PayComponents {
///         basic_pay: Decimal::ZERO,
///         overtime_pay: Decimal::ZERO,
///         holiday_pay: Decimal::ZERO,
///         total_allowances: Decimal::ZERO,
///         total_deductions: Decimal::ZERO,
///         gross_amount: Decimal::ZERO,
///         net_amount: Decimal::ZERO,
///         employer_contribution: Decimal::ZERO,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// Unique identifier for this calculation.
    pub payslip_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The work period the payslip covers.
    pub pay_period: PayPeriod,
    /// The calculated pay breakdown.
    pub components: PayComponents,
}
