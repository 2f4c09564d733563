//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payslip and
//! work-hours endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Adjustment, CompensationBasis, Employee, PayPeriod, PeriodHours, WorkRecord,
};

/// Request body for the `/payslips/calculate` endpoint.
///
/// Contains all information needed to calculate a payslip for one
/// employee and one work period. Hours default to zero when absent, as
/// do the allowance and deduction lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The work period the payslip covers.
    pub pay_period: PayPeriodRequest,
    /// Regular hours worked (hourly-paid employees).
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked on public holidays.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Allowance lines for the period.
    #[serde(default)]
    pub allowances: Vec<AdjustmentRequest>,
    /// Deduction lines for the period.
    #[serde(default)]
    pub deductions: Vec<AdjustmentRequest>,
}

impl PayslipRequest {
    /// Collects the three hour fields into a [`PeriodHours`].
    pub fn hours(&self) -> PeriodHours {
        PeriodHours {
            regular_hours: self.regular_hours,
            overtime_hours: self.overtime_hours,
            holiday_hours: self.holiday_hours,
        }
    }
}

/// Employee information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// The compensation arrangement, including its required rate.
    pub compensation_basis: CompensationBasis,
}

/// Work period information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// An allowance or deduction line in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// The display name of the line.
    pub name: String,
    /// The amount of the line.
    pub amount: Decimal,
}

/// Request body for the `/work-hours/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The work records to roll up.
    pub records: Vec<WorkRecord>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            compensation_basis: req.compensation_basis,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<AdjustmentRequest> for Adjustment {
    fn from(req: AdjustmentRequest) -> Self {
        Adjustment {
            name: req.name,
            amount: req.amount,
        }
    }
}
