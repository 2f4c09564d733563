//! Payslip pay breakdown calculation.
//!
//! This module computes the deterministic pay breakdown for one employee
//! and one pay period from the employee's compensation basis, the
//! period's hours, and its allowance/deduction lines.

use rust_decimal::Decimal;

use crate::config::PayRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, CompensationBasis, PayComponents, PeriodHours};

/// Derives the implied hourly rate from a monthly salary.
///
/// Divides by the configured standard week length times the average
/// number of weeks per month (40 x 4.33 with the shipped rates). Used
/// only for the overtime and holiday components of salaried pay; salaried
/// basic pay is the flat monthly amount, not hours times rate.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::hourly_equivalent;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/payroll").unwrap();
/// let rate = hourly_equivalent(Decimal::new(4330, 0), config.pay_rates());
/// assert_eq!(rate, Decimal::new(25, 0)); // 4330 / 173.2
/// ```
pub fn hourly_equivalent(monthly_salary: Decimal, rates: &PayRates) -> Decimal {
    monthly_salary / rates.monthly_to_hourly_divisor()
}

/// Calculates the pay breakdown for one employee and one period.
///
/// - Salaried (full-time): basic pay is the monthly salary; overtime and
///   holiday pay use the salary's hourly equivalent.
/// - Hourly (part-time): basic pay is rate times regular hours; overtime
///   and holiday pay use the hourly rate directly.
///
/// Gross is basic + overtime + holiday + allowances; net is gross minus
/// deductions; the employer contribution is the configured flat rate
/// applied to gross. No rounding is performed here; two-decimal
/// formatting belongs to the presentation layer.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAdjustment`] if any allowance or
/// deduction line carries a negative amount. Hour values are not
/// validated (the calling forms enforce non-negative hours).
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate_pay_breakdown;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{CompensationBasis, PeriodHours};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/payroll").unwrap();
/// let basis = CompensationBasis::FullTime {
///     monthly_salary: Decimal::new(4000, 0),
/// };
///
/// let components = calculate_pay_breakdown(
///     &basis,
///     &PeriodHours::default(),
///     &[],
///     &[],
///     config.pay_rates(),
/// ).unwrap();
///
/// assert_eq!(components.gross_amount, Decimal::new(4000, 0));
/// assert_eq!(components.employer_contribution, Decimal::new(68000, 2));
/// ```
pub fn calculate_pay_breakdown(
    basis: &CompensationBasis,
    hours: &PeriodHours,
    allowances: &[Adjustment],
    deductions: &[Adjustment],
    rates: &PayRates,
) -> EngineResult<PayComponents> {
    let total_allowances = sum_adjustments(allowances)?;
    let total_deductions = sum_adjustments(deductions)?;

    let (basic_pay, extras_rate) = match basis {
        CompensationBasis::FullTime { monthly_salary } => {
            (*monthly_salary, hourly_equivalent(*monthly_salary, rates))
        }
        CompensationBasis::PartTime { hourly_rate } => {
            (*hourly_rate * hours.regular_hours, *hourly_rate)
        }
    };

    let overtime_pay = extras_rate * rates.overtime_multiplier * hours.overtime_hours;
    let holiday_pay = extras_rate * rates.holiday_multiplier * hours.holiday_hours;

    let gross_amount = basic_pay + overtime_pay + holiday_pay + total_allowances;
    let net_amount = gross_amount - total_deductions;
    let employer_contribution = gross_amount * rates.employer_contribution_rate;

    Ok(PayComponents {
        basic_pay,
        overtime_pay,
        holiday_pay,
        total_allowances,
        total_deductions,
        gross_amount,
        net_amount,
        employer_contribution,
    })
}

/// Sums adjustment lines, rejecting negative amounts at the boundary.
fn sum_adjustments(lines: &[Adjustment]) -> EngineResult<Decimal> {
    let mut total = Decimal::ZERO;
    for line in lines {
        if line.amount < Decimal::ZERO {
            return Err(EngineError::InvalidAdjustment {
                name: line.name.clone(),
                message: "amount cannot be negative".to_string(),
            });
        }
        total += line.amount;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_rates() -> PayRates {
        PayRates {
            overtime_multiplier: dec("1.5"),
            holiday_multiplier: dec("2.0"),
            employer_contribution_rate: dec("0.17"),
            standard_weekly_hours: dec("40"),
            average_weeks_per_month: dec("4.33"),
        }
    }

    fn adjustment(name: &str, amount: &str) -> Adjustment {
        Adjustment {
            name: name.to_string(),
            amount: dec(amount),
        }
    }

    /// PB-001: salaried employee with no extras
    #[test]
    fn test_full_time_base_case() {
        let basis = CompensationBasis::FullTime {
            monthly_salary: dec("4000"),
        };

        let components =
            calculate_pay_breakdown(&basis, &PeriodHours::default(), &[], &[], &test_rates())
                .unwrap();

        assert_eq!(components.basic_pay, dec("4000"));
        assert_eq!(components.overtime_pay, Decimal::ZERO);
        assert_eq!(components.holiday_pay, Decimal::ZERO);
        assert_eq!(components.gross_amount, dec("4000"));
        assert_eq!(components.net_amount, dec("4000"));
        assert_eq!(components.employer_contribution, dec("680.00"));
    }

    /// PB-002: hourly employee with overtime
    #[test]
    fn test_part_time_with_overtime() {
        let basis = CompensationBasis::PartTime {
            hourly_rate: dec("10"),
        };
        let hours = PeriodHours {
            regular_hours: dec("80"),
            overtime_hours: dec("5"),
            holiday_hours: Decimal::ZERO,
        };

        let components =
            calculate_pay_breakdown(&basis, &hours, &[], &[], &test_rates()).unwrap();

        assert_eq!(components.basic_pay, dec("800"));
        assert_eq!(components.overtime_pay, dec("75.0"));
        assert_eq!(components.holiday_pay, Decimal::ZERO);
        assert_eq!(components.gross_amount, dec("875.0"));
    }

    /// PB-003: salaried overtime uses the hourly equivalent
    #[test]
    fn test_full_time_overtime_uses_hourly_equivalent() {
        let basis = CompensationBasis::FullTime {
            monthly_salary: dec("4330"),
        };
        let hours = PeriodHours {
            regular_hours: Decimal::ZERO,
            overtime_hours: dec("4"),
            holiday_hours: dec("2"),
        };

        let components =
            calculate_pay_breakdown(&basis, &hours, &[], &[], &test_rates()).unwrap();

        // 4330 / 173.2 = 25/hour
        assert_eq!(components.overtime_pay, dec("150"));
        assert_eq!(components.holiday_pay, dec("100"));
        assert_eq!(components.gross_amount, dec("4580"));
    }

    #[test]
    fn test_allowances_and_deductions() {
        let basis = CompensationBasis::FullTime {
            monthly_salary: dec("3000"),
        };
        let allowances = vec![adjustment("transport", "120"), adjustment("meal", "80")];
        let deductions = vec![adjustment("cpf_employee", "600")];

        let components = calculate_pay_breakdown(
            &basis,
            &PeriodHours::default(),
            &allowances,
            &deductions,
            &test_rates(),
        )
        .unwrap();

        assert_eq!(components.total_allowances, dec("200"));
        assert_eq!(components.total_deductions, dec("600"));
        assert_eq!(components.gross_amount, dec("3200"));
        assert_eq!(components.net_amount, dec("2600"));
        // Contribution is computed on gross, after allowances, before deductions.
        assert_eq!(components.employer_contribution, dec("544.00"));
    }

    #[test]
    fn test_negative_adjustment_is_rejected() {
        let basis = CompensationBasis::PartTime {
            hourly_rate: dec("10"),
        };
        let deductions = vec![adjustment("loan", "-50")];

        let result = calculate_pay_breakdown(
            &basis,
            &PeriodHours::default(),
            &[],
            &deductions,
            &test_rates(),
        );

        match result {
            Err(EngineError::InvalidAdjustment { name, .. }) => assert_eq!(name, "loan"),
            other => panic!("Expected InvalidAdjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_part_time_zero_hours_pays_nothing() {
        let basis = CompensationBasis::PartTime {
            hourly_rate: dec("18.50"),
        };

        let components =
            calculate_pay_breakdown(&basis, &PeriodHours::default(), &[], &[], &test_rates())
                .unwrap();

        assert_eq!(components.gross_amount, Decimal::ZERO);
        assert_eq!(components.net_amount, Decimal::ZERO);
        assert_eq!(components.employer_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_deductions_can_exceed_gross() {
        // Net can go negative; the engine does not clamp it.
        let basis = CompensationBasis::PartTime {
            hourly_rate: dec("10"),
        };
        let hours = PeriodHours {
            regular_hours: dec("10"),
            ..PeriodHours::default()
        };
        let deductions = vec![adjustment("equipment", "150")];

        let components =
            calculate_pay_breakdown(&basis, &hours, &[], &deductions, &test_rates()).unwrap();

        assert_eq!(components.gross_amount, dec("100"));
        assert_eq!(components.net_amount, dec("-50"));
    }

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let basis = CompensationBasis::FullTime {
            monthly_salary: dec("5200"),
        };
        let hours = PeriodHours {
            regular_hours: Decimal::ZERO,
            overtime_hours: dec("3"),
            holiday_hours: dec("1"),
        };
        let allowances = vec![adjustment("shift", "45")];

        let first =
            calculate_pay_breakdown(&basis, &hours, &allowances, &[], &test_rates()).unwrap();
        let second =
            calculate_pay_breakdown(&basis, &hours, &allowances, &[], &test_rates()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_hourly_equivalent_divisor() {
        let rate = hourly_equivalent(dec("4330"), &test_rates());
        assert_eq!(rate, dec("25"));
    }
}
