//! Configuration types for the payroll calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the configuration set.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
    /// The jurisdiction the statutory values apply to.
    pub region: String,
}

/// One row of the statutory break schedule.
///
/// Maps a whole number of scheduled hours to the break allowance, in
/// minutes, owed for a shift of that length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreakBucket {
    /// The scheduled-hours bucket (floor of the shift's scheduled hours).
    pub hours: u32,
    /// The break allowance for this bucket, in minutes.
    pub minutes: Decimal,
}

/// Break schedule file structure (`break_schedule.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct BreakScheduleConfig {
    /// The break buckets, ordered by hours ascending.
    pub buckets: Vec<BreakBucket>,
}

/// The validated statutory break schedule.
///
/// Lookups floor the scheduled hours and saturate at the largest bucket,
/// so a 14-hour shift receives the 12-hour allowance.
///
/// # Invariants
///
/// Enforced by [`BreakSchedule::new`]:
/// - at least one bucket
/// - bucket hours are contiguous starting at 0
/// - minutes are non-negative and non-decreasing as hours increase
#[derive(Debug, Clone)]
pub struct BreakSchedule {
    buckets: Vec<BreakBucket>,
}

impl BreakSchedule {
    /// Validates bucket data and builds a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBreakSchedule`] if any structural
    /// invariant is violated.
    pub fn new(buckets: Vec<BreakBucket>) -> EngineResult<Self> {
        if buckets.is_empty() {
            return Err(EngineError::InvalidBreakSchedule {
                message: "schedule must contain at least one bucket".to_string(),
            });
        }

        for (index, bucket) in buckets.iter().enumerate() {
            if bucket.hours as usize != index {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!(
                        "bucket hours must be contiguous from 0; found {} at position {}",
                        bucket.hours, index
                    ),
                });
            }
            if bucket.minutes < Decimal::ZERO {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!("bucket {} has negative minutes", bucket.hours),
                });
            }
        }

        // Statutory break allowances never shrink as the shift gets longer.
        for pair in buckets.windows(2) {
            if pair[1].minutes < pair[0].minutes {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!(
                        "minutes decrease between buckets {} and {}",
                        pair[0].hours, pair[1].hours
                    ),
                });
            }
        }

        Ok(Self { buckets })
    }

    /// Looks up the break allowance in minutes for a shift's scheduled hours.
    ///
    /// The scheduled hours are floored to a whole bucket; hours beyond the
    /// largest bucket saturate at that bucket's allowance.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::{BreakBucket, BreakSchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = BreakSchedule::new(vec![
    ///     BreakBucket { hours: 0, minutes: Decimal::ZERO },
    ///     BreakBucket { hours: 1, minutes: Decimal::new(10, 0) },
    /// ]).unwrap();
    ///
    /// assert_eq!(schedule.minutes_for(Decimal::new(15, 1)), Decimal::new(10, 0)); // 1.5h
    /// assert_eq!(schedule.minutes_for(Decimal::new(9, 0)), Decimal::new(10, 0)); // saturates
    /// ```
    pub fn minutes_for(&self, scheduled_hours: Decimal) -> Decimal {
        let top = self.buckets.len() - 1;
        // Values too large for usize still saturate at the top bucket;
        // negative hours take the zero bucket.
        let index = if scheduled_hours.is_sign_negative() {
            0
        } else {
            scheduled_hours
                .floor()
                .to_usize()
                .map_or(top, |floored| floored.min(top))
        };
        self.buckets[index].minutes
    }

    /// Returns the largest bucket's hours.
    pub fn max_hours(&self) -> u32 {
        self.buckets[self.buckets.len() - 1].hours
    }
}

/// Statutory pay rates and multipliers (`pay_rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PayRates {
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Multiplier applied to the hourly rate for public holiday hours.
    pub holiday_multiplier: Decimal,
    /// Flat employer-side statutory contribution rate applied to gross pay.
    pub employer_contribution_rate: Decimal,
    /// Standard working hours per week, used to derive an hourly rate
    /// from a monthly salary.
    pub standard_weekly_hours: Decimal,
    /// Average number of weeks per month for the same derivation.
    pub average_weeks_per_month: Decimal,
}

impl PayRates {
    /// The divisor that converts a monthly salary into an hourly rate.
    pub fn monthly_to_hourly_divisor(&self) -> Decimal {
        self.standard_weekly_hours * self.average_weeks_per_month
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: EngineMetadata,
    break_schedule: BreakSchedule,
    pay_rates: PayRates,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        break_schedule: BreakSchedule,
        pay_rates: PayRates,
    ) -> Self {
        Self {
            metadata,
            break_schedule,
            pay_rates,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the statutory break schedule.
    pub fn break_schedule(&self) -> &BreakSchedule {
        &self.break_schedule
    }

    /// Returns the statutory pay rates.
    pub fn pay_rates(&self) -> &PayRates {
        &self.pay_rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bucket(hours: u32, minutes: &str) -> BreakBucket {
        BreakBucket {
            hours,
            minutes: dec(minutes),
        }
    }

    fn statutory_schedule() -> BreakSchedule {
        BreakSchedule::new(vec![
            bucket(0, "0"),
            bucket(1, "0"),
            bucket(2, "0"),
            bucket(3, "15"),
            bucket(4, "25"),
            bucket(5, "35"),
            bucket(6, "40"),
            bucket(7, "45"),
            bucket(8, "55"),
            bucket(9, "60"),
            bucket(10, "65"),
            bucket(11, "75"),
            bucket(12, "80"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let result = BreakSchedule::new(vec![]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBreakSchedule { .. })
        ));
    }

    #[test]
    fn test_non_contiguous_buckets_rejected() {
        let result = BreakSchedule::new(vec![bucket(0, "0"), bucket(2, "10")]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBreakSchedule { .. })
        ));
    }

    #[test]
    fn test_decreasing_minutes_rejected() {
        let result = BreakSchedule::new(vec![bucket(0, "0"), bucket(1, "20"), bucket(2, "10")]);
        match result {
            Err(EngineError::InvalidBreakSchedule { message }) => {
                assert!(message.contains("decrease"));
            }
            other => panic!("Expected InvalidBreakSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_minutes_rejected() {
        let result = BreakSchedule::new(vec![bucket(0, "-5")]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidBreakSchedule { .. })
        ));
    }

    #[test]
    fn test_lookup_floors_fractional_hours() {
        let schedule = statutory_schedule();
        assert_eq!(schedule.minutes_for(dec("7.99")), dec("45"));
        assert_eq!(schedule.minutes_for(dec("8.0")), dec("55"));
    }

    #[test]
    fn test_lookup_saturates_above_max_bucket() {
        let schedule = statutory_schedule();
        assert_eq!(schedule.minutes_for(dec("12")), dec("80"));
        assert_eq!(schedule.minutes_for(dec("13.5")), dec("80"));
        assert_eq!(schedule.minutes_for(dec("24")), dec("80"));
    }

    #[test]
    fn test_lookup_saturates_beyond_usize_range() {
        // Hours whose floor overflows usize must still take the top
        // bucket, not fall back to the zero bucket.
        let schedule = statutory_schedule();
        assert_eq!(schedule.minutes_for(dec("100000000000000000000")), dec("80"));
        assert_eq!(schedule.minutes_for(Decimal::MAX), dec("80"));
    }

    #[test]
    fn test_lookup_negative_hours_take_zero_bucket() {
        let schedule = statutory_schedule();
        assert_eq!(schedule.minutes_for(dec("-1")), dec("0"));
        assert_eq!(schedule.minutes_for(dec("-0.5")), dec("0"));
    }

    #[test]
    fn test_lookup_short_shifts_have_no_break() {
        let schedule = statutory_schedule();
        assert_eq!(schedule.minutes_for(dec("0")), dec("0"));
        assert_eq!(schedule.minutes_for(dec("2.75")), dec("0"));
        assert_eq!(schedule.minutes_for(dec("3")), dec("15"));
    }

    #[test]
    fn test_max_hours() {
        assert_eq!(statutory_schedule().max_hours(), 12);
    }

    #[test]
    fn test_monthly_to_hourly_divisor() {
        let rates = PayRates {
            overtime_multiplier: dec("1.5"),
            holiday_multiplier: dec("2.0"),
            employer_contribution_rate: dec("0.17"),
            standard_weekly_hours: dec("40"),
            average_weeks_per_month: dec("4.33"),
        };
        assert_eq!(rates.monthly_to_hourly_divisor(), dec("173.20"));
    }
}
