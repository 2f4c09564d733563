//! Work schedule and work record models.
//!
//! This module defines the [`WorkScheduleEntry`] produced when a schedule
//! row is parsed, and the [`WorkRecord`] shape of persisted work-hour
//! records fed into aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's clock-in/clock-out row with its derived hour breakdown.
///
/// Only `date`, `start_time`, and `end_time` come from the caller; the
/// remaining fields are computed by the hours engine and are never set
/// independently. The date is a caller-defined string passed through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkScheduleEntry {
    /// The date string from the schedule row, passed through unmodified.
    pub date: String,
    /// The clock-in time as a 24-hour "HH:MM" string.
    pub start_time: String,
    /// The clock-out time as a 24-hour "HH:MM" string.
    pub end_time: String,
    /// Hours between start and end (end rolling into the next day when
    /// earlier than start), rounded to 2 decimals.
    pub scheduled_hours: Decimal,
    /// The statutory break allowance for the shift, in minutes.
    pub break_time_minutes: Decimal,
    /// The break allowance converted to hours, rounded to 2 decimals.
    pub break_time_hours: Decimal,
    /// Scheduled hours minus the break allowance, floored at zero.
    pub payable_hours: Decimal,
}

/// A persisted work-hours record as fed into aggregation.
///
/// Numeric fields are optional; records with missing values contribute
/// zero to their buckets rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The calendar day the record covers.
    pub work_date: NaiveDate,
    /// Scheduled hours for the day, if recorded.
    #[serde(default)]
    pub scheduled_hours: Option<Decimal>,
    /// Break allowance in minutes, if recorded.
    #[serde(default)]
    pub break_time_minutes: Option<Decimal>,
    /// Payable hours for the day, if recorded.
    #[serde(default)]
    pub payable_hours: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_record_missing_numerics_deserialize_as_none() {
        let json = r#"{ "work_date": "2026-01-15" }"#;
        let record: WorkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.work_date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert!(record.scheduled_hours.is_none());
        assert!(record.break_time_minutes.is_none());
        assert!(record.payable_hours.is_none());
    }

    #[test]
    fn test_work_record_round_trip() {
        let record = WorkRecord {
            work_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            scheduled_hours: Some(Decimal::new(80, 1)),
            break_time_minutes: Some(Decimal::new(55, 0)),
            payable_hours: Some(Decimal::new(708, 2)),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: WorkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_schedule_entry_serializes_all_derived_fields() {
        let entry = WorkScheduleEntry {
            date: "15/01/2026".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            scheduled_hours: Decimal::new(80, 1),
            break_time_minutes: Decimal::new(55, 0),
            break_time_hours: Decimal::new(92, 2),
            payable_hours: Decimal::new(708, 2),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "15/01/2026");
        assert_eq!(json["scheduled_hours"], "8.0");
        assert_eq!(json["payable_hours"], "7.08");
    }
}
