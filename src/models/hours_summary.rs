//! Aggregated work-hours summary models.
//!
//! This module contains the [`AggregatedHours`] roll-up produced from a
//! list of work records, bucketed by day, week, month, and year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accumulated hour totals for one aggregation bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBucket {
    /// Sum of scheduled hours for records in this bucket.
    pub scheduled_hours: Decimal,
    /// Sum of break minutes for records in this bucket.
    pub break_time_minutes: Decimal,
    /// Sum of payable hours for records in this bucket.
    pub payable_hours: Decimal,
}

impl HoursBucket {
    /// Adds one record's values into the bucket. Missing values count as zero.
    pub fn accumulate(
        &mut self,
        scheduled_hours: Option<Decimal>,
        break_time_minutes: Option<Decimal>,
        payable_hours: Option<Decimal>,
    ) {
        self.scheduled_hours += scheduled_hours.unwrap_or(Decimal::ZERO);
        self.break_time_minutes += break_time_minutes.unwrap_or(Decimal::ZERO);
        self.payable_hours += payable_hours.unwrap_or(Decimal::ZERO);
    }
}

/// Work-hour totals bucketed four ways.
///
/// Bucket keys are human-readable strings: `2026-Jan-05` for a day,
/// `2026-W02` for an ISO week, `2026-Jan` for a month, and `2026` for a
/// year. Ordered maps keep the serialized summaries stable for reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedHours {
    /// Totals keyed by day (`{year}-{monthAbbrev}-{day:02}`).
    pub by_day: BTreeMap<String, HoursBucket>,
    /// Totals keyed by ISO week (`{isoYear}-W{week}`).
    pub by_week: BTreeMap<String, HoursBucket>,
    /// Totals keyed by month (`{year}-{monthAbbrev}`).
    pub by_month: BTreeMap<String, HoursBucket>,
    /// Totals keyed by year (`{year}`).
    pub by_year: BTreeMap<String, HoursBucket>,
}

impl AggregatedHours {
    /// Returns true if no records have been aggregated.
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
            && self.by_week.is_empty()
            && self.by_month.is_empty()
            && self.by_year.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let aggregated = AggregatedHours::default();
        assert!(aggregated.is_empty());
    }

    #[test]
    fn test_accumulate_sums_values() {
        let mut bucket = HoursBucket::default();
        bucket.accumulate(
            Some(Decimal::new(8, 0)),
            Some(Decimal::new(55, 0)),
            Some(Decimal::new(708, 2)),
        );
        bucket.accumulate(
            Some(Decimal::new(4, 0)),
            Some(Decimal::new(25, 0)),
            Some(Decimal::new(358, 2)),
        );

        assert_eq!(bucket.scheduled_hours, Decimal::new(12, 0));
        assert_eq!(bucket.break_time_minutes, Decimal::new(80, 0));
        assert_eq!(bucket.payable_hours, Decimal::new(1066, 2));
    }

    #[test]
    fn test_accumulate_treats_missing_values_as_zero() {
        let mut bucket = HoursBucket::default();
        bucket.accumulate(Some(Decimal::new(8, 0)), None, None);

        assert_eq!(bucket.scheduled_hours, Decimal::new(8, 0));
        assert_eq!(bucket.break_time_minutes, Decimal::ZERO);
        assert_eq!(bucket.payable_hours, Decimal::ZERO);
    }

    #[test]
    fn test_buckets_serialize_in_key_order() {
        let mut aggregated = AggregatedHours::default();
        aggregated
            .by_year
            .insert("2027".to_string(), HoursBucket::default());
        aggregated
            .by_year
            .insert("2026".to_string(), HoursBucket::default());

        let json = serde_json::to_string(&aggregated).unwrap();
        assert!(json.find("2026").unwrap() < json.find("2027").unwrap());
    }
}
