//! Work-hours aggregation.
//!
//! This module rolls a list of work records up into day, week, month, and
//! year summaries for the work-hours report screens.

use chrono::Datelike;

use crate::models::{AggregatedHours, WorkRecord};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Aggregates work records by day, week, month, and year.
///
/// Each record's `scheduled_hours`, `break_time_minutes`, and
/// `payable_hours` are summed into every bucket its `work_date` belongs
/// to; missing numeric fields contribute 0. Totals are plain sums with no
/// normalization or truncation. Week buckets use the ISO week number
/// paired with the ISO week-based year, so records near a year boundary
/// land in one coherent week.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_work_hours;
/// use payroll_engine::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![WorkRecord {
///     work_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     scheduled_hours: Some(Decimal::new(8, 0)),
///     break_time_minutes: Some(Decimal::new(55, 0)),
///     payable_hours: Some(Decimal::new(708, 2)),
/// }];
///
/// let aggregated = aggregate_work_hours(&records);
/// assert_eq!(aggregated.by_day["2026-Jan-05"].scheduled_hours, Decimal::new(8, 0));
/// assert_eq!(aggregated.by_month["2026-Jan"].payable_hours, Decimal::new(708, 2));
/// assert_eq!(aggregated.by_year["2026"].break_time_minutes, Decimal::new(55, 0));
/// ```
pub fn aggregate_work_hours(records: &[WorkRecord]) -> AggregatedHours {
    let mut aggregated = AggregatedHours::default();

    for record in records {
        let date = record.work_date;
        let month = MONTH_ABBREV[date.month0() as usize];
        let iso = date.iso_week();

        let day_key = format!("{}-{}-{:02}", date.year(), month, date.day());
        let week_key = format!("{}-W{:02}", iso.year(), iso.week());
        let month_key = format!("{}-{}", date.year(), month);
        let year_key = date.year().to_string();

        for (map, key) in [
            (&mut aggregated.by_day, day_key),
            (&mut aggregated.by_week, week_key),
            (&mut aggregated.by_month, month_key),
            (&mut aggregated.by_year, year_key),
        ] {
            map.entry(key).or_default().accumulate(
                record.scheduled_hours,
                record.break_time_minutes,
                record.payable_hours,
            );
        }
    }

    aggregated
}
