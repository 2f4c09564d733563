//! Work schedule CSV parsing.
//!
//! This module parses a pasted or uploaded work schedule into
//! [`WorkScheduleEntry`] rows with their derived hour breakdowns.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::BreakSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::WorkScheduleEntry;

use super::break_time::{break_minutes, minutes_to_hours};
use super::payable_hours::payable_hours;
use super::scheduled_hours::scheduled_hours;

const DATE_COLUMN: &str = "Date";
const START_COLUMN: &str = "Start Time";
const END_COLUMN: &str = "End Time";

/// Column positions resolved from the header row.
struct ColumnIndices {
    date: usize,
    start_time: usize,
    end_time: usize,
}

/// Parses work schedule CSV text into entries with derived hours.
///
/// The header row must contain the columns `Date`, `Start Time`, and
/// `End Time` (case-insensitive, any order). Data rows are read
/// positionally per the header; a row with a blank required field or an
/// unparseable time is skipped, and parsing continues with the remaining
/// rows. Date strings are passed through unmodified.
///
/// # Errors
///
/// Returns [`EngineError::ScheduleFormat`] naming every missing required
/// column if the header is incomplete. No partial parse is returned in
/// that case.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::parse_schedule_csv;
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/payroll").unwrap();
/// let csv = "Date,Start Time,End Time\n2026-01-05,09:00,17:00\n";
/// let entries = parse_schedule_csv(csv, config.break_schedule()).unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub fn parse_schedule_csv(
    text: &str,
    schedule: &BreakSchedule,
) -> EngineResult<Vec<WorkScheduleEntry>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        // An unreadable header row carries none of the required columns.
        Err(_) => StringRecord::new(),
    };
    let indices = resolve_columns(&headers)?;

    let mut entries = Vec::new();

    for record in reader.records() {
        let Ok(record) = record else {
            continue;
        };
        let Some(entry) = parse_row(&record, &indices, schedule) else {
            continue;
        };
        entries.push(entry);
    }

    Ok(entries)
}

/// Locates the required columns in the header, case-insensitively.
fn resolve_columns(headers: &StringRecord) -> EngineResult<ColumnIndices> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };

    let date = find(DATE_COLUMN);
    let start_time = find(START_COLUMN);
    let end_time = find(END_COLUMN);

    let missing: Vec<String> = [
        (DATE_COLUMN, date),
        (START_COLUMN, start_time),
        (END_COLUMN, end_time),
    ]
    .iter()
    .filter(|(_, index)| index.is_none())
    .map(|(name, _)| name.to_string())
    .collect();

    if !missing.is_empty() {
        return Err(EngineError::ScheduleFormat { missing });
    }

    Ok(ColumnIndices {
        date: date.unwrap(),
        start_time: start_time.unwrap(),
        end_time: end_time.unwrap(),
    })
}

/// Builds one entry from a data row, or `None` if the row is unusable.
fn parse_row(
    record: &StringRecord,
    indices: &ColumnIndices,
    schedule: &BreakSchedule,
) -> Option<WorkScheduleEntry> {
    let date = record.get(indices.date)?.trim();
    let start_time = record.get(indices.start_time)?.trim();
    let end_time = record.get(indices.end_time)?.trim();

    if date.is_empty() || start_time.is_empty() || end_time.is_empty() {
        return None;
    }

    let scheduled = scheduled_hours(start_time, end_time).ok()?;
    let break_time_minutes = break_minutes(scheduled, schedule);
    let break_time_hours = minutes_to_hours(break_time_minutes);
    let payable = payable_hours(scheduled, break_time_hours);

    Some(WorkScheduleEntry {
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        scheduled_hours: scheduled,
        break_time_minutes,
        break_time_hours,
        payable_hours: payable,
    })
}
