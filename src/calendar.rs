//! Projects a plan onto calendar dates for timeline and table views.

use crate::error::{CalendarError, CalendarResult};
use crate::item::ScheduledItem;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use serde::Serialize;

/// Sessions start at 09:00 on their projected date.
const SESSION_START: NaiveTime = NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time");
/// `num_days_from_ce` of 1970-01-01, the day zero of polars `Date` columns.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub level: u32,
    pub week: u32,
    pub day: String,
    pub day_number: u32,
    pub date: NaiveDate,
    pub activity: String,
    pub module: String,
    pub duration_minutes: u32,
    pub goal: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

/// Extracts `M` from a `Week<N>-Day<M>` label. Labels without a numeric
/// `Day` part count as day 1.
pub fn parse_day_number(day_label: &str) -> u32 {
    day_label
        .split('-')
        .filter_map(|part| part.strip_prefix("Day"))
        .find(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(1)
}

pub fn parse_start_date(input: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidStartDate(input.to_string()))
}

/// Places one item on the calendar. Fails when the projected date falls
/// outside the range chrono can represent.
pub fn project_item(item: &ScheduledItem, start: NaiveDate) -> CalendarResult<CalendarEntry> {
    let day_number = parse_day_number(&item.day);
    let offset = (i64::from(item.week) - 1) * 7 + i64::from(day_number) - 1;
    let out_of_range = || CalendarError::OutOfRange {
        day: item.day.clone(),
        start,
    };
    let date = Duration::try_days(offset)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(out_of_range)?;
    let start_at = date.and_time(SESSION_START);
    let end_at = start_at
        .checked_add_signed(Duration::minutes(i64::from(item.duration_minutes)))
        .ok_or_else(out_of_range)?;

    Ok(CalendarEntry {
        level: item.level,
        week: item.week,
        day: item.day.clone(),
        day_number,
        date,
        activity: item.activity.clone(),
        module: item.module.clone(),
        duration_minutes: item.duration_minutes,
        goal: item.goal.clone(),
        start_at,
        end_at,
    })
}

pub fn project_calendar(
    items: &[ScheduledItem],
    start: NaiveDate,
) -> CalendarResult<Vec<CalendarEntry>> {
    items.iter().map(|item| project_item(item, start)).collect()
}

/// Calendar table sorted by date, then day number.
pub fn calendar_dataframe(entries: &[CalendarEntry]) -> CalendarResult<DataFrame> {
    let levels: Vec<i32> = entries.iter().map(|e| e.level as i32).collect();
    let dates: Vec<i32> = entries.iter().map(|e| date_to_i32(e.date)).collect();
    let weeks: Vec<String> = entries.iter().map(|e| format!("Week {}", e.week)).collect();
    let days: Vec<&str> = entries.iter().map(|e| e.day.as_str()).collect();
    let activities: Vec<&str> = entries.iter().map(|e| e.activity.as_str()).collect();
    let modules: Vec<&str> = entries.iter().map(|e| e.module.as_str()).collect();
    let durations: Vec<i32> = entries.iter().map(|e| e.duration_minutes as i32).collect();
    let goals: Vec<&str> = entries.iter().map(|e| e.goal.as_str()).collect();
    let starts: Vec<String> = entries
        .iter()
        .map(|e| e.start_at.format(DATETIME_FORMAT).to_string())
        .collect();
    let ends: Vec<String> = entries
        .iter()
        .map(|e| e.end_at.format(DATETIME_FORMAT).to_string())
        .collect();
    let day_numbers: Vec<i32> = entries.iter().map(|e| e.day_number as i32).collect();

    let columns = vec![
        Series::new(PlSmallStr::from_static("Level"), levels).into_column(),
        Series::new(PlSmallStr::from_static("Date"), dates)
            .cast(&DataType::Date)?
            .into_column(),
        Series::new(PlSmallStr::from_static("Week"), weeks).into_column(),
        Series::new(PlSmallStr::from_static("Day"), days).into_column(),
        Series::new(PlSmallStr::from_static("Activity"), activities).into_column(),
        Series::new(PlSmallStr::from_static("Module"), modules).into_column(),
        Series::new(PlSmallStr::from_static("Duration (min)"), durations).into_column(),
        Series::new(PlSmallStr::from_static("Goal"), goals).into_column(),
        Series::new(PlSmallStr::from_static("Start"), starts).into_column(),
        Series::new(PlSmallStr::from_static("End"), ends).into_column(),
        Series::new(PlSmallStr::from_static("Day number"), day_numbers).into_column(),
    ];

    let df = DataFrame::new(columns)?;
    let sorted = df.sort(
        ["Date", "Day number"],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;
    Ok(sorted)
}

fn date_to_i32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_ignores_non_numeric_parts() {
        assert_eq!(parse_day_number("Week3-Day5"), 5);
        assert_eq!(parse_day_number("Week3-DayX"), 1);
        assert_eq!(parse_day_number("Day"), 1);
        assert_eq!(parse_day_number(""), 1);
    }

    #[test]
    fn epoch_offset_matches_chrono() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(date_to_i32(epoch), 0);
        let date = NaiveDate::from_ymd_opt(1970, 1, 11).unwrap();
        assert_eq!(date_to_i32(date), 10);
        let before = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        assert_eq!(date_to_i32(before), -1);
    }

    #[test]
    fn session_starts_at_nine() {
        assert_eq!(SESSION_START, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }
}
