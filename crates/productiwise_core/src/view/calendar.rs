//! Calendar bucketing and month grid.
//!
//! # Invariants
//! - Buckets are keyed by exact `YYYY-MM-DD` deadline strings.
//! - Grid weeks start on Sunday; leading blanks equal the weekday index of
//!   the first day of the month.

use crate::model::task::Task;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

/// Formats a date the way deadline buckets are keyed.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Groups tasks by deadline key, keeping collection order inside a bucket.
pub fn tasks_by_date(tasks: &[Task]) -> BTreeMap<String, Vec<&Task>> {
    let mut buckets: BTreeMap<String, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        buckets.entry(task.deadline_key()).or_default().push(task);
    }
    buckets
}

/// Displayed month, always normalized to its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first_day: NaiveDate,
}

impl MonthCursor {
    /// Cursor for the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Month number `1..=12`.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Heading text such as `March 2026`.
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// Stays put at the lower bound of the date range.
    pub fn previous(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Stays put at the upper bound of the date range.
    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first_day.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first_day).num_days() as u32,
            // Only December of the maximum year lands here.
            None => 31,
        }
    }

    /// Number of blank cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub key: String,
    pub is_today: bool,
    pub tasks: Vec<&'a Task>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth<'a> {
    pub cursor: MonthCursor,
    pub leading_blanks: u32,
    pub days: Vec<DayCell<'a>>,
}

/// Builds the grid for `cursor`, attaching each day's tasks.
pub fn calendar_month<'a>(
    cursor: MonthCursor,
    tasks: &'a [Task],
    today: NaiveDate,
) -> CalendarMonth<'a> {
    let mut buckets = tasks_by_date(tasks);
    let days = (1..=cursor.days_in_month())
        .filter_map(|day| cursor.first_day().with_day(day))
        .map(|date| {
            let key = date_key(date);
            DayCell {
                day: date.day(),
                tasks: buckets.remove(&key).unwrap_or_default(),
                is_today: date == today,
                key,
            }
        })
        .collect();

    CalendarMonth {
        cursor,
        leading_blanks: cursor.leading_blanks(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::MonthCursor;
    use chrono::NaiveDate;

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor::containing(NaiveDate::from_ymd_opt(year, month, 15).unwrap())
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(cursor(2024, 2).days_in_month(), 29);
        assert_eq!(cursor(2025, 2).days_in_month(), 28);
        assert_eq!(cursor(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn navigation_wraps_year_boundaries() {
        assert_eq!(cursor(2026, 1).previous(), cursor(2025, 12));
        assert_eq!(cursor(2025, 12).next(), cursor(2026, 1));
    }

    #[test]
    fn leading_blanks_follow_sunday_first_weeks() {
        // 2026-03-01 is a Sunday, 2026-10-01 a Thursday.
        assert_eq!(cursor(2026, 3).leading_blanks(), 0);
        assert_eq!(cursor(2026, 10).leading_blanks(), 4);
    }

    #[test]
    fn title_names_month_and_year() {
        assert_eq!(cursor(2026, 3).title(), "March 2026");
    }
}
