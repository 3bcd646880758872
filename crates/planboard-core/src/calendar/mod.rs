//! Gregorian month math for the day-level calendar view.
//!
//! The month view is a fixed 7-column grid starting on Sunday, padded with
//! blank cells before day 1 and after the last day.

mod grid;

pub use grid::{GridCell, MonthGrid, WEEKDAYS};

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Column headers for the annual board, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Short label for a 1-based month.
pub fn month_label(month: u32) -> Result<&'static str, ValidationError> {
    check_month(month)?;
    Ok(MONTH_LABELS[month as usize - 1])
}

/// Gregorian rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn check_month(month: u32) -> Result<(), ValidationError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMonth(month))
    }
}

/// Number of days in a 1-based month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    check_month(month)?;
    Ok(match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    })
}

/// Weekday of the 1st of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> Result<u32, ValidationError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::InvalidMonth(month))?;
    Ok(first.weekday().num_days_from_sunday())
}

/// Padded grid length: `ceil((days + first_weekday) / 7) * 7`.
pub fn grid_len(days: u32, first_weekday: u32) -> u32 {
    (days + first_weekday).div_ceil(7) * 7
}

/// Calendar date for a day of a month, validating the day.
pub fn date_of(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
    let days = days_in_month(year, month)?;
    if day == 0 || day > days {
        return Err(ValidationError::InvalidDay { year, month, day });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDay { year, month, day })
}

/// `YYYY-MM-DD` for a day of a month.
pub fn format_day(year: i32, month: u32, day: u32) -> Result<String, ValidationError> {
    Ok(date_of(year, month, day)?.format("%Y-%m-%d").to_string())
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// First and last date of a month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let last = days_in_month(year, month)?;
    Ok((date_of(year, month, 1)?, date_of(year, month, last)?))
}

/// Turn a normalized day range in one month into a date range.
pub fn day_range(
    year: i32,
    month: u32,
    start_day: u32,
    end_day: u32,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if start_day > end_day {
        return Err(ValidationError::InvertedRange {
            start: start_day,
            end: end_day,
        });
    }
    Ok((date_of(year, month, start_day)?, date_of(year, month, end_day)?))
}
