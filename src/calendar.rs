//! Calendar generator.
//!
//! Builds the day skeleton of a roster year: twelve months, one unassigned
//! [`CalendarDay`] per date, proleptic Gregorian leap-year rules.
//!
//! # Range
//! Dates are backed by `chrono::NaiveDate`. Years outside its range
//! (roughly ±262,000) produce twelve empty months and a warning; nothing in
//! the roster core can panic on a well-typed year.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{CalendarDay, Roster, MONTHS_PER_YEAR};

/// Whether `year` is a Gregorian leap year.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (`month` is 1-based). Returns 0 for an invalid
/// month number.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Generates a fresh roster for `year` with every day unassigned.
///
/// Calling this twice yields equal but independently owned rosters.
///
/// # Example
/// ```
/// use u_roster::calendar::generate_calendar;
///
/// let roster = generate_calendar(2025);
/// let february = roster.month(1).unwrap();
/// assert_eq!(february.len(), 28);
/// assert_eq!(february[0].key().as_str(), "2025-02-01");
/// ```
pub fn generate_calendar(year: i32) -> Roster {
    let months = (1..=MONTHS_PER_YEAR as u32)
        .map(|month| month_days(year, month))
        .collect::<Option<Vec<_>>>();

    match months {
        Some(months) => Roster::from_months(year, months),
        None => {
            warn!(year, "year outside supported date range, roster left empty");
            Roster::from_months(year, vec![Vec::new(); MONTHS_PER_YEAR])
        }
    }
}

fn month_days(year: i32, month: u32) -> Option<Vec<CalendarDay>> {
    (1..=days_in_month(year, month))
        .map(|day| NaiveDate::from_ymd_opt(year, month, day).map(CalendarDay::new))
        .collect()
}
