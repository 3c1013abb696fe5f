//! Yearly roster model.
//!
//! A roster holds the twelve months of one year, each an ordered sequence of
//! days by day-of-month. Months are indexed 0 (January) to 11 (December).

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::{CalendarDay, DayKey};
use crate::error::{Result, RosterError};

/// Number of months in a roster.
pub const MONTHS_PER_YEAR: usize = 12;

/// Twelve months of days for one year.
///
/// Deserialization rejects a roster whose months do not hold exactly the
/// dates of its `year`, so key lookups always land on the matching date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterRepr")]
pub struct Roster {
    year: i32,
    months: Vec<Vec<CalendarDay>>,
}

#[derive(Deserialize)]
struct RosterRepr {
    year: i32,
    months: Vec<Vec<CalendarDay>>,
}

impl TryFrom<RosterRepr> for Roster {
    type Error = RosterError;

    fn try_from(repr: RosterRepr) -> Result<Self> {
        let malformed = |reason: String| RosterError::MalformedRoster {
            year: repr.year,
            reason,
        };
        if repr.months.len() != MONTHS_PER_YEAR {
            return Err(malformed(format!(
                "expected {MONTHS_PER_YEAR} months, found {}",
                repr.months.len()
            )));
        }

        let skeleton = crate::calendar::generate_calendar(repr.year);
        for (idx, (got, expected)) in repr.months.iter().zip(skeleton.months()).enumerate() {
            let same_dates = got.len() == expected.len()
                && got.iter().zip(expected).all(|(a, b)| a.date() == b.date());
            if !same_dates {
                return Err(malformed(format!(
                    "month {} does not match the calendar",
                    idx + 1
                )));
            }
        }

        Ok(Self {
            year: repr.year,
            months: repr.months,
        })
    }
}

impl Roster {
    /// Creates a fresh, fully unassigned roster for a year.
    pub fn new(year: i32) -> Self {
        crate::calendar::generate_calendar(year)
    }

    pub(crate) fn from_months(year: i32, months: Vec<Vec<CalendarDay>>) -> Self {
        debug_assert_eq!(months.len(), MONTHS_PER_YEAR);
        Self { year, months }
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All months in calendar order.
    pub fn months(&self) -> &[Vec<CalendarDay>] {
        &self.months
    }

    /// Days of a month (0-based index).
    pub fn month(&self, month: usize) -> Option<&[CalendarDay]> {
        self.months.get(month).map(Vec::as_slice)
    }

    /// Replaces a month wholesale with a new day sequence.
    ///
    /// Returns the previous month, or `None` (and leaves the roster untouched)
    /// if the index is out of range or the replacement does not cover the
    /// same dates.
    pub fn replace_month(
        &mut self,
        month: usize,
        days: Vec<CalendarDay>,
    ) -> Option<Vec<CalendarDay>> {
        let current = self.months.get_mut(month)?;
        let same_dates = current.len() == days.len()
            && current.iter().zip(&days).all(|(a, b)| a.date() == b.date());
        if !same_dates {
            return None;
        }
        Some(std::mem::replace(current, days))
    }

    /// Looks up a day by key. Keys from other years resolve to `None`.
    pub fn day(&self, key: &str) -> Option<&CalendarDay> {
        let (m, d) = self.locate_key(key)?;
        self.months.get(m)?.get(d)
    }

    /// Mutable lookup by key.
    pub fn day_mut(&mut self, key: &str) -> Option<&mut CalendarDay> {
        let (m, d) = self.locate_key(key)?;
        self.months.get_mut(m)?.get_mut(d)
    }

    /// Iterates every day of the year in order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.months.iter().flatten()
    }

    /// Total number of days in the roster.
    pub fn day_count(&self) -> usize {
        self.months.iter().map(Vec::len).sum()
    }

    fn locate_key(&self, key: &str) -> Option<(usize, usize)> {
        let date = DayKey::parse_date(key).ok()?;
        if date.year() != self.year {
            return None;
        }
        Some((date.month0() as usize, date.day0() as usize))
    }
}
