//! Calendar day and day-key models.
//!
//! # Day Key
//! A day key is the canonical `YYYY-MM-DD` text form of a date: year padded
//! to four digits, month and day padded to two. Keys identify days inside a
//! roster and inside blocked-day sets.
//!
//! # Weekend
//! Weekend status is derived from the date on every call. It is never stored.

use std::borrow::Borrow;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Canonical `YYYY-MM-DD` identifier of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    /// Formats the key for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    /// Parses untrusted text into a key.
    ///
    /// Rejects anything that is not the canonical form of a real date
    /// (`2025-2-1` and `2025-02-30` are both errors).
    pub fn parse(text: &str) -> Result<Self> {
        let date = Self::parse_date(text)?;
        let key = Self::from_date(date);
        if key.0 != text {
            return Err(RosterError::malformed_key(
                text,
                format!("not in canonical form, expected '{key}'"),
            ));
        }
        Ok(key)
    }

    /// Parses the date encoded in a key.
    pub fn parse_date(text: &str) -> Result<NaiveDate> {
        let mut parts = text.rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(RosterError::malformed_key(text, "expected YYYY-MM-DD"));
        };

        let year: i32 = year
            .parse()
            .map_err(|_| RosterError::malformed_key(text, "year is not a number"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| RosterError::malformed_key(text, "month is not a number"))?;
        let day: u32 = day
            .parse()
            .map_err(|_| RosterError::malformed_key(text, "day is not a number"))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| RosterError::malformed_key(text, "no such calendar date"))
    }

    /// The key text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year encoded in the key.
    pub fn year(&self) -> Option<i32> {
        Self::parse_date(&self.0).ok().map(|d| d.year())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DayKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DayKey {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// One day of a roster with the people assigned to it.
///
/// The assigned list never contains the same name twice. Mutation goes
/// through [`crate::assignment`] (manual path) or through whole-month
/// replacement by the auto-roster engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarDayRepr")]
pub struct CalendarDay {
    date: NaiveDate,
    key: DayKey,
    therapists: Vec<String>,
}

#[derive(Deserialize)]
struct CalendarDayRepr {
    date: NaiveDate,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    therapists: Vec<String>,
}

impl TryFrom<CalendarDayRepr> for CalendarDay {
    type Error = RosterError;

    fn try_from(repr: CalendarDayRepr) -> Result<Self> {
        let mut day = CalendarDay::new(repr.date);
        if let Some(key) = repr.key {
            if key != day.key.as_str() {
                return Err(RosterError::malformed_key(
                    key,
                    format!("does not match date {}", repr.date),
                ));
            }
        }
        for name in repr.therapists {
            day.push_unique(name);
        }
        Ok(day)
    }
}

impl CalendarDay {
    /// Creates an unassigned day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            key: DayKey::from_date(date),
            therapists: Vec::new(),
        }
    }

    /// Adds a person without any eligibility check. Duplicates are ignored.
    ///
    /// Intended for building fixtures and restoring saved state.
    pub fn with_therapist(mut self, name: impl Into<String>) -> Self {
        self.push_unique(name.into());
        self
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn key(&self) -> &DayKey {
        &self.key
    }

    /// Assigned people in assignment order.
    #[inline]
    pub fn therapists(&self) -> &[String] {
        &self.therapists
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether nobody is assigned.
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        self.therapists.is_empty()
    }

    /// Whether the named person is assigned.
    pub fn has(&self, name: &str) -> bool {
        self.therapists.iter().any(|t| t == name)
    }

    /// Appends `name` unless already present. Returns whether it was added.
    pub(crate) fn push_unique(&mut self, name: String) -> bool {
        if self.has(&name) {
            return false;
        }
        self.therapists.push(name);
        true
    }

    /// Removes `name` if present. Returns whether it was removed.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.therapists.len();
        self.therapists.retain(|t| t != name);
        self.therapists.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_key_zero_padding() {
        assert_eq!(DayKey::from_date(date(2025, 2, 1)).as_str(), "2025-02-01");
        assert_eq!(DayKey::from_date(date(2025, 12, 25)).as_str(), "2025-12-25");
        assert_eq!(DayKey::from_date(date(987, 7, 4)).as_str(), "0987-07-04");
    }

    #[test]
    fn test_key_parse_roundtrip() {
        let key = DayKey::parse("2028-02-29").unwrap();
        assert_eq!(key.year(), Some(2028));
        assert_eq!(DayKey::parse_date("2028-02-29").unwrap(), date(2028, 2, 29));
    }

    #[test]
    fn test_key_parse_rejects_bad_input() {
        assert!(DayKey::parse("2025-2-1").is_err()); // not padded
        assert!(DayKey::parse("2025-02-29").is_err()); // not a leap year
        assert!(DayKey::parse("2025-13-01").is_err());
        assert!(DayKey::parse("yesterday").is_err());
        assert!(DayKey::parse("2025/02/01").is_err());
    }

    #[test]
    fn test_key_deserialize_validates() {
        let ok: DayKey = serde_json::from_str("\"2025-03-04\"").unwrap();
        assert_eq!(ok.as_str(), "2025-03-04");
        assert!(serde_json::from_str::<DayKey>("\"2025-3-4\"").is_err());
    }

    #[test]
    fn test_weekend_is_derived() {
        assert!(CalendarDay::new(date(2025, 3, 1)).is_weekend()); // Saturday
        assert!(CalendarDay::new(date(2025, 3, 2)).is_weekend()); // Sunday
        assert!(!CalendarDay::new(date(2025, 3, 3)).is_weekend()); // Monday
    }

    #[test]
    fn test_push_unique_and_remove() {
        let mut day = CalendarDay::new(date(2025, 3, 3));
        assert!(day.push_unique("Alice".into()));
        assert!(!day.push_unique("Alice".into()));
        assert!(day.push_unique("Bob".into()));
        assert_eq!(day.therapists(), ["Alice", "Bob"]);

        assert!(day.remove("Alice"));
        assert!(!day.remove("Alice"));
        assert_eq!(day.therapists(), ["Bob"]);
    }

    #[test]
    fn test_day_deserialize_dedups_and_checks_key() {
        let day: CalendarDay = serde_json::from_str(
            r#"{"date":"2025-03-03","key":"2025-03-03","therapists":["A","A","B"]}"#,
        )
        .unwrap();
        assert_eq!(day.therapists(), ["A", "B"]);

        let mismatch = serde_json::from_str::<CalendarDay>(
            r#"{"date":"2025-03-03","key":"2025-03-04","therapists":[]}"#,
        );
        assert!(mismatch.is_err());
    }
}
