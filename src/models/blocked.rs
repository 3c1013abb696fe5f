//! Blocked-day (holiday / closure) models.
//!
//! Blocked days are externally supplied configuration. The roster core only
//! looks them up. A year without a configured set is treated as having no
//! blocked days.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{CalendarDay, DayKey};

static EMPTY: BlockedDateSet = BlockedDateSet {
    keys: BTreeSet::new(),
};

/// Set of blocked day keys for one year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedDateSet {
    keys: BTreeSet<DayKey>,
}

impl BlockedDateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared empty set, used for years with no configuration.
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Adds a key.
    pub fn with_key(mut self, key: DayKey) -> Self {
        self.keys.insert(key);
        self
    }

    /// Adds a key. Returns whether it was newly inserted.
    pub fn insert(&mut self, key: DayKey) -> bool {
        self.keys.insert(key)
    }

    /// Whether the day key is blocked.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Whether the day is blocked.
    #[inline]
    pub fn blocks(&self, day: &CalendarDay) -> bool {
        self.contains(day.key().as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayKey> {
        self.keys.iter()
    }
}

impl FromIterator<DayKey> for BlockedDateSet {
    fn from_iter<I: IntoIterator<Item = DayKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Blocked-day sets indexed by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedCalendar {
    years: BTreeMap<i32, BlockedDateSet>,
}

impl BlockedCalendar {
    /// Creates a calendar with no blocked days in any year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the blocked set for a year.
    pub fn with_year(mut self, year: i32, set: BlockedDateSet) -> Self {
        self.years.insert(year, set);
        self
    }

    /// Blocks a single day, filing it under the year encoded in its key.
    pub fn block(&mut self, key: DayKey) {
        // Keys are validated on construction, so the year is always present.
        if let Some(year) = key.year() {
            self.years.entry(year).or_default().insert(key);
        }
    }

    /// Blocked set for a year (empty if none configured).
    pub fn for_year(&self, year: i32) -> &BlockedDateSet {
        self.years.get(&year).unwrap_or(BlockedDateSet::empty())
    }

    /// Configured years with their sets.
    pub fn years(&self) -> impl Iterator<Item = (i32, &BlockedDateSet)> {
        self.years.iter().map(|(y, s)| (*y, s))
    }
}
