//! Multi-year roster session.
//!
//! A session is the document a roster UI works on: the person list, the
//! blocked-day calendar, the engine configuration and one roster per year.
//! Rosters are generated on first access and replaced wholesale on reset.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use tracing::{debug, info};

use crate::auto_roster::AutoRoster;
use crate::calendar::generate_calendar;
use crate::constraints::is_open_slot;
use crate::models::{
    BlockedCalendar, BlockedDateSet, CalendarDay, DayKey, Person, RemotePattern, Roster,
};
use crate::workload::{self, WorkloadCounts};

/// Position of a date inside a roster: year, month index, day index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPosition {
    pub year: i32,
    /// 0-based month.
    pub month: usize,
    /// 0-based day of month.
    pub day: usize,
}

impl From<NaiveDate> for DayPosition {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0() as usize,
            day: date.day0() as usize,
        }
    }
}

/// Rosters for any number of years plus their shared configuration.
#[derive(Debug, Clone)]
pub struct RosterSession {
    persons: Vec<Person>,
    blocked: BlockedCalendar,
    engine: AutoRoster,
    rosters: BTreeMap<i32, Roster>,
}

impl RosterSession {
    /// Creates a session with no rosters generated yet.
    pub fn new(persons: Vec<Person>, blocked: BlockedCalendar) -> Self {
        Self {
            persons,
            blocked,
            engine: AutoRoster::new(),
            rosters: BTreeMap::new(),
        }
    }

    /// Sets the auto-roster engine.
    pub fn with_engine(mut self, engine: AutoRoster) -> Self {
        self.engine = engine;
        self
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Replaces a person's remote-work pattern.
    ///
    /// Names are fixed once the session exists; returns `false` if no person
    /// has this name.
    pub fn set_remote(&mut self, name: &str, remote: RemotePattern) -> bool {
        match self.persons.iter_mut().find(|p| p.name == name) {
            Some(person) => {
                person.remote = remote;
                true
            }
            None => false,
        }
    }

    /// Replaces a person's role label. Returns `false` for unknown names.
    pub fn set_role(&mut self, name: &str, role: Option<String>) -> bool {
        match self.persons.iter_mut().find(|p| p.name == name) {
            Some(person) => {
                person.role = role;
                true
            }
            None => false,
        }
    }

    pub fn engine(&self) -> &AutoRoster {
        &self.engine
    }

    pub fn blocked(&self) -> &BlockedCalendar {
        &self.blocked
    }

    /// Blocked set for a year (empty if not configured).
    pub fn blocked_for(&self, year: i32) -> &BlockedDateSet {
        self.blocked.for_year(year)
    }

    /// Roster for a year, generating it on first access.
    pub fn roster(&mut self, year: i32) -> &Roster {
        self.rosters
            .entry(year)
            .or_insert_with(|| generate_calendar(year))
    }

    /// Roster for a year if it has been generated or restored.
    pub fn existing_roster(&self, year: i32) -> Option<&Roster> {
        self.rosters.get(&year)
    }

    /// Installs a roster (e.g., restored from a shared link), replacing any
    /// roster for the same year.
    pub fn insert_roster(&mut self, roster: Roster) -> Option<Roster> {
        self.rosters.insert(roster.year(), roster)
    }

    /// Replaces a year's roster with a fresh, unassigned one.
    pub fn reset_year(&mut self, year: i32) {
        self.rosters.insert(year, generate_calendar(year));
        info!(year, "roster reset");
    }

    /// Places `person` on the day `key`. Invalid requests are ignored.
    ///
    /// An open day in a year not yet generated creates that year's roster;
    /// a rejected request leaves the session unchanged.
    pub fn assign(&mut self, key: &str, person: &str) {
        let Ok(date) = DayKey::parse_date(key) else {
            debug!(key, "assignment ignored: malformed day key");
            return;
        };
        let year = date.year();
        let blocked = self.blocked.for_year(year);
        if !is_open_slot(&CalendarDay::new(date), blocked) {
            debug!(key, "assignment ignored: day is closed");
            return;
        }
        self.rosters
            .entry(year)
            .or_insert_with(|| generate_calendar(year))
            .assign_by_key(key, person, blocked);
    }

    /// Removes `person` from the day `key`. Invalid requests are ignored.
    pub fn unassign(&mut self, key: &str, person: &str) {
        if let Some(roster) = key_year(key).and_then(|y| self.rosters.get_mut(&y)) {
            roster.unassign_by_key(key, person);
        }
    }

    /// Moves `person` between two days of the same year.
    pub fn move_person(&mut self, from: &str, to: &str, person: &str) {
        let (Some(year), Some(to_year)) = (key_year(from), key_year(to)) else {
            return;
        };
        if year != to_year {
            debug!(from, to, "move ignored: days in different years");
            return;
        }
        let blocked = self.blocked.for_year(year);
        if let Some(roster) = self.rosters.get_mut(&year) {
            roster.move_person(from, to, person, blocked);
        }
    }

    /// Auto-rosters one month and stores the result.
    ///
    /// Returns `false` if the month index is out of range.
    pub fn auto_roster(&mut self, year: i32, month: usize) -> bool {
        self.auto_roster_with_rng(year, month, &mut rand::rng())
    }

    /// [`auto_roster`](Self::auto_roster) with a caller-supplied random source.
    pub fn auto_roster_with_rng<R: Rng + ?Sized>(
        &mut self,
        year: i32,
        month: usize,
        rng: &mut R,
    ) -> bool {
        let blocked = self.blocked.for_year(year);
        let roster = self
            .rosters
            .entry(year)
            .or_insert_with(|| generate_calendar(year));
        let Some(days) = roster.month(month) else {
            return false;
        };

        let updated = self.engine.run_with_rng(days, &self.persons, blocked, rng);
        roster.replace_month(month, updated).is_some()
    }

    /// Per-person counts for one month. Years never touched count as empty.
    pub fn counts_for(&self, year: i32, month: usize) -> WorkloadCounts {
        match self.rosters.get(&year) {
            Some(roster) => workload::counts_for(roster, &self.persons, month),
            None => workload::count_days(&[], &self.persons),
        }
    }

    /// Per-person counts for a whole year.
    pub fn yearly_counts(&self, year: i32) -> WorkloadCounts {
        match self.rosters.get(&year) {
            Some(roster) => workload::yearly_counts(roster, &self.persons),
            None => workload::count_days(&[], &self.persons),
        }
    }

    /// Where a date sits in its roster.
    pub fn locate(date: NaiveDate) -> DayPosition {
        DayPosition::from(date)
    }

    /// Where today sits, in local time.
    pub fn locate_today() -> DayPosition {
        Self::locate(Local::now().date_naive())
    }
}

fn key_year(key: &str) -> Option<i32> {
    DayKey::parse_date(key).ok().map(|d| d.year())
}
