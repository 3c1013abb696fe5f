//! Manual assignment store.
//!
//! Backs drag-and-drop style editing. Invalid drops (duplicate person,
//! blocked day, weekend) are silently ignored; callers that want feedback
//! compare the day before and after. Unlike the auto-roster engine, the
//! manual path lets several people share a day.
//!
//! Remote-work patterns are not consulted here: a manual placement is an
//! explicit override by whoever edits the roster.

use tracing::debug;

use crate::constraints::is_open_slot;
use crate::models::{BlockedDateSet, CalendarDay, Roster};

/// Adds `person` to `day` if it is not already there and the day is open.
pub fn assign(day: &mut CalendarDay, person: &str, blocked: &BlockedDateSet) {
    if !is_open_slot(day, blocked) {
        debug!(day = %day.key(), person, "assignment rejected: day closed");
        return;
    }
    if !day.push_unique(person.to_owned()) {
        debug!(day = %day.key(), person, "assignment ignored: already assigned");
    }
}

/// Removes `person` from `day` if present.
pub fn unassign(day: &mut CalendarDay, person: &str) {
    day.remove(person);
}

impl Roster {
    /// [`assign`] on the day identified by `key`. Unknown keys are ignored.
    pub fn assign_by_key(&mut self, key: &str, person: &str, blocked: &BlockedDateSet) {
        match self.day_mut(key) {
            Some(day) => assign(day, person, blocked),
            None => debug!(key, person, "assignment ignored: no such day"),
        }
    }

    /// [`unassign`] on the day identified by `key`. Unknown keys are ignored.
    pub fn unassign_by_key(&mut self, key: &str, person: &str) {
        if let Some(day) = self.day_mut(key) {
            unassign(day, person);
        }
    }

    /// Moves `person` from one day to another.
    ///
    /// The move only happens if the person is on `from` and the target day
    /// is open; otherwise nothing changes.
    pub fn move_person(&mut self, from: &str, to: &str, person: &str, blocked: &BlockedDateSet) {
        let source_has = self.day(from).is_some_and(|d| d.has(person));
        let target_ok = self
            .day(to)
            .is_some_and(|d| is_open_slot(d, blocked) && !d.has(person));
        if !(source_has && target_ok) {
            debug!(from, to, person, "move ignored");
            return;
        }
        self.unassign_by_key(from, person);
        self.assign_by_key(to, person, blocked);
    }
}
