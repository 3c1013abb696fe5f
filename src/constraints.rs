//! Eligibility constraints.
//!
//! Decides whether a person may be placed on a day.
//!
//! # Precedence
//! Checks are applied in a fixed order and the first failure wins:
//! 1. Blocked day (holiday / closure)
//! 2. Weekend (Saturday, Sunday), derived from the date
//! 3. Remote-work day for the person
//!
//! Every function here is pure: the auto-roster engine probes candidates
//! with it repeatedly and relies on identical answers for identical inputs.

use serde::{Deserialize, Serialize};

use crate::models::{BlockedDateSet, CalendarDay, Person};

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// The person may be assigned.
    Assignable,
    /// The day is in the blocked set.
    Blocked,
    /// The day is a Saturday or Sunday.
    Weekend,
    /// The person works remotely on this weekday.
    Remote,
}

impl Eligibility {
    #[inline]
    pub fn is_assignable(self) -> bool {
        self == Eligibility::Assignable
    }
}

/// Checks a (day, person) pair and reports the first failing constraint.
pub fn check(day: &CalendarDay, person: &Person, blocked: &BlockedDateSet) -> Eligibility {
    if let Some(reason) = slot_restriction(day, blocked) {
        return reason;
    }
    if person.is_remote_on(day.weekday()) {
        return Eligibility::Remote;
    }
    Eligibility::Assignable
}

/// Whether `person` may be assigned to `day`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_roster::constraints::is_assignable;
/// use u_roster::models::{BlockedDateSet, CalendarDay, DayKey, Person};
///
/// let christmas = CalendarDay::new(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
/// let blocked = BlockedDateSet::new().with_key(DayKey::parse("2025-12-25").unwrap());
/// assert!(!is_assignable(&christmas, &Person::new("Alice"), &blocked));
/// ```
#[inline]
pub fn is_assignable(day: &CalendarDay, person: &Person, blocked: &BlockedDateSet) -> bool {
    check(day, person, blocked).is_assignable()
}

/// Whether the day can take anyone at all (not blocked, not weekend).
#[inline]
pub fn is_open_slot(day: &CalendarDay, blocked: &BlockedDateSet) -> bool {
    slot_restriction(day, blocked).is_none()
}

fn slot_restriction(day: &CalendarDay, blocked: &BlockedDateSet) -> Option<Eligibility> {
    if blocked.blocks(day) {
        Some(Eligibility::Blocked)
    } else if day.is_weekend() {
        Some(Eligibility::Weekend)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayKey, RemotePattern};
    use chrono::{NaiveDate, Weekday};
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn christmas_blocked() -> BlockedDateSet {
        BlockedDateSet::new().with_key(DayKey::parse("2025-12-25").unwrap())
    }

    #[test]
    fn test_blocked_thursday() {
        let xmas = day(2025, 12, 25);
        assert_eq!(xmas.weekday(), Weekday::Thu);
        let alice = Person::new("Alice");
        assert!(!is_assignable(&xmas, &alice, &christmas_blocked()));
        assert_eq!(check(&xmas, &alice, &christmas_blocked()), Eligibility::Blocked);
    }

    #[test]
    fn test_weekend() {
        let saturday = day(2025, 12, 27);
        let alice = Person::new("Alice");
        assert_eq!(
            check(&saturday, &alice, BlockedDateSet::empty()),
            Eligibility::Weekend
        );
        assert!(!is_open_slot(&saturday, BlockedDateSet::empty()));
    }

    #[test]
    fn test_remote_day() {
        let monday = day(2025, 12, 22);
        let remote_mondays = Person::new("Bob").with_remote_day(Weekday::Mon);
        let onsite = Person::new("Cara");

        assert_eq!(
            check(&monday, &remote_mondays, BlockedDateSet::empty()),
            Eligibility::Remote
        );
        assert!(is_assignable(&monday, &onsite, BlockedDateSet::empty()));
        // Remote days don't close the slot for everyone
        assert!(is_open_slot(&monday, BlockedDateSet::empty()));
    }

    #[test]
    fn test_blocked_wins_over_remote() {
        let xmas = day(2025, 12, 25);
        let remote = Person::new("Bob").with_remote(RemotePattern::all_remote());
        assert_eq!(check(&xmas, &remote, &christmas_blocked()), Eligibility::Blocked);
    }

    proptest! {
        #[test]
        fn prop_blocked_or_weekend_never_assignable(
            offset in 0i64..3650,
            mon in any::<bool>(),
            tue in any::<bool>(),
            wed in any::<bool>(),
            thu in any::<bool>(),
            fri in any::<bool>(),
            block_it in any::<bool>(),
        ) {
            let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            let d = CalendarDay::new(base + chrono::Duration::days(offset));
            let person = Person::new("P").with_remote(RemotePattern {
                monday: mon,
                tuesday: tue,
                wednesday: wed,
                thursday: thu,
                friday: fri,
            });
            let blocked = if block_it {
                BlockedDateSet::new().with_key(d.key().clone())
            } else {
                BlockedDateSet::new()
            };

            if block_it || d.is_weekend() {
                prop_assert!(!is_assignable(&d, &person, &blocked));
            }
        }
    }
}
