//! Roster domain models.
//!
//! Plain data types for people, days, blocked-day configuration and yearly
//! rosters. All types derive serde traits so an external collaborator can
//! persist or share a roster and restore it without loss.
//!
//! # Mapping
//!
//! | u-roster | Clinic | Helpdesk | Facilities |
//! |----------|--------|----------|------------|
//! | Person | Therapist | Agent | Duty officer |
//! | CalendarDay | Clinic day | Shift day | Site day |
//! | BlockedDateSet | Public holidays | Closures | Shutdowns |
//! | Roster | Annual rota | On-call calendar | Duty calendar |

mod blocked;
mod day;
mod person;
mod roster;

pub use blocked::{BlockedCalendar, BlockedDateSet};
pub use day::{CalendarDay, DayKey};
pub use person::{Person, RemotePattern};
pub use roster::{Roster, MONTHS_PER_YEAR};
