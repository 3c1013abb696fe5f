//! Duty roster core for the U-Engine ecosystem.
//!
//! Assigns people to calendar days across multi-year rosters, balancing
//! workload while respecting hard constraints (blocked days, weekends) and
//! soft ones (remote-work days). Rendering, drag-and-drop, export and link
//! sharing are left to callers; this crate holds the decision logic and the
//! data model they operate on.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `RemotePattern`, `CalendarDay`,
//!   `DayKey`, `BlockedDateSet`, `BlockedCalendar`, `Roster`
//! - **`calendar`**: Year → roster skeleton generation
//! - **`constraints`**: Pure eligibility predicate
//! - **`assignment`**: Manual assign / unassign / move
//! - **`workload`**: Per-person counts, averages and balance summary
//! - **`auto_roster`**: Balanced month auto-rostering engine
//! - **`validation`**: Input integrity checks (duplicate names, key years)
//! - **`config`**: JSON configuration loading
//! - **`session`**: Multi-year document applying engine results
//!
//! # Data Flow
//!
//! ```text
//! calendar ─▶ constraints ─▶ auto_roster ─▶ Roster (month replaced)
//!                 ▲               │
//!                 │               ▼
//!            assignment      workload
//! ```
//!
//! # Example
//!
//! ```
//! use u_roster::models::{BlockedCalendar, Person};
//! use u_roster::session::RosterSession;
//!
//! let mut session = RosterSession::new(
//!     vec![Person::new("Alice"), Person::new("Bob")],
//!     BlockedCalendar::new(),
//! );
//! session.auto_roster(2025, 0);
//! let counts = session.counts_for(2025, 0);
//! assert_eq!(counts["Alice"] + counts["Bob"], 23);
//! ```

pub mod assignment;
pub mod auto_roster;
pub mod calendar;
pub mod config;
pub mod constraints;
pub mod error;
pub mod models;
pub mod session;
pub mod validation;
pub mod workload;

pub use error::{Result, RosterError};
