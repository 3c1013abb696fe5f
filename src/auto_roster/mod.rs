//! Balanced auto-rostering.
//!
//! Fills every open day of a month with exactly one person, keeping the
//! per-person monthly totals as even as remote-work patterns allow.
//!
//! # Usage
//!
//! ```
//! use u_roster::auto_roster::AutoRoster;
//! use u_roster::calendar::generate_calendar;
//! use u_roster::models::{BlockedDateSet, Person};
//!
//! let roster = generate_calendar(2025);
//! let persons = vec![Person::new("Alice"), Person::new("Bob")];
//! let march = roster.month(2).unwrap();
//!
//! let filled = AutoRoster::new().run(march, &persons, BlockedDateSet::empty());
//! assert_eq!(filled.len(), march.len());
//! assert!(filled.iter().all(|d| d.therapists().len() <= 1));
//! ```
//!
//! # Algorithm
//!
//! A greedy pass in date order with a two-tier pick:
//! 1. "Lagging" candidates, whose running count is below either the live
//!    average of non-zero counts or the whole-month target average (each
//!    minus a margin, floored at 1), are served first.
//! 2. Otherwise the least-loaded available candidate is chosen.
//!
//! The candidate list is shuffled once per run and the chosen person is
//! moved to its back after each pick, so exact ties rotate. The result is a
//! best-effort balance, not a variance-optimal one.

mod engine;

pub use engine::AutoRoster;

use serde::{Deserialize, Serialize};

/// Margins for the "lagging" test.
///
/// A candidate lags when its running count is strictly below
/// `max(1, live_average - live_margin)` or
/// `max(1, target_average - target_margin)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaggingThresholds {
    /// Margin below the live average of positive running counts.
    pub live_margin: f64,
    /// Margin below the month's target average.
    pub target_margin: f64,
}

impl Default for LaggingThresholds {
    fn default() -> Self {
        Self {
            live_margin: 1.0,
            target_margin: 2.0,
        }
    }
}

impl LaggingThresholds {
    /// Whether a running count counts as lagging.
    pub fn is_lagging(&self, count: usize, live_average: f64, target_average: f64) -> bool {
        let count = count as f64;
        count < (live_average - self.live_margin).max(1.0)
            || count < (target_average - self.target_margin).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margins() {
        let t = LaggingThresholds::default();
        assert!((t.live_margin - 1.0).abs() < 1e-10);
        assert!((t.target_margin - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_cold_start_floor() {
        // Nothing assigned yet: floor of 1 makes every zero count lag
        let t = LaggingThresholds::default();
        assert!(t.is_lagging(0, 0.0, 1.0));
        assert!(!t.is_lagging(1, 0.0, 1.0));
    }

    #[test]
    fn test_target_threshold() {
        let t = LaggingThresholds::default();
        // target 10 → threshold 8
        assert!(t.is_lagging(7, 2.0, 10.0));
        assert!(!t.is_lagging(8, 2.0, 10.0));
    }

    #[test]
    fn test_live_threshold() {
        let t = LaggingThresholds::default();
        // live 5 → threshold 4
        assert!(t.is_lagging(3, 5.0, 1.0));
        assert!(!t.is_lagging(4, 5.0, 1.0));
    }

    #[test]
    fn test_partial_json() {
        let t: LaggingThresholds = serde_json::from_str(r#"{"target_margin":3.0}"#).unwrap();
        assert!((t.live_margin - 1.0).abs() < 1e-10);
        assert!((t.target_margin - 3.0).abs() < 1e-10);
    }
}
