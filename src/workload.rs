//! Workload aggregation.
//!
//! Per-person assignment counts derived from a roster. Counts are a view:
//! every call recomputes from the current roster, so they cannot drift after
//! manual edits or auto-roster runs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Count | Days in scope listing the person |
//! | Average | Mean count across all persons |
//! | Spread | max(count) - min(count) |
//! | Total | Sum of counts (person-days) |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CalendarDay, Person, Roster};

/// Person name → number of assigned days.
pub type WorkloadCounts = BTreeMap<String, usize>;

/// Counts assignments per person over a slice of days.
///
/// Every person in `persons` appears in the result, with 0 if never
/// assigned. Names on the days that are not in `persons` are ignored.
pub fn count_days(days: &[CalendarDay], persons: &[Person]) -> WorkloadCounts {
    let mut counts: WorkloadCounts = persons.iter().map(|p| (p.name.clone(), 0)).collect();
    for day in days {
        for name in day.therapists() {
            if let Some(count) = counts.get_mut(name) {
                *count += 1;
            }
        }
    }
    counts
}

/// Counts assignments per person within one month (0-based).
///
/// An out-of-range month yields zero for everyone.
pub fn counts_for(roster: &Roster, persons: &[Person], month: usize) -> WorkloadCounts {
    count_days(roster.month(month).unwrap_or_default(), persons)
}

/// Counts assignments per person across the whole roster year.
pub fn yearly_counts(roster: &Roster, persons: &[Person]) -> WorkloadCounts {
    let mut totals = count_days(&[], persons);
    for month in roster.months() {
        for (name, count) in count_days(month, persons) {
            *totals.entry(name).or_insert(0) += count;
        }
    }
    totals
}

/// Arithmetic mean of the counts; `0.0` when there are none.
pub fn average(counts: &WorkloadCounts) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.values().sum::<usize>() as f64 / counts.len() as f64
}

/// Balance indicators for a set of counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// Number of persons summarized.
    pub persons: usize,
    /// Sum of all counts.
    pub total: usize,
    /// Lowest count (0 when empty).
    pub min: usize,
    /// Highest count (0 when empty).
    pub max: usize,
    /// Mean count.
    pub average: f64,
}

impl WorkloadSummary {
    /// Summarizes a count mapping.
    pub fn from_counts(counts: &WorkloadCounts) -> Self {
        Self {
            persons: counts.len(),
            total: counts.values().sum(),
            min: counts.values().copied().min().unwrap_or(0),
            max: counts.values().copied().max().unwrap_or(0),
            average: average(counts),
        }
    }

    /// Difference between the busiest and the least busy person.
    #[inline]
    pub fn spread(&self) -> usize {
        self.max - self.min
    }

    /// Whether no person is more than `tolerance` days apart from another.
    pub fn is_balanced(&self, tolerance: usize) -> bool {
        self.spread() <= tolerance
    }
}
