//! Auto-roster engine.
//!
//! # Complexity
//! O(d * p log p) where d = days in the month, p = persons.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::LaggingThresholds;
use crate::constraints::is_open_slot;
use crate::models::{BlockedDateSet, CalendarDay, Person};

/// Fills open days of a month with one person each.
///
/// The engine holds only configuration. Running counts and the
/// consideration order live for a single invocation, so one engine can be
/// reused freely.
#[derive(Debug, Clone, Default)]
pub struct AutoRoster {
    thresholds: LaggingThresholds,
}

impl AutoRoster {
    /// Creates an engine with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lagging thresholds.
    pub fn with_thresholds(mut self, thresholds: LaggingThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &LaggingThresholds {
        &self.thresholds
    }

    /// Rosters a month using thread-local randomness for tie rotation.
    ///
    /// Returns a new month; `month` itself is never modified. Days that are
    /// blocked, on a weekend, or already have someone assigned come back
    /// unchanged. An open day where every person is remote stays empty.
    pub fn run(
        &self,
        month: &[CalendarDay],
        persons: &[Person],
        blocked: &BlockedDateSet,
    ) -> Vec<CalendarDay> {
        self.run_with_rng(month, persons, blocked, &mut rand::rng())
    }

    /// Same as [`run`](Self::run) with a caller-supplied random source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        month: &[CalendarDay],
        persons: &[Person],
        blocked: &BlockedDateSet,
        rng: &mut R,
    ) -> Vec<CalendarDay> {
        let mut days = month.to_vec();
        if persons.is_empty() {
            debug!("auto-roster skipped: no persons");
            return days;
        }

        let total_open_slots = month.iter().filter(|d| is_open_slot(d, blocked)).count();
        let target_average = (total_open_slots as f64 / persons.len() as f64).max(1.0);

        let mut running: HashMap<&str, usize> =
            persons.iter().map(|p| (p.name.as_str(), 0)).collect();
        let mut order: Vec<&Person> = persons.iter().collect();
        order.shuffle(rng);

        let mut filled = 0usize;
        let mut uncovered = 0usize;

        for day in days.iter_mut() {
            if !day.is_unassigned() || !is_open_slot(day, blocked) {
                continue;
            }

            let weekday = day.weekday();
            let mut available: Vec<&Person> = order
                .iter()
                .copied()
                .filter(|p| !p.is_remote_on(weekday))
                .collect();
            if available.is_empty() {
                debug!(day = %day.key(), "no available person, day left open");
                uncovered += 1;
                continue;
            }

            // Stable: equal counts keep consideration order
            available.sort_by_key(|p| count_of(&running, p));
            let live_average = live_average(&running);

            let Some(chosen) = self.pick(&available, &running, live_average, target_average)
            else {
                continue;
            };

            if let Some(count) = running.get_mut(chosen.name.as_str()) {
                *count += 1;
            }
            if let Some(pos) = order.iter().position(|p| p.name == chosen.name) {
                let demoted = order.remove(pos);
                order.push(demoted);
            }

            debug!(day = %day.key(), person = %chosen.name, "auto-rostered");
            day.push_unique(chosen.name.clone());
            filled += 1;
        }

        info!(
            open_slots = total_open_slots,
            filled, uncovered, "auto-roster pass complete"
        );
        days
    }

    /// Chooses among `available` (already sorted by running count).
    ///
    /// Lagging candidates first, lowest count then name; else the head of
    /// the sorted list.
    fn pick<'a>(
        &self,
        available: &[&'a Person],
        running: &HashMap<&str, usize>,
        live_average: f64,
        target_average: f64,
    ) -> Option<&'a Person> {
        let lagging = available
            .iter()
            .copied()
            .filter(|p| {
                self.thresholds
                    .is_lagging(count_of(running, p), live_average, target_average)
            })
            .min_by(|a, b| {
                count_of(running, a)
                    .cmp(&count_of(running, b))
                    .then_with(|| a.name.cmp(&b.name))
            });

        lagging.or_else(|| available.first().copied())
    }
}

fn count_of(running: &HashMap<&str, usize>, person: &Person) -> usize {
    running.get(person.name.as_str()).copied().unwrap_or(0)
}

/// Mean of the positive running counts, 0 if none.
fn live_average(running: &HashMap<&str, usize>) -> f64 {
    let (sum, n) = running
        .values()
        .filter(|&&c| c > 0)
        .fold((0usize, 0usize), |(s, n), &c| (s + c, n + 1));
    if n == 0 {
        0.0
    } else {
        sum as f64 / n as f64
    }
}
