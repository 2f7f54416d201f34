//! Progress statistics for a catalog at a given instant.

use serde::{Deserialize, Serialize};

use crate::library::Word;
use crate::progress::ProgressStore;
use crate::srs::{partition, EpochMillis, MasteryLevel};

/// Snapshot of where the learner stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Catalog entries, duplicates counted.
    pub total: usize,
    pub new: usize,
    pub due: usize,
    /// Started but not yet due.
    pub scheduled: usize,
    pub graduated: usize,
    /// Catalog entries per mastery level; unreviewed words count as level 0.
    pub by_level: [usize; 5],
    /// Earliest upcoming review among scheduled words.
    pub next_due: Option<EpochMillis>,
}

impl ProgressSummary {
    pub fn compute(catalog: &[Word], store: &ProgressStore, now: EpochMillis) -> Self {
        let parts = partition(catalog, store, now);

        let mut by_level = [0usize; 5];
        for word in catalog {
            let level = store
                .get(&word.id)
                .map(|p| p.level)
                .unwrap_or(MasteryLevel::New);
            by_level[level.as_u8() as usize] += 1;
        }

        let next_due = parts
            .scheduled
            .iter()
            .filter_map(|(_, next)| next.due_at())
            .min();

        Self {
            total: catalog.len(),
            new: parts.new.len(),
            due: parts.due.len(),
            scheduled: parts.scheduled.len(),
            graduated: parts.graduated.len(),
            by_level,
            next_due,
        }
    }

    /// Words a session started now would present.
    pub fn queued(&self) -> usize {
        self.due + self.new
    }

    /// Share of catalog entries that have graduated, 0.0..=100.0.
    pub fn graduated_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.graduated as f64 / self.total as f64 * 100.0
    }
}
