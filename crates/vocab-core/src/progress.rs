//! Per-word review progress and the store that holds it.
//!
//! A `ProgressStore` is treated as an immutable value: recording a review
//! produces a new store and leaves the old one untouched, so a sequence of
//! [`ReviewEvent`]s can be replayed onto any starting snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::srs::{advance, EpochMillis, MasteryLevel, NextReview, Outcome, Transition};

/// Review state of one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub level: MasteryLevel,
    pub next_review: NextReview,
    pub last_review: EpochMillis,
}

impl Progress {
    /// Stand-in for a word that has never been reviewed.
    pub const fn unreviewed() -> Self {
        Self {
            level: MasteryLevel::New,
            next_review: NextReview::DueAt(0),
            last_review: 0,
        }
    }

    pub fn from_transition(transition: Transition, reviewed_at: EpochMillis) -> Self {
        Self {
            level: transition.level,
            next_review: transition.next_review,
            last_review: reviewed_at,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::unreviewed()
    }
}

/// One review action, as recorded by the session controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    pub word_id: String,
    pub outcome: Outcome,
    pub at: EpochMillis,
}

impl ReviewEvent {
    pub fn new(word_id: impl Into<String>, outcome: Outcome, at: EpochMillis) -> Self {
        Self {
            word_id: word_id.into(),
            outcome,
            at,
        }
    }
}

/// Mapping from word id to its progress record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressStore {
    records: HashMap<String, Progress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word_id: &str) -> Option<&Progress> {
        self.records.get(word_id)
    }

    /// Record for `word_id`, or the unreviewed default when none exists.
    pub fn progress_or_default(&self, word_id: &str) -> Progress {
        self.records.get(word_id).copied().unwrap_or_default()
    }

    pub fn contains(&self, word_id: &str) -> bool {
        self.records.contains_key(word_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of this store with `word_id` set to `progress`.
    pub fn with_progress(&self, word_id: impl Into<String>, progress: Progress) -> Self {
        let mut records = self.records.clone();
        records.insert(word_id.into(), progress);
        Self { records }
    }

    /// Apply one review and return the resulting store.
    pub fn apply(&self, event: &ReviewEvent) -> Self {
        let prior = self.progress_or_default(&event.word_id);
        let transition = advance(prior.level, event.outcome, event.at);
        self.with_progress(
            event.word_id.clone(),
            Progress::from_transition(transition, event.at),
        )
    }

    /// Fold a sequence of reviews onto this store.
    pub fn replay<'a, I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = &'a ReviewEvent>,
    {
        events
            .into_iter()
            .fold(self.clone(), |store, event| store.apply(event))
    }
}

impl FromIterator<(String, Progress)> for ProgressStore {
    fn from_iter<T: IntoIterator<Item = (String, Progress)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
