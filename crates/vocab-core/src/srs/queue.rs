//! Queue builder.
//!
//! Picks the words to present in one review session. Words that have been
//! started and are due come first, oldest due time first; never-reviewed
//! words follow in catalog order. Graduated words and words scheduled for
//! the future are left out.

use crate::library::Word;
use crate::progress::ProgressStore;

use super::types::{EpochMillis, NextReview};

/// Where a catalog word falls relative to `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCategory {
    Due(NextReview),
    New,
    Scheduled(NextReview),
    Graduated,
}

/// Classify one word against the store.
pub fn categorize(word: &Word, store: &ProgressStore, now: EpochMillis) -> QueueCategory {
    match store.get(&word.id) {
        None => QueueCategory::New,
        Some(p) if p.level.is_graduated() => QueueCategory::Graduated,
        Some(p) if p.next_review.is_due(now) => QueueCategory::Due(p.next_review),
        Some(p) => QueueCategory::Scheduled(p.next_review),
    }
}

/// Catalog split into its four categories, each in catalog order.
#[derive(Debug, Clone, Default)]
pub struct QueuePartition<'a> {
    pub due: Vec<(&'a Word, NextReview)>,
    pub new: Vec<&'a Word>,
    pub scheduled: Vec<(&'a Word, NextReview)>,
    pub graduated: Vec<&'a Word>,
}

pub fn partition<'a>(
    catalog: &'a [Word],
    store: &ProgressStore,
    now: EpochMillis,
) -> QueuePartition<'a> {
    let mut parts = QueuePartition::default();
    for word in catalog {
        match categorize(word, store, now) {
            QueueCategory::Due(next) => parts.due.push((word, next)),
            QueueCategory::New => parts.new.push(word),
            QueueCategory::Scheduled(next) => parts.scheduled.push((word, next)),
            QueueCategory::Graduated => parts.graduated.push(word),
        }
    }
    parts
}

/// Build the ordered review queue for `now`.
///
/// Due words are sorted by next review time with a stable sort, so words
/// sharing a due time keep their catalog order. Duplicate catalog entries
/// are not collapsed.
pub fn build_queue<'a>(
    catalog: &'a [Word],
    store: &ProgressStore,
    now: EpochMillis,
) -> Vec<&'a Word> {
    let QueuePartition { mut due, new, .. } = partition(catalog, store, now);

    due.sort_by_key(|(_, next)| *next);

    let queue: Vec<&Word> = due
        .into_iter()
        .map(|(word, _)| word)
        .chain(new)
        .collect();

    tracing::debug!(
        catalog = catalog.len(),
        queued = queue.len(),
        now,
        "built review queue"
    );
    queue
}
