use serde::{Deserialize, Serialize};

use crate::srs::{EpochMillis, MasteryLevel, NextReview, Outcome};

/// Every state change of a review session produces an Event.
/// The CLI prints them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A fresh queue was built from the catalog and store.
    QueueBuilt {
        due: usize,
        new: usize,
        at: EpochMillis,
    },
    /// Queue came back empty: nothing due, nothing new.
    NothingToReview { at: EpochMillis },
    WordReviewed {
        word_id: String,
        outcome: Outcome,
        level: MasteryLevel,
        next_review: NextReview,
        at: EpochMillis,
    },
    /// Cursor ran past the last word; the queue was discarded.
    QueueExhausted { reviewed: usize, at: EpochMillis },
    /// Queue dropped without being finished (import, reset).
    QueueCleared,
}
