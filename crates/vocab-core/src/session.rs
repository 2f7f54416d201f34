//! Review session controller.
//!
//! Holds one review queue and a cursor into it. Two states:
//!
//! ```text
//! Empty --ensure_queue (words available)--> Reviewing
//! Reviewing --review (last word)--> Empty
//! Reviewing --review (more words)--> Reviewing
//! ```
//!
//! The controller never owns the progress store. Each review takes the
//! current store and hands back a new one for the caller to persist.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::library::Word;
use crate::progress::{Progress, ProgressStore, ReviewEvent};
use crate::srs::{build_queue, EpochMillis, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Cursor points at a word.
    Reviewing,
    /// No queue; the next access rebuilds it.
    Empty,
}

/// What one review did.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReceipt {
    pub word: Word,
    pub previous: Progress,
    pub progress: Progress,
    pub event: SessionEvent,
    /// Set when this review finished the queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhausted: Option<SessionEvent>,
    /// Store after the review. The caller persists it.
    #[serde(skip)]
    pub store: ProgressStore,
}

/// Queue plus cursor for the session in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSession {
    queue: Vec<Word>,
    cursor: usize,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        if self.cursor < self.queue.len() {
            SessionState::Reviewing
        } else {
            SessionState::Empty
        }
    }

    pub fn current(&self) -> Option<&Word> {
        self.queue.get(self.cursor)
    }

    /// 1-based position of the current word and the queue length.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|_| (self.cursor + 1, self.queue.len()))
    }

    /// Words not yet reviewed, current one included.
    pub fn remaining(&self) -> &[Word] {
        self.queue.get(self.cursor..).unwrap_or(&[])
    }

    pub fn queue(&self) -> &[Word] {
        &self.queue
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Build a queue if none is active. Returns `None` when a session is
    /// already in progress.
    pub fn ensure_queue(
        &mut self,
        catalog: &[Word],
        store: &ProgressStore,
        now: EpochMillis,
    ) -> Option<SessionEvent> {
        if self.state() == SessionState::Reviewing {
            return None;
        }
        Some(self.refresh(catalog, store, now))
    }

    /// Rebuild the queue unconditionally. Words left in the old queue are
    /// picked up again only if they still qualify.
    pub fn refresh(
        &mut self,
        catalog: &[Word],
        store: &ProgressStore,
        now: EpochMillis,
    ) -> SessionEvent {
        self.queue = build_queue(catalog, store, now).into_iter().cloned().collect();
        self.cursor = 0;

        if self.queue.is_empty() {
            tracing::info!(now, "no words to review");
            return SessionEvent::NothingToReview { at: now };
        }

        let due = self.queue.iter().filter(|w| store.contains(&w.id)).count();
        let new = self.queue.len() - due;
        tracing::info!(due, new, "review queue rebuilt");
        SessionEvent::QueueBuilt { due, new, at: now }
    }

    /// Record the learner's answer for the current word.
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveWord`] when the session is empty.
    pub fn review(
        &mut self,
        store: &ProgressStore,
        outcome: Outcome,
        now: EpochMillis,
    ) -> Result<ReviewReceipt, SessionError> {
        let word = self.current().cloned().ok_or(SessionError::NoActiveWord)?;

        let previous = store.progress_or_default(&word.id);
        let next_store = store.apply(&ReviewEvent::new(word.id.clone(), outcome, now));
        let progress = next_store.progress_or_default(&word.id);

        tracing::debug!(
            word = %word.id,
            ?outcome,
            from = %previous.level,
            to = %progress.level,
            "word reviewed"
        );

        let event = SessionEvent::WordReviewed {
            word_id: word.id.clone(),
            outcome,
            level: progress.level,
            next_review: progress.next_review,
            at: now,
        };

        self.cursor += 1;
        let exhausted = if self.cursor >= self.queue.len() {
            let reviewed = self.queue.len();
            self.queue.clear();
            self.cursor = 0;
            Some(SessionEvent::QueueExhausted { reviewed, at: now })
        } else {
            None
        };

        Ok(ReviewReceipt {
            word,
            previous,
            progress,
            event,
            exhausted,
            store: next_store,
        })
    }

    /// Drop the queue without finishing it.
    pub fn clear(&mut self) -> SessionEvent {
        self.queue.clear();
        self.cursor = 0;
        SessionEvent::QueueCleared
    }
}
