//! Progression engine.
//!
//! Maps a word's current mastery level and a review outcome to its new
//! level and next due time. The ladder is fixed:
//!
//! ```text
//! known:   0 -(6m)-> 1 -(1h)-> 2 -(1h)-> 3 -> 4 (graduated)
//! unknown: any level -> 1, due in 6m
//! ```
//!
//! A miss is a soft reset to the first retention tier rather than back to 0.

use serde::{Deserialize, Serialize};

use super::types::{
    EpochMillis, MasteryLevel, NextReview, Outcome, GRADUATED_WIRE_VALUE, LONG_INTERVAL_MS,
    SHORT_INTERVAL_MS,
};

/// Result of one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub level: MasteryLevel,
    pub next_review: NextReview,
}

/// Due time `delay` after `now`. Stays below the graduated wire value so a
/// scheduled word never decodes back as graduated.
fn due_in(now: EpochMillis, delay: EpochMillis) -> NextReview {
    NextReview::DueAt(now.saturating_add(delay).min(GRADUATED_WIRE_VALUE - 1))
}

/// Compute the next state of a word after a review at `now`.
pub fn advance(level: MasteryLevel, outcome: Outcome, now: EpochMillis) -> Transition {
    if outcome == Outcome::Unknown {
        return Transition {
            level: MasteryLevel::Learning1,
            next_review: due_in(now, SHORT_INTERVAL_MS),
        };
    }

    let (level, next_review) = match level {
        MasteryLevel::New => (MasteryLevel::Learning1, due_in(now, SHORT_INTERVAL_MS)),
        MasteryLevel::Learning1 => (MasteryLevel::Learning2, due_in(now, LONG_INTERVAL_MS)),
        MasteryLevel::Learning2 => (MasteryLevel::Learning3, due_in(now, LONG_INTERVAL_MS)),
        MasteryLevel::Learning3 | MasteryLevel::Graduated => {
            (MasteryLevel::Graduated, NextReview::Graduated)
        }
    };

    Transition { level, next_review }
}

/// Same as [`advance`] for an unvalidated integer level. Levels above the
/// ladder land on the graduated branch.
pub fn advance_raw(level: i64, outcome: Outcome, now: EpochMillis) -> Transition {
    advance(MasteryLevel::from_raw(level), outcome, now)
}
