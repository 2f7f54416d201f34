//! Spaced-repetition scheduling.
//!
//! Two pure functions make up the engine:
//!
//! - [`advance`]: next mastery level and due time after one review
//! - [`build_queue`]: ordered list of words to review at a given instant
//!
//! Neither reads a clock or touches storage; the caller passes `now` and
//! persists whatever store it gets back.

mod progression;
mod queue;
mod types;

pub use progression::{advance, advance_raw, Transition};
pub use queue::{build_queue, categorize, partition, QueueCategory, QueuePartition};
pub use types::{
    EpochMillis, MasteryLevel, NextReview, Outcome, GRADUATED_WIRE_VALUE, HOUR_MS,
    LONG_INTERVAL_MS, MINUTE_MS, SHORT_INTERVAL_MS,
};
