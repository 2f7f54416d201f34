//! # Vocab Booster Core Library
//!
//! This library provides the core logic for reviewing vocabulary extracted
//! from source articles with a small spaced-repetition ladder. All operations
//! are exposed through the `vocab-cli` binary, which is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Scheduling** (`srs`): two pure functions. [`advance`] moves a word along
//!   the mastery ladder; [`build_queue`] picks what to review at a given time.
//!   Neither reads a clock nor touches storage.
//! - **Session**: a queue + cursor state machine that feeds reviews through the
//!   progression engine and hands back a new progress store.
//! - **Import**: parser for generated article/word-list text files.
//! - **Storage**: SQLite key-value snapshot and TOML configuration.
//!
//! ## Key Components
//!
//! - [`ProgressStore`]: immutable-per-call map of word id to [`Progress`]
//! - [`ReviewSession`]: review session controller
//! - [`Library`]: persisted catalog plus progress
//! - [`SnapshotDb`]: snapshot persistence
//! - [`Config`]: application configuration

pub mod context;
pub mod error;
pub mod events;
pub mod import;
pub mod library;
pub mod progress;
pub mod session;
pub mod srs;
pub mod stats;
pub mod storage;

pub use context::{highlight, ArticleContext, Segment};
pub use error::{
    ConfigError, CoreError, ImportError, SessionError, StorageError, ValidationError,
};
pub use events::SessionEvent;
pub use import::{import_file, parse_import, ImportBatch};
pub use library::{Article, Library, Word};
pub use progress::{Progress, ProgressStore, ReviewEvent};
pub use session::{ReviewReceipt, ReviewSession, SessionState};
pub use srs::{
    advance, build_queue, EpochMillis, MasteryLevel, NextReview, Outcome, Transition,
};
pub use stats::ProgressSummary;
pub use storage::{Config, SnapshotDb};
