//! Value types shared by the progression engine and the queue builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

pub const MINUTE_MS: EpochMillis = 60 * 1000;
pub const HOUR_MS: EpochMillis = 60 * MINUTE_MS;

/// Delay after a first success or after any failure.
pub const SHORT_INTERVAL_MS: EpochMillis = 6 * MINUTE_MS;
/// Delay for the middle rungs of the ladder.
pub const LONG_INTERVAL_MS: EpochMillis = HOUR_MS;

/// Wire value the browser app used for "never due again"
/// (`Number.MAX_SAFE_INTEGER`).
pub const GRADUATED_WIRE_VALUE: EpochMillis = 9_007_199_254_740_991;

/// Retention strength of a word, 0 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum MasteryLevel {
    /// Never answered correctly.
    New = 0,
    Learning1 = 1,
    Learning2 = 2,
    Learning3 = 3,
    /// Terminal; never scheduled again.
    Graduated = 4,
}

impl MasteryLevel {
    pub const ALL: [MasteryLevel; 5] = [
        MasteryLevel::New,
        MasteryLevel::Learning1,
        MasteryLevel::Learning2,
        MasteryLevel::Learning3,
        MasteryLevel::Graduated,
    ];

    /// Lenient conversion: any value outside 0..=3 lands on `Graduated`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => MasteryLevel::New,
            1 => MasteryLevel::Learning1,
            2 => MasteryLevel::Learning2,
            3 => MasteryLevel::Learning3,
            _ => MasteryLevel::Graduated,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_graduated(self) -> bool {
        self == MasteryLevel::Graduated
    }
}

impl TryFrom<i64> for MasteryLevel {
    type Error = ValidationError;

    /// Strict conversion used when decoding snapshots. Negative levels are
    /// rejected; levels above 4 are normalized to `Graduated`.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw < 0 {
            return Err(ValidationError::InvalidState {
                field: "level".into(),
                message: format!("negative mastery level {raw}"),
            });
        }
        Ok(MasteryLevel::from_raw(raw))
    }
}

impl From<MasteryLevel> for u8 {
    fn from(level: MasteryLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// When a word should next be shown.
///
/// `Graduated` sorts after every `DueAt`, so a graduated word can never be
/// due no matter what clock value it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum NextReview {
    DueAt(EpochMillis),
    Graduated,
}

impl NextReview {
    /// True once `now` has reached the scheduled time.
    pub fn is_due(self, now: EpochMillis) -> bool {
        match self {
            NextReview::DueAt(at) => at <= now,
            NextReview::Graduated => false,
        }
    }

    pub fn due_at(self) -> Option<EpochMillis> {
        match self {
            NextReview::DueAt(at) => Some(at),
            NextReview::Graduated => None,
        }
    }
}

impl From<i64> for NextReview {
    fn from(raw: i64) -> Self {
        if raw >= GRADUATED_WIRE_VALUE {
            NextReview::Graduated
        } else {
            NextReview::DueAt(raw)
        }
    }
}

impl From<NextReview> for i64 {
    fn from(next: NextReview) -> Self {
        match next {
            NextReview::DueAt(at) => at,
            NextReview::Graduated => GRADUATED_WIRE_VALUE,
        }
    }
}

/// Learner's answer for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Known,
    Unknown,
}

impl From<bool> for Outcome {
    fn from(known: bool) -> Self {
        if known {
            Outcome::Known
        } else {
            Outcome::Unknown
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "known" | "y" | "yes" | "correct" => Ok(Outcome::Known),
            "unknown" | "n" | "no" | "incorrect" => Ok(Outcome::Unknown),
            other => Err(ValidationError::InvalidState {
                field: "outcome".into(),
                message: format!("expected known or unknown, got '{other}'"),
            }),
        }
    }
}
