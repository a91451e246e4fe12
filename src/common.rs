//! Common types for the guessing game: difficulty keys, guess outcomes and errors.

use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named preset controlling attempts, hints and score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase key used on the command line and in the score file.
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(token))
            .ok_or_else(|| GameError::InvalidDifficulty(token.to_string()))
    }
}

/// Result of comparing a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess equals the target.
    Correct,
    /// Guess is above the target; the player should go lower.
    TooHigh,
    /// Guess is below the target; the player should go higher.
    TooLow,
}

/// Errors surfaced by the game. Validation kinds are recovered by re-prompting.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown difficulty '{0}' - choose easy, medium or hard")]
    InvalidDifficulty(String),

    #[error("'{0}' is not a number - enter a whole number or 'hint'")]
    InvalidGuessFormat(String),

    #[error("{guess} is outside the range {low}-{high}")]
    OutOfRangeGuess { guess: String, low: i64, high: i64 },

    #[error("please answer 'yes' or 'no' (got '{0}')")]
    InvalidAnswer(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("score file {} is corrupted: {reason}", .path.display())]
    PersistenceCorrupt { path: PathBuf, reason: String },

    #[error("could not write score file {}: {source}", .path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session interrupted")]
    InterruptedSession,

    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl GameError {
    /// Whether the controller should re-prompt instead of propagating.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidDifficulty(_)
                | GameError::InvalidGuessFormat(_)
                | GameError::OutOfRangeGuess { .. }
                | GameError::InvalidAnswer(_)
                | GameError::EmptyName
        )
    }
}
