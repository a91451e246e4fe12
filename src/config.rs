use std::path::PathBuf;

use crate::common::Difficulty;

/// Inclusive range the target is drawn from, shared by every difficulty.
pub const NUMBER_RANGE: (i64, i64) = (1, 100);

/// Score file used when none is given on the command line.
pub const DEFAULT_SCORE_FILE: &str = "score_history.json";

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "GUESS_LOG";

/// Attempts, hints and multiplier for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    difficulty: Difficulty,
    attempts: u32,
    hints: u32,
    multiplier: u64,
}

impl DifficultyPreset {
    pub const fn new(difficulty: Difficulty, attempts: u32, hints: u32, multiplier: u64) -> Self {
        Self {
            difficulty,
            attempts,
            hints,
            multiplier,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hints(&self) -> u32 {
        self.hints
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }
}

pub const NUM_DIFFICULTIES: usize = 3;
pub const PRESETS: [DifficultyPreset; NUM_DIFFICULTIES] = [
    DifficultyPreset::new(Difficulty::Easy, 10, 3, 1),
    DifficultyPreset::new(Difficulty::Medium, 7, 2, 2),
    DifficultyPreset::new(Difficulty::Hard, 5, 1, 3),
];

/// Static game configuration: one preset per difficulty plus the number range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    presets: [DifficultyPreset; NUM_DIFFICULTIES],
    range: (i64, i64),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            presets: PRESETS,
            range: NUMBER_RANGE,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    fn preset(&self, difficulty: Difficulty) -> &DifficultyPreset {
        // PRESETS is ordered like Difficulty::ALL, so the index always matches.
        &self.presets[difficulty as usize]
    }

    pub fn attempts(&self, difficulty: Difficulty) -> u32 {
        self.preset(difficulty).attempts()
    }

    pub fn hints_allowed(&self, difficulty: Difficulty) -> u32 {
        self.preset(difficulty).hints()
    }

    pub fn score_multiplier(&self, difficulty: Difficulty) -> u64 {
        self.preset(difficulty).multiplier()
    }

    /// Inclusive `(low, high)` bounds for targets and accepted guesses.
    pub fn range(&self) -> (i64, i64) {
        self.range
    }

    /// Whether `guess` lies inside the configured range.
    pub fn in_range(&self, guess: i64) -> bool {
        let (low, high) = self.range;
        (low..=high).contains(&guess)
    }
}

/// Runtime options for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub score_file: PathBuf,
    pub seed: Option<u64>,
    pub player_name: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,
            player_name: None,
        }
    }
}
