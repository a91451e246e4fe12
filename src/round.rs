use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;

use crate::{
    common::{Difficulty, GuessOutcome},
    config::Settings,
    hint::generate_hint,
};

/// Points awarded per remaining attempt before the multiplier is applied.
pub const POINTS_PER_ATTEMPT: u64 = 100;

/// Result of asking the round for a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResponse {
    Hint(String),
    NoHintsLeft,
}

/// Zero-floored round score: `remaining * multiplier * 100 - elapsed_secs`.
pub fn score(remaining_attempts: u32, multiplier: u64, elapsed_secs: u64) -> u64 {
    (remaining_attempts as u64)
        .saturating_mul(multiplier)
        .saturating_mul(POINTS_PER_ATTEMPT)
        .saturating_sub(elapsed_secs)
}

/// One play-through from target generation to win or exhaustion.
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    target: i64,
    attempts: u32,
    remaining_attempts: u32,
    remaining_hints: u32,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    won: bool,
}

impl Round {
    /// Start a round, drawing the target uniformly from the configured range.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, settings: &Settings, rng: &mut R) -> Self {
        let target = Self::generate_target(settings.range(), rng);
        Self::with_target(difficulty, settings, target)
    }

    /// Start a round with a known target.
    pub fn with_target(difficulty: Difficulty, settings: &Settings, target: i64) -> Self {
        let attempts = settings.attempts(difficulty);
        debug!("new {} round, {} attempts", difficulty.key(), attempts);
        Self {
            difficulty,
            target,
            attempts,
            remaining_attempts: attempts,
            remaining_hints: settings.hints_allowed(difficulty),
            start_time: Utc::now(),
            end_time: None,
            won: false,
        }
    }

    /// Backdate or move the start of the round's clock.
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    fn generate_target<R: Rng + ?Sized>(range: (i64, i64), rng: &mut R) -> i64 {
        let (low, high) = range;
        rng.random_range(low..=high)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    pub fn remaining_hints(&self) -> u32 {
        self.remaining_hints
    }

    /// Number of guesses processed so far.
    pub fn attempts_used(&self) -> u32 {
        self.attempts - self.remaining_attempts
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Evaluate a guess. Every call costs one attempt, including the winning one.
    /// Range checking is the caller's job.
    pub fn process_guess(&mut self, guess: i64) -> GuessOutcome {
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        let outcome = match guess.cmp(&self.target) {
            core::cmp::Ordering::Equal => {
                if !self.won {
                    self.end_time = Some(Utc::now());
                    self.won = true;
                }
                GuessOutcome::Correct
            }
            core::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            core::cmp::Ordering::Less => GuessOutcome::TooLow,
        };
        debug!(
            "guess {} -> {:?}, {} attempts left",
            guess, outcome, self.remaining_attempts
        );
        outcome
    }

    /// Spend a hint credit if one is left. Never costs an attempt.
    pub fn provide_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HintResponse {
        if self.remaining_hints == 0 {
            return HintResponse::NoHintsLeft;
        }
        self.remaining_hints -= 1;
        let hint = generate_hint(self.target, rng);
        debug!("hint issued, {} left", self.remaining_hints);
        HintResponse::Hint(hint)
    }

    /// Whole seconds between start and end, or start and now while unfinished.
    pub fn duration(&self) -> u64 {
        let end = self.end_time.unwrap_or_else(Utc::now);
        (end - self.start_time).num_seconds().max(0) as u64
    }

    pub fn calculate_score(&self, multiplier: u64) -> u64 {
        score(self.remaining_attempts, multiplier, self.duration())
    }

    pub fn is_over(&self) -> bool {
        self.remaining_attempts == 0 || self.won
    }
}
