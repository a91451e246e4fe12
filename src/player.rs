use std::collections::BTreeMap;

use crate::{common::Difficulty, round::Round};

/// Per-session player record. Not persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    games_played: u32,
    wins: u32,
    best_scores: BTreeMap<Difficulty, u64>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            games_played: 0,
            wins: 0,
            best_scores: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Percentage of rounds won, 0 before any round is played.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 * 100.0 / self.games_played as f64
        }
    }

    /// Record a finished round. Personal bests use multiplier 1, unlike the
    /// shared score table.
    pub fn update_stats(&mut self, round: &Round) {
        self.games_played += 1;
        if !round.won() {
            return;
        }
        self.wins += 1;
        let score = round.calculate_score(1);
        let improves = self
            .best_scores
            .get(&round.difficulty())
            .map_or(true, |&best| score > best);
        if improves {
            self.best_scores.insert(round.difficulty(), score);
        }
    }

    /// Best personal score at `difficulty`, `None` if never won there.
    pub fn best_score_for(&self, difficulty: Difficulty) -> Option<u64> {
        self.best_scores.get(&difficulty).copied()
    }
}
