//! Cross-session high score table and its JSON file.
//!
//! The file is a flat object keyed by difficulty, each value a
//! `[name, score]` pair:
//!
//! ```json
//! {"easy":["Adam",100],"hard":["Jola",2695]}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::common::{Difficulty, GameError};

/// Holder and value of a difficulty's best score. Serializes as `[name, score]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore(pub String, pub u64);

impl HighScore {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn score(&self) -> u64 {
        self.1
    }
}

/// Best (player, score) per difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: BTreeMap<Difficulty, HighScore>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<&HighScore> {
        self.entries.get(&difficulty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &HighScore)> {
        self.entries.iter().map(|(d, hs)| (*d, hs))
    }

    /// Store `score` for `difficulty` if it strictly beats the current holder.
    /// Returns whether the table changed.
    pub fn update(&mut self, difficulty: Difficulty, score: u64, name: &str) -> bool {
        let accepted = self
            .entries
            .get(&difficulty)
            .map_or(true, |current| current.score() < score);
        if accepted {
            info!("new {} high score: {} - {}", difficulty.key(), name, score);
            self.entries
                .insert(difficulty, HighScore(name.to_string(), score));
        }
        accepted
    }

    /// One line per recorded difficulty, `"Easy: Adam - 100"`.
    pub fn display_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(d, hs)| format!("{}: {} - {}", d, hs.name(), hs.score()))
            .collect()
    }

    /// Overwrite `path` with the whole table.
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string(self).map_err(|e| GameError::PersistenceWriteFailure {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        fs::write(path, json).map_err(|source| GameError::PersistenceWriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved {} high score(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a table from `path`. A missing file is an empty table; anything
    /// unreadable or malformed is `PersistenceCorrupt`.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no score file at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(GameError::PersistenceCorrupt {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };
        let table: ScoreTable =
            serde_json::from_str(&contents).map_err(|e| GameError::PersistenceCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        info!("loaded {} high score(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Like [`ScoreTable::load`], but a corrupt file yields an empty table
    /// together with the error to show the player.
    pub fn load_or_reset(path: &Path) -> (Self, Option<GameError>) {
        match Self::load(path) {
            Ok(table) => (table, None),
            Err(e) => {
                warn!("{}; resetting high scores", e);
                (Self::new(), Some(e))
            }
        }
    }
}
