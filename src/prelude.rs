//! Commonly used types and utilities for ease of import.

pub use crate::{
    Console, Difficulty, GameError, GuessOutcome, HintResponse, Player, Round, ScoreTable,
    Session, SessionConfig, Settings,
};
