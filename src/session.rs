//! Session controller: owns the player, the settings and the score table and
//! walks `AwaitingName -> RoundLoop -> Finished`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    cli::{Console, GuessInput},
    common::GameError,
    config::{SessionConfig, Settings},
    player::Player,
    round::Round,
    score::ScoreTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingName,
    RoundLoop,
    Finished,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player answered "no" to playing again.
    Completed,
    /// Input ended before the player chose to stop.
    Interrupted,
}

/// Build the session RNG from an optional fixed seed.
pub fn session_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

pub struct Session<R, W> {
    console: Console<R, W>,
    settings: Settings,
    scores: ScoreTable,
    score_file: PathBuf,
    load_warning: Option<GameError>,
    preset_name: Option<String>,
    player: Option<Player>,
    rng: SmallRng,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session, loading the score table named in `config`.
    pub fn new(config: SessionConfig, console: Console<R, W>) -> Self {
        let (scores, load_warning) = ScoreTable::load_or_reset(&config.score_file);
        Self {
            console,
            settings: Settings::new(),
            scores,
            score_file: config.score_file,
            load_warning,
            preset_name: config.player_name,
            player: None,
            rng: session_rng(config.seed),
            state: SessionState::AwaitingName,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Play until the player stops or input ends, then persist the table.
    pub fn run(&mut self) -> Result<SessionOutcome, GameError> {
        let outcome = match self.drive() {
            Ok(()) => SessionOutcome::Completed,
            Err(GameError::InterruptedSession) => {
                info!("input ended, finishing session");
                SessionOutcome::Interrupted
            }
            Err(e) => {
                // Still persist the table; the original error is what the caller sees.
                if let Err(finish_err) = self.finish() {
                    warn!("could not finish session: {}", finish_err);
                }
                return Err(e);
            }
        };
        self.finish()?;
        Ok(outcome)
    }

    fn drive(&mut self) -> Result<(), GameError> {
        self.console.welcome(&self.settings)?;
        if let Some(e) = self.load_warning.take() {
            self.console.warning(&e)?;
        }

        let name = match self.preset_name.take() {
            Some(name) => name,
            None => self.console.read_name()?,
        };
        let mut player = Player::new(name);
        self.state = SessionState::RoundLoop;
        let result = self.round_loop(&mut player);
        self.player = Some(player);
        result
    }

    fn round_loop(&mut self, player: &mut Player) -> Result<(), GameError> {
        loop {
            self.play_round(player)?;
            if !self.console.read_play_again()? {
                return Ok(());
            }
        }
    }

    fn play_round(&mut self, player: &mut Player) -> Result<(), GameError> {
        let difficulty = self.console.read_difficulty(&self.settings)?;
        let mut round = Round::new(difficulty, &self.settings, &mut self.rng);
        self.console.round_started(&round, &self.settings)?;

        while !round.is_over() {
            match self.console.read_guess(&round, &self.settings)? {
                GuessInput::Hint => {
                    let response = round.provide_hint(&mut self.rng);
                    self.console.hint(&response)?;
                }
                GuessInput::Number(guess) => {
                    let outcome = round.process_guess(guess);
                    self.console.feedback(guess, outcome)?;
                }
            }
        }

        player.update_stats(&round);
        let table_score = if round.won() {
            let score = round.calculate_score(self.settings.score_multiplier(difficulty));
            self.scores.update(difficulty, score, player.name());
            score
        } else {
            0
        };
        debug!(
            "round over: won={} target={} score={}",
            round.won(),
            round.target(),
            table_score
        );

        self.console.round_summary(&round, table_score)?;
        self.console.high_scores(&self.scores)?;
        self.console.player_stats(player)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), GameError> {
        self.state = SessionState::Finished;
        if let Err(e) = self.scores.save(&self.score_file) {
            warn!("{}", e);
            self.console.warning(&e)?;
        }
        if let Some(player) = &self.player {
            self.console.player_stats(player)?;
        }
        let name = self.player.as_ref().map(|p| p.name().to_string());
        self.console.farewell(name.as_deref())
    }
}
