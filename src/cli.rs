//! Text interface: every prompt and message the player sees.
//!
//! Parsing helpers are pure and return `Result`, the [`Console`] methods that
//! read input loop on recoverable errors and only surface end of input or
//! terminal failures.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::{
    common::{Difficulty, GameError, GuessOutcome},
    config::Settings,
    player::Player,
    round::{HintResponse, Round},
    score::ScoreTable,
};

/// A line of input during the guessing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Number(i64),
    Hint,
}

pub fn parse_name(input: &str) -> Result<String, GameError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_difficulty(input: &str) -> Result<Difficulty, GameError> {
    input.parse()
}

/// Accepts `hint` (any case) or an integer inside the settings range.
pub fn parse_guess(input: &str, settings: &Settings) -> Result<GuessInput, GameError> {
    let token = input.trim();
    if token.eq_ignore_ascii_case("hint") {
        return Ok(GuessInput::Hint);
    }
    let (low, high) = settings.range();
    let out_of_range = || GameError::OutOfRangeGuess {
        guess: token.to_string(),
        low,
        high,
    };
    let guess = match token.parse::<i64>() {
        Ok(guess) => guess,
        // Digits that overflow i64 are a number, just far outside the range.
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range())
        }
        Err(_) => return Err(GameError::InvalidGuessFormat(token.to_string())),
    };
    if !settings.in_range(guess) {
        return Err(out_of_range());
    }
    Ok(GuessInput::Number(guess))
}

pub fn parse_yes_no(input: &str) -> Result<bool, GameError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(GameError::InvalidAnswer(other.to_string())),
    }
}

/// Terminal front-end over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        // Undecodable bytes become U+FFFD and fail parsing like any other typo.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(GameError::InterruptedSession);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Prompt until `parse` succeeds, reporting each recoverable error.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => self.error(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn welcome(&mut self, settings: &Settings) -> Result<(), GameError> {
        let (low, high) = settings.range();
        writeln!(self.output, "Welcome to the Number Guessing Game!")?;
        writeln!(
            self.output,
            "Rules: Guess the number between {} and {}. You have limited attempts based on your chosen difficulty.",
            low, high
        )?;
        writeln!(self.output, "Type 'hint' to use a hint if available.")?;
        Ok(())
    }

    pub fn read_name(&mut self) -> Result<String, GameError> {
        self.prompt_until("Enter your name: ", parse_name)
    }

    pub fn read_difficulty(&mut self, settings: &Settings) -> Result<Difficulty, GameError> {
        writeln!(self.output)?;
        writeln!(self.output, "Difficulty levels:")?;
        for d in Difficulty::ALL {
            writeln!(
                self.output,
                "  {:<6} - {} attempts, {} hint(s), x{} score",
                d.key(),
                settings.attempts(d),
                settings.hints_allowed(d),
                settings.score_multiplier(d)
            )?;
        }
        self.prompt_until("Choose difficulty (easy/medium/hard): ", parse_difficulty)
    }

    pub fn read_guess(&mut self, round: &Round, settings: &Settings) -> Result<GuessInput, GameError> {
        let prompt = format!(
            "[{} attempts, {} hints left] Your guess (or 'hint'): ",
            round.remaining_attempts(),
            round.remaining_hints()
        );
        self.prompt_until(&prompt, |line| parse_guess(line, settings))
    }

    pub fn read_play_again(&mut self) -> Result<bool, GameError> {
        self.prompt_until("Play again? (yes/no): ", parse_yes_no)
    }

    pub fn round_started(&mut self, round: &Round, settings: &Settings) -> Result<(), GameError> {
        let (low, high) = settings.range();
        writeln!(
            self.output,
            "\n{} round: I'm thinking of a number between {} and {}. You have {} attempts.",
            round.difficulty(),
            low,
            high,
            round.remaining_attempts()
        )?;
        Ok(())
    }

    pub fn feedback(&mut self, guess: i64, outcome: GuessOutcome) -> Result<(), GameError> {
        match outcome {
            GuessOutcome::Correct => writeln!(self.output, "Correct! {} is the number.", guess)?,
            GuessOutcome::TooHigh => writeln!(self.output, "{} is too high. Go lower.", guess)?,
            GuessOutcome::TooLow => writeln!(self.output, "{} is too low. Go higher.", guess)?,
        }
        Ok(())
    }

    pub fn hint(&mut self, response: &HintResponse) -> Result<(), GameError> {
        match response {
            HintResponse::Hint(text) => writeln!(self.output, "Hint: {}", text)?,
            HintResponse::NoHintsLeft => writeln!(self.output, "No hints left.")?,
        }
        Ok(())
    }

    pub fn round_summary(&mut self, round: &Round, table_score: u64) -> Result<(), GameError> {
        if round.won() {
            writeln!(
                self.output,
                "Congratulations! You guessed it in {} attempt(s) and {} second(s). Score: {}",
                round.attempts_used(),
                round.duration(),
                table_score
            )?;
        } else {
            writeln!(
                self.output,
                "Out of attempts! The number was {}.",
                round.target()
            )?;
        }
        Ok(())
    }

    pub fn high_scores(&mut self, table: &ScoreTable) -> Result<(), GameError> {
        writeln!(self.output, "High Scores: ")?;
        if table.is_empty() {
            writeln!(self.output, "No high scores yet.")?;
        }
        for line in table.display_lines() {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    pub fn player_stats(&mut self, player: &Player) -> Result<(), GameError> {
        writeln!(
            self.output,
            "{}: {} game(s) played, {} won ({:.0}%)",
            player.name(),
            player.games_played(),
            player.wins(),
            player.win_rate()
        )?;
        for d in Difficulty::ALL {
            match player.best_score_for(d) {
                Some(best) => writeln!(self.output, "  Best {}: {}", d, best)?,
                None => writeln!(self.output, "  Best {}: none", d)?,
            }
        }
        Ok(())
    }

    pub fn error(&mut self, error: &GameError) -> Result<(), GameError> {
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }

    pub fn warning(&mut self, error: &GameError) -> Result<(), GameError> {
        writeln!(self.output, "Warning: {}", error)?;
        Ok(())
    }

    pub fn farewell(&mut self, name: Option<&str>) -> Result<(), GameError> {
        match name {
            Some(name) => writeln!(self.output, "Thanks for playing, {}! Goodbye!", name)?,
            None => writeln!(self.output, "Thanks for playing! Goodbye!")?,
        }
        self.output.flush()?;
        Ok(())
    }
}
