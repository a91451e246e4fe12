pub mod cli;
mod common;
mod config;
pub mod hint;
mod logging;
mod player;
pub mod round;
mod score;
pub mod session;
pub mod prelude;

pub use cli::{parse_difficulty, parse_guess, parse_name, parse_yes_no, Console, GuessInput};
pub use common::*;
pub use config::*;
pub use hint::generate_hint;
pub use logging::{init_logging, level_from};
pub use player::*;
pub use round::{HintResponse, Round};
pub use score::*;
pub use session::{session_rng, Session, SessionOutcome, SessionState};
