use std::io;
use std::path::PathBuf;

use clap::Parser;
use guessing::{init_logging, Console, Session, SessionConfig, SessionOutcome, DEFAULT_SCORE_FILE};

#[derive(Parser)]
#[command(author, version, about = "Guess the number before your attempts run out", long_about = None)]
struct Cli {
    #[arg(long, default_value = DEFAULT_SCORE_FILE, help = "High score file")]
    scores: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Player name (skips the name prompt)")]
    name: Option<String>,
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        SessionConfig {
            score_file: cli.scores,
            seed: cli.seed,
            player_name: cli.name.filter(|n| !n.trim().is_empty()),
        }
    }
}

fn run_session(config: SessionConfig) -> anyhow::Result<SessionOutcome> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(config, console);
    Ok(session.run()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config: SessionConfig = Cli::parse().into();
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let session = tokio::task::spawn_blocking(move || run_session(config));
    tokio::select! {
        joined = session => {
            match joined {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    eprintln!("Game ended with an error: {}", e);
                    println!("Thanks for playing! Goodbye!");
                }
                Err(e) => {
                    eprintln!("Game ended unexpectedly: {}", e);
                    println!("Thanks for playing! Goodbye!");
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nInterrupted. Thanks for playing! Goodbye!");
            // The blocking stdin read cannot be cancelled, so leave without
            // waiting for the session task.
            std::process::exit(0);
        }
    }
    Ok(())
}
