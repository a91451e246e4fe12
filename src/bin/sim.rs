use guessing::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Bisect the remaining interval until the round ends.
fn play_bisect(round: &mut Round, settings: &Settings) {
    let (mut low, mut high) = settings.range();
    while !round.is_over() && low <= high {
        let guess = low + (high - low) / 2;
        match round.process_guess(guess) {
            GuessOutcome::Correct => break,
            GuessOutcome::TooHigh => high = guess - 1,
            GuessOutcome::TooLow => low = guess + 1,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [rounds]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 10,
    };

    let settings = Settings::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = Player::new("sim");
    let mut table = ScoreTable::new();

    let mut per_difficulty = serde_json::Map::new();
    for difficulty in Difficulty::ALL {
        let mut wins = 0u32;
        let mut attempts_used = 0u32;
        for _ in 0..rounds {
            let mut round = Round::new(difficulty, &settings, &mut rng);
            play_bisect(&mut round, &settings);
            player.update_stats(&round);
            if round.won() {
                wins += 1;
                attempts_used += round.attempts_used();
                let score = round.calculate_score(settings.score_multiplier(difficulty));
                table.update(difficulty, score, player.name());
            }
        }
        per_difficulty.insert(
            difficulty.key().to_string(),
            json!({
                "rounds": rounds,
                "wins": wins,
                "attempts_used": attempts_used,
                "best": player.best_score_for(difficulty),
            }),
        );
    }

    let result = json!({
        "seed": seed,
        "games_played": player.games_played(),
        "wins": player.wins(),
        "difficulties": per_difficulty,
        "high_scores": table,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
