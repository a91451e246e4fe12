//! Clue generation for the target number.
//!
//! Each call picks one of three hint forms uniformly at random. Nothing is
//! retained between calls.

use rand::seq::IndexedRandom;
use rand::Rng;

/// The three shapes a hint can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Divisor,
    Parity,
    DigitSum,
}

const HINT_KINDS: [HintKind; 3] = [HintKind::Divisor, HintKind::Parity, HintKind::DigitSum];

/// Divisors of `target` in `1..=10`. Always contains 1.
pub fn small_divisors(target: i64) -> Vec<i64> {
    (1..=10).filter(|d| target % d == 0).collect()
}

/// Sum of the decimal digits of `|target|`.
pub fn digit_sum(target: i64) -> u64 {
    let mut n = target.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Render a hint of the given kind. `rng` is only consulted for the divisor pick.
pub fn render_hint<R: Rng + ?Sized>(kind: HintKind, target: i64, rng: &mut R) -> String {
    match kind {
        HintKind::Divisor => {
            let divisors = small_divisors(target);
            let d = divisors.choose(rng).copied().unwrap_or(1);
            format!("The number is divisible by {}.", d)
        }
        HintKind::Parity => {
            if target % 2 == 0 {
                "The number is even.".to_string()
            } else {
                "The number is odd.".to_string()
            }
        }
        HintKind::DigitSum => format!("The number's digits sum to {}.", digit_sum(target)),
    }
}

/// Pick a hint form at random and render it for `target`.
pub fn generate_hint<R: Rng + ?Sized>(target: i64, rng: &mut R) -> String {
    let kind = HINT_KINDS[rng.random_range(0..HINT_KINDS.len())];
    render_hint(kind, target, rng)
}
