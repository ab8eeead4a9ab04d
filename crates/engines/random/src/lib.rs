//! Random Utility Evaluator
//!
//! Scores decided games exactly and everything else with a random number.
//! Useful for:
//! - Exercising search scaffolding independently of heuristic quality
//! - Baseline comparisons (any real evaluator should easily beat this)

use chess_core::{Color, Evaluator, Rules};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// Lowest random utility handed out for an undecided position.
pub const RANDOM_MIN: i32 = i32::MIN / 4 + 1;
/// Exclusive upper end of the random utility range.
pub const RANDOM_MAX: i32 = i32::MAX / 4;

/// An evaluator that ignores the board beyond game-over detection.
///
/// - the maximizing side is mated: `i32::MIN`
/// - the opponent is mated: `i32::MAX`
/// - stalemate: `0`
/// - otherwise uniform in `RANDOM_MIN..RANDOM_MAX`
///
/// The generator is seeded, so a given seed and call sequence always
/// produce the same scores.
#[derive(Debug, Clone)]
pub struct RandomUtility {
    side: Color,
    rng: StdRng,
}

impl RandomUtility {
    pub fn new(side: Color, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self) -> Color {
        self.side
    }
}

impl<P: Rules + ?Sized> Evaluator<P> for RandomUtility {
    fn evaluate(&mut self, pos: &P) -> i32 {
        if pos.is_checkmate() {
            if pos.side_to_move() == self.side {
                i32::MIN
            } else {
                i32::MAX
            }
        } else if pos.is_stalemate() {
            0
        } else {
            self.rng.gen_range(RANDOM_MIN..RANDOM_MAX)
        }
    }
}
