//! Random Move NoGo Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons against the solver engine
//! - Stress testing the legality oracle

use nogo_core::{Engine, GoBoard, SearchLimits, SearchResult, Stone, random_legal_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(test)]
mod lib_tests;

/// A NoGo engine that plays random legal moves.
///
/// This engine provides no search; it picks a random point from the legal
/// moves and passes when there are none.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomEngine {
    /// `seed` makes the move sequence reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, seed }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &GoBoard, color: Stone, _limits: &SearchLimits) -> SearchResult {
        SearchResult {
            best_move: random_legal_move(board, color, &mut self.rng),
            winner: None,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "NoGoRandom"
    }

    fn new_game(&mut self) {
        *self = Self::new(self.seed);
    }
}
