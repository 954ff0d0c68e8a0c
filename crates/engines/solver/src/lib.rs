//! Solver NoGo Engine
//!
//! Runs the exhaustive win/loss solver on a copy of the position. When the
//! proof says the side to move wins, it plays the proven move; otherwise, or
//! when the clock runs out first, it plays a random legal move.

use nogo_core::{
    Board, Engine, GoBoard, Move, MoveOrder, SearchLimits, SearchResult, Solver, Stone,
    random_legal_move,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};


/// NoGo engine backed by the exhaustive solver.
///
/// This engine uses:
/// - AND/OR proof search over the full game tree
/// - A random legal move whenever no win is proven
/// - Time control support as a hard cutoff on the proof
#[derive(Debug, Clone)]
pub struct SolverEngine {
    solver: Solver,
    rng: StdRng,
    seed: Option<u64>,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(MoveOrder::Natural, None)
    }
}

impl SolverEngine {
    /// `seed` makes the fallback moves reproducible.
    pub fn new(order: MoveOrder, seed: Option<u64>) -> Self {
        Self {
            solver: Solver::new(order),
            rng: seeded_rng(seed),
            seed,
            nodes: 0,
        }
    }

    /// Picks a move for `color`. The proof runs on a copy of `board` with
    /// `color` to play.
    pub fn choose_move(&mut self, board: &GoBoard, color: Stone, limits: &SearchLimits) -> SearchResult {
        let mut copy = board.clone();
        copy.set_to_play(color);

        limits.start();
        let outcome = self.solver.solve_within(&copy, &limits.time_control);
        self.nodes = self.solver.nodes();

        match outcome {
            Some(outcome) if outcome.winner == color && outcome.first_move != Move::Pass => {
                info!(
                    color = color.symbol(),
                    mv = ?outcome.first_move,
                    nodes = self.nodes,
                    elapsed_ms = limits.time_control.elapsed().as_millis() as u64,
                    "playing proven win"
                );
                SearchResult {
                    best_move: outcome.first_move,
                    winner: Some(outcome.winner),
                    nodes: self.nodes,
                    stopped: false,
                }
            }
            _ => {
                let stopped = outcome.is_none();
                debug!(
                    color = color.symbol(),
                    stopped,
                    nodes = self.nodes,
                    budget = ?limits.move_time,
                    remaining = ?limits.time_control.remaining(),
                    "no proven win, playing random move"
                );
                SearchResult {
                    best_move: random_legal_move(&copy, color, &mut self.rng),
                    winner: outcome.map(|o| o.winner),
                    nodes: self.nodes,
                    stopped,
                }
            }
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for SolverEngine {
    fn search(&mut self, board: &GoBoard, color: Stone, limits: &SearchLimits) -> SearchResult {
        self.choose_move(board, color, limits)
    }

    fn name(&self) -> &str {
        "NoGoSolver"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.rng = seeded_rng(self.seed);
    }
}
