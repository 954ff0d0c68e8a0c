pub mod board;
pub mod config;
pub mod error;
pub mod gtp;
pub mod movegen;
pub mod solver;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use error::*;
pub use gtp::GtpSession;
pub use movegen::*;
pub use solver::{MoveOrder, SearchOutcome, Solver, solve};
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all NoGo engines (solver, random)
// =============================================================================

/// Result of choosing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play (`Move::Pass` if no legal moves)
    pub best_move: Move,
    /// Proven winner of the position, if the engine completed a proof
    pub winner: Option<Stone>,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all NoGo engines must implement.
///
/// The engine never touches the live board; the caller applies the chosen
/// move.
pub trait Engine: Send {
    /// Choose a move for `color` on `board` within the given limits.
    fn search(&mut self, board: &GoBoard, color: Stone, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for GTP identification
    fn name(&self) -> &str;

    /// Returns the engine's version for GTP identification
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
