//! Exhaustive win/loss solver.
//!
//! NoGo has exactly two outcomes, so the search is a plain AND/OR proof: the
//! mover wins iff some legal move leads to a position the opponent does not
//! win. The first such move ends the scan; there are no scores to maximise
//! and no transposition table. Every branch searches its own clone of the
//! board, so nothing needs to be undone on the way back up.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::board::Board;
use crate::movegen::legal_moves_into;
use crate::time_control::TimeControl;
use crate::types::{Move, Point, Stone};

/// Result of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Perfect-play winner of the position that was solved.
    pub winner: Stone,
    /// Move played from the reported node. Bookkeeping only; at the root it
    /// repeats the decisive root move.
    pub reaching_move: Move,
    /// Root move of the line that decided the verdict. This is the move to
    /// play when `winner` is the side to move. `Pass` if the root was terminal.
    pub first_move: Move,
}

/// Order in which candidate moves are tried.
///
/// Ordering only changes which winning move is reported, never the verdict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveOrder {
    /// Board order. Deterministic.
    #[default]
    Natural,
    /// Board order shuffled at every node by a seeded RNG.
    Shuffled { seed: u64 },
}

#[derive(Debug, Clone)]
pub struct Solver {
    order: MoveOrder,
    rng: Option<StdRng>,
    nodes: u64,
    /// One move list per ply, reused across nodes and solves.
    buffers: Vec<Vec<Point>>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(MoveOrder::Natural)
    }
}

impl Solver {
    pub fn new(order: MoveOrder) -> Self {
        let rng = match order {
            MoveOrder::Natural => None,
            MoveOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        Self {
            order,
            rng,
            nodes: 0,
            buffers: Vec::new(),
        }
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Nodes visited by the last solve.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Solves `board` for its side to move, running to completion.
    pub fn solve<B: Board>(&mut self, board: &B) -> SearchOutcome {
        // No limit is set, so the clock never stops the search.
        let tc = TimeControl::new(None);
        self.run(board, &tc).0
    }

    /// Solves `board`, giving up when `tc` runs out. `None` means the proof
    /// did not finish in time.
    pub fn solve_within<B: Board>(&mut self, board: &B, tc: &TimeControl) -> Option<SearchOutcome> {
        let (outcome, stopped) = self.run(board, tc);
        (!stopped).then_some(outcome)
    }

    fn run<B: Board>(&mut self, board: &B, tc: &TimeControl) -> (SearchOutcome, bool) {
        self.nodes = 0;
        let started = Instant::now();
        let (outcome, stopped) = self.search(board, 0, Move::Pass, None, tc);
        debug!(
            to_play = board.to_play().symbol(),
            winner = outcome.winner.symbol(),
            nodes = self.nodes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            stopped,
            "solve finished"
        );
        (outcome, stopped)
    }

    /// Recursive AND/OR search.
    ///
    /// `reaching` is the move that produced `board`; `first` is the root move
    /// of the current line (None at the root itself). `ply` selects the move
    /// buffer.
    ///
    /// Returns (outcome, stopped) where stopped indicates the clock ran out.
    fn search<B: Board>(
        &mut self,
        board: &B,
        ply: usize,
        reaching: Move,
        first: Option<Point>,
        tc: &TimeControl,
    ) -> (SearchOutcome, bool) {
        self.nodes += 1;
        let mover = board.to_play();
        let mut outcome = SearchOutcome {
            winner: mover.opponent(),
            reaching_move: reaching,
            first_move: first.into(),
        };

        if tc.should_check_time(self.nodes) && tc.check_time() {
            return (outcome, true);
        }

        if let Some(winner) = board.winner() {
            outcome.winner = winner;
            return (outcome, false);
        }

        let mut moves = self.take_buffer(ply);
        legal_moves_into(board, mover, &mut moves);
        if let Some(rng) = self.rng.as_mut() {
            moves.shuffle(rng);
        }

        let mut result = None;
        for &m in &moves {
            let mut child = board.clone();
            child.apply_move(m, mover);

            let (sub, stopped) = self.search(&child, ply + 1, Move::Play(m), first.or(Some(m)), tc);
            if stopped {
                result = Some((sub, true));
                break;
            }

            outcome = SearchOutcome {
                winner: sub.winner,
                reaching_move: Move::Play(m),
                first_move: sub.first_move,
            };
            if sub.winner != mover.opponent() {
                result = Some((outcome, false));
                break;
            }
            if first.is_none() {
                trace!(mv = ?m, "root move refuted");
            }
        }
        self.buffers[ply] = moves;
        if let Some(result) = result {
            return result;
        }

        // Every move (if any) is a win for the opponent.
        outcome.winner = mover.opponent();
        (outcome, false)
    }

    fn take_buffer(&mut self, ply: usize) -> Vec<Point> {
        if self.buffers.len() <= ply {
            self.buffers.resize_with(ply + 1, Vec::new);
        }
        std::mem::take(&mut self.buffers[ply])
    }
}

/// Solves `board` with natural move order and no time limit.
pub fn solve<B: Board>(board: &B) -> SearchOutcome {
    Solver::default().solve(board)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod solver_tests;
