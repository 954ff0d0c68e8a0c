use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::types::{Move, Point, Stone};

/// Generate all legal points for `stone`, returning a freshly allocated vector.
/// Order follows the board's `empty_positions`.
pub fn legal_moves<B: Board>(board: &B, stone: Stone) -> Vec<Point> {
    let mut out = Vec::new();
    legal_moves_into(board, stone, &mut out);
    out
}

/// Generate all legal points into the provided buffer, reusing it across calls.
///
/// No rule checking happens here: every candidate from `empty_positions` is
/// kept iff the board's legality oracle accepts it.
pub fn legal_moves_into<B: Board>(board: &B, stone: Stone, out: &mut Vec<Point>) {
    out.clear();
    out.extend(board.empty_positions(stone));
    out.retain(|&p| board.is_legal(p, stone));
}

/// Picks a legal point uniformly at random, or `Move::Pass` when there is none.
pub fn random_legal_move<B: Board, R: Rng + ?Sized>(board: &B, stone: Stone, rng: &mut R) -> Move {
    let moves = legal_moves(board, stone);
    moves.choose(rng).copied().into()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
