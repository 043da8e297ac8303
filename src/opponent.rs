//! The computer player: a greedy one-ply search over capture scores.
//!
//! The heuristic is deliberately simple and fully deterministic: pick the
//! empty cell with the highest immediate capture score, first occurrence
//! in row-major order winning ties. No positional weighting is applied.

use crate::board::{Board, Cell};
use crate::constants::N;
use crate::rules;

/// Find the best Dark move on the current board, or `None` if Dark has
/// no capturing move and must pass.
///
/// `best` starts at 1: a score of exactly 1 is a placement that flips
/// nothing, which is not a legal move and must never be chosen. The
/// strict comparison keeps the earliest row-major cell among equals.
pub fn best_move(board: &Board) -> Option<(usize, usize)> {
    let mut best = 1;
    let mut best_pos = None;
    for row in 0..N {
        for col in 0..N {
            if board.get(row, col) != Cell::Empty {
                continue;
            }
            let score = rules::capture_score(board, row, col, Cell::Dark);
            if score > best {
                best = score;
                best_pos = Some((row, col));
            }
        }
    }
    best_pos
}
