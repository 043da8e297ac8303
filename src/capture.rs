//! Directional capture scanning: the core Reversi rule.
//!
//! A placed disc captures every maximal run of opponent discs that starts
//! adjacent to the placement and is bounded, strictly beyond its far end,
//! by a disc of the placing color. All eight compass directions are
//! scanned independently.
//!
//! One parameterized scan ([`run_length`]) serves both the mutating path
//! ([`apply`]) and the hypothetical path ([`evaluate`]), so the two can
//! never disagree about what a move captures.

use crate::board::{Board, Cell};
use crate::constants::{DIRECTIONS, N};

/// True if (row, col) addresses a cell on the board.
fn in_bounds(row: i32, col: i32) -> bool {
    (0..N as i32).contains(&row) && (0..N as i32).contains(&col)
}

/// Length of the capture run for `color` placed at (row, col), along one
/// direction.
///
/// Walks outward over opponent discs while still on the board. The walk
/// yields a capture only if it traversed at least one opponent disc and
/// the cell just beyond the last one is in bounds and holds `color`.
/// A same-color disc immediately adjacent to the placement bounds a run
/// of length zero, which captures nothing.
fn run_length(board: &Board, row: usize, col: usize, color: Cell, dir: (i32, i32)) -> usize {
    let opponent = color.opponent();
    let (dr, dc) = dir;
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;
    let mut run = 0;
    while in_bounds(r, c) && board.get(r as usize, c as usize) == opponent {
        run += 1;
        r += dr;
        c += dc;
    }
    if run > 0 && in_bounds(r, c) && board.get(r as usize, c as usize) == color {
        run
    } else {
        0
    }
}

/// Place `color` at (row, col) and flip every captured disc.
///
/// Performs no validation: the caller must already have established the
/// move is legal (or, on the computer path, that its capture score is
/// positive). Called on an illegal move this places a disc and flips
/// nothing useful.
pub fn apply(board: &mut Board, row: usize, col: usize, color: Cell) {
    board.place(row, col, color);
    for dir in DIRECTIONS {
        let run = run_length(board, row, col, color, dir);
        let (dr, dc) = dir;
        for step in 1..=run as i32 {
            let r = (row as i32 + dr * step) as usize;
            let c = (col as i32 + dc * step) as usize;
            board.flip(r, c, color);
        }
    }
}

/// Number of opponent discs a placement of `color` at (row, col) would
/// flip, summed over all eight directions. Does not mutate the board.
///
/// An occupied cell evaluates to 0 without scanning; callers interpret
/// that as "cannot play here".
pub fn evaluate(board: &Board, row: usize, col: usize, color: Cell) -> usize {
    if board.get(row, col) != Cell::Empty {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| run_length(board, row, col, color, dir))
        .sum()
}
