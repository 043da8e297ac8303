//! Move legality and capture scoring, built on the capture scan.

use crate::board::{Board, Cell};
use crate::capture;

/// Whether `color` may play at (row, col): the cell is empty and the
/// placement flips at least one opponent disc. Coordinates must be in
/// range; the game layer validates raw input before calling in.
pub fn is_legal(board: &Board, row: usize, col: usize, color: Cell) -> bool {
    if board.get(row, col) != Cell::Empty {
        return false;
    }
    capture::evaluate(board, row, col, color) > 0
}

/// Score a hypothetical placement: the number of discs `color` would gain.
///
/// Returns `1 + captured` for an empty cell (the 1 is the placed disc
/// itself) and the sentinel `1` for an occupied cell. Any value greater
/// than 1 therefore also means the move is legal, which is how the
/// computer opponent and the terminal-state check use it.
pub fn capture_score(board: &Board, row: usize, col: usize, color: Cell) -> usize {
    if board.get(row, col) != Cell::Empty {
        return 1;
    }
    1 + capture::evaluate(board, row, col, color)
}
