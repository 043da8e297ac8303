//! Constants for board geometry and capture scanning.
//!
//! The board is a fixed 8x8 grid; Reversi has no other standard size and
//! the capture rules below are hard-wired to it.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Reversi is always played on 8x8.
pub const N: usize = 8;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = N * N;

// =============================================================================
// Direction Vectors
// =============================================================================

/// Offsets to neighboring cells as (row delta, col delta).
/// Order: N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // North (up one row)
    (-1, 1),  // NE (diagonal)
    (0, 1),   // East (right one column)
    (1, 1),   // SE (diagonal)
    (1, 0),   // South (down one row)
    (1, -1),  // SW (diagonal)
    (0, -1),  // West (left one column)
    (-1, -1), // NW (diagonal)
];

// =============================================================================
// Cell Glyphs (console rendering)
// =============================================================================

/// Light disc (the human player).
pub const GLYPH_LIGHT: char = 'W';

/// Dark disc (the computer player).
pub const GLYPH_DARK: char = 'B';

/// Empty cell.
pub const GLYPH_EMPTY: char = '_';
