//! Board state: the 8x8 grid of cells plus running per-color disc counts.
//!
//! The board is pure data. It is mutated only through [`crate::capture::apply`],
//! which is the single place discs are placed or flipped; everything above that
//! layer treats the board as read-only.

use std::fmt;

use crate::constants::{GLYPH_DARK, GLYPH_EMPTY, GLYPH_LIGHT, N};

/// Contents of one board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// The human player's color.
    Light,
    /// The computer player's color.
    Dark,
}

impl Cell {
    /// The opposing disc color. Must not be called on `Empty`.
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Light => Cell::Dark,
            Cell::Dark => Cell::Light,
            Cell::Empty => unreachable!("Empty has no opponent"),
        }
    }
}

/// The 8x8 playing grid with maintained disc counters.
///
/// Invariant: `light_count + dark_count + empty cells == 64` at all times.
/// The counters are kept in lockstep with the grid by [`Board::place`] and
/// [`Board::flip`]; no other mutation path exists.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; N]; N],
    light_count: u32,
    dark_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create the standard opening position: Light at (3,3) and (4,4),
    /// Dark at (3,4) and (4,3), two discs per side.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; N]; N];
        cells[3][3] = Cell::Light;
        cells[4][4] = Cell::Light;
        cells[3][4] = Cell::Dark;
        cells[4][3] = Cell::Dark;
        Board {
            cells,
            light_count: 2,
            dark_count: 2,
        }
    }

    /// Read a cell. The caller guarantees `row` and `col` are in range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Current (light, dark) disc counts.
    pub fn counts(&self) -> (u32, u32) {
        (self.light_count, self.dark_count)
    }

    /// Snapshot of the full grid, for rendering and inspection.
    pub fn cells(&self) -> [[Cell; N]; N] {
        self.cells
    }

    /// Set an empty cell to `color` and credit that color's counter.
    ///
    /// This is the placement half of a move. Legality is not checked here;
    /// [`crate::capture::apply`] is the only caller.
    pub fn place(&mut self, row: usize, col: usize, color: Cell) {
        self.cells[row][col] = color;
        match color {
            Cell::Light => self.light_count += 1,
            Cell::Dark => self.dark_count += 1,
            Cell::Empty => {}
        }
    }

    /// Turn an occupied cell over to `color`, moving one disc from the
    /// opponent's counter to `color`'s counter.
    pub fn flip(&mut self, row: usize, col: usize, color: Cell) {
        self.cells[row][col] = color;
        match color {
            Cell::Light => {
                self.light_count += 1;
                self.dark_count -= 1;
            }
            Cell::Dark => {
                self.dark_count += 1;
                self.light_count -= 1;
            }
            Cell::Empty => {}
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in cells {
                let ch = match cell {
                    Cell::Light => GLYPH_LIGHT,
                    Cell::Dark => GLYPH_DARK,
                    Cell::Empty => GLYPH_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_position() {
        let board = Board::new();
        assert_eq!(board.get(3, 3), Cell::Light);
        assert_eq!(board.get(4, 4), Cell::Light);
        assert_eq!(board.get(3, 4), Cell::Dark);
        assert_eq!(board.get(4, 3), Cell::Dark);
        assert_eq!(board.get(1, 1), Cell::Empty);
        assert_eq!(board.counts(), (2, 2));
    }

    #[test]
    fn test_place_updates_counter() {
        let mut board = Board::new();
        board.place(2, 2, Cell::Light);
        assert_eq!(board.get(2, 2), Cell::Light);
        assert_eq!(board.counts(), (3, 2));
    }

    #[test]
    fn test_flip_moves_disc_between_counters() {
        let mut board = Board::new();
        board.flip(3, 4, Cell::Light);
        assert_eq!(board.get(3, 4), Cell::Light);
        assert_eq!(board.counts(), (3, 1));

        board.flip(3, 4, Cell::Dark);
        assert_eq!(board.counts(), (2, 2));
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9, "8 rows plus column footer");
        assert_eq!(lines[3], "4 _ _ _ W B _ _ _ ");
        assert_eq!(lines[4], "5 _ _ _ B W _ _ _ ");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
