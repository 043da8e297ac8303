//! Game sequencing: validated human moves, computer replies, terminal
//! detection, and the running leader.
//!
//! A round is fixed: Light (the human) acts, then Dark (the computer)
//! responds once. There is no turn flag to maintain; a side with no legal
//! move simply contributes nothing to its half of the round, and the game
//! ends when neither side has a capturing move anywhere.

use std::fmt;

use crate::board::{Board, Cell};
use crate::capture;
use crate::constants::N;
use crate::opponent;
use crate::rules;

/// Rejected human move: out of range, occupied, or capturing nothing.
///
/// The board is guaranteed untouched when this is returned; the caller
/// re-prompts and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMove;

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move")
    }
}

impl std::error::Error for InvalidMove {}

/// Which side currently holds more discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leader {
    Light,
    Dark,
    Tie,
}

/// A full game: the board plus the operations that drive it.
pub struct Game {
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the standard opening position.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Wrap an existing board, e.g. an engineered test position.
    pub fn with_board(board: Board) -> Self {
        Game { board }
    }

    /// Read access to the board, for rendering and inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current (light, dark) disc counts.
    pub fn counts(&self) -> (u32, u32) {
        self.board.counts()
    }

    /// Play the human move at (row, col).
    ///
    /// Coordinates are taken as `i32` so raw input like row -1 or 8 is
    /// expressible and rejected here rather than reaching the capture
    /// scan. Validation runs strictly before any mutation.
    ///
    /// # Errors
    /// [`InvalidMove`] if the cell is out of range, occupied, or the
    /// placement would flip nothing. The board is unchanged on error.
    pub fn apply_light_move(&mut self, row: i32, col: i32) -> Result<(), InvalidMove> {
        if !(0..N as i32).contains(&row) || !(0..N as i32).contains(&col) {
            return Err(InvalidMove);
        }
        let (row, col) = (row as usize, col as usize);
        if !rules::is_legal(&self.board, row, col, Cell::Light) {
            return Err(InvalidMove);
        }
        capture::apply(&mut self.board, row, col, Cell::Light);
        Ok(())
    }

    /// Let the computer take its turn.
    ///
    /// Returns the position it played, or `None` if it had no capturing
    /// move and passed (the board is unchanged in that case). Never an
    /// error: passing is a normal outcome.
    pub fn apply_dark_move(&mut self) -> Option<(usize, usize)> {
        let (row, col) = opponent::best_move(&self.board)?;
        capture::apply(&mut self.board, row, col, Cell::Dark);
        Some((row, col))
    }

    /// Whether the game is over: neither side has a capturing move on
    /// any cell. Recomputed fresh on every call.
    ///
    /// Light's availability is checked with the strict legality predicate
    /// and Dark's through the capture score; the two expressions are
    /// equivalent (score > 1 means exactly "flips at least one disc").
    pub fn is_terminal(&self) -> bool {
        for row in 0..N {
            for col in 0..N {
                if rules::is_legal(&self.board, row, col, Cell::Light)
                    || rules::capture_score(&self.board, row, col, Cell::Dark) > 1
                {
                    return false;
                }
            }
        }
        true
    }

    /// The side currently ahead on discs. Valid mid-game; it reports the
    /// instantaneous leader, not the final winner.
    pub fn leader(&self) -> Leader {
        let (light, dark) = self.board.counts();
        if light > dark {
            Leader::Light
        } else if dark > light {
            Leader::Dark
        } else {
            Leader::Tie
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        for (row, col) in [(-1, -1), (-1, 0), (8, 8), (2, -1), (2, 8), (10, 10)] {
            assert_eq!(game.apply_light_move(row, col), Err(InvalidMove));
        }
        assert_eq!(game.counts(), (2, 2), "board untouched after rejections");
    }

    #[test]
    fn test_occupied_and_zero_capture_rejected() {
        let mut game = Game::new();
        assert_eq!(game.apply_light_move(3, 3), Err(InvalidMove));
        assert_eq!(game.apply_light_move(1, 1), Err(InvalidMove));
        assert_eq!(game.counts(), (2, 2));
    }

    #[test]
    fn test_opening_round() {
        let mut game = Game::new();
        assert!(!game.is_terminal());
        assert_eq!(game.leader(), Leader::Tie);

        game.apply_light_move(3, 5).unwrap();
        assert_eq!(game.counts(), (4, 1));
        assert_eq!(game.leader(), Leader::Light);

        let reply = game.apply_dark_move();
        assert!(reply.is_some());
        assert_eq!(game.counts(), (3, 3));
        assert_eq!(game.leader(), Leader::Tie);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let game = Game::new();
        let t1 = game.is_terminal();
        let t2 = game.is_terminal();
        assert_eq!(t1, t2);
        assert_eq!(game.leader(), game.leader());
    }

    #[test]
    fn test_dominated_board_is_terminal_and_dark_passes() {
        // The quickest wipe-out: a free Light disc at (5,2) sets up
        // (2,5), which captures both Dark discs along the diagonal.
        let mut board = Board::new();
        board.place(5, 2, Cell::Light);
        let mut game = Game::with_board(board);
        game.apply_light_move(2, 5).unwrap();
        assert_eq!(game.counts(), (6, 0));
        assert!(game.is_terminal());
        assert_eq!(game.apply_dark_move(), None);
        assert_eq!(game.counts(), (6, 0), "pass mutates nothing");
        assert_eq!(game.leader(), Leader::Light);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let run = || {
            let mut game = Game::new();
            let mut dark_moves = Vec::new();
            for &(row, col) in &[(3, 5), (2, 3), (2, 2)] {
                if game.apply_light_move(row, col).is_ok() {
                    dark_moves.push(game.apply_dark_move());
                }
            }
            (game.board().cells(), game.counts(), dark_moves)
        };
        assert_eq!(run(), run());
    }
}
