//! Interactive console interface.
//!
//! Runs the game as a prompt/response loop on stdin/stdout: render the
//! board, ask the human for a move, apply it, let the computer answer,
//! repeat until neither side can move, then announce the result.
//!
//! Moves are entered as a column letter followed by a row digit, column
//! first: `c4` is column c (index 2), row 4 (index 3). Anything that is
//! not exactly two characters, or names a cell the human cannot play,
//! gets an "Illegal move" reply and a fresh prompt.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::game::{Game, Leader};

/// Parse a move line into raw (row, col) coordinates.
///
/// The coordinates are not range-checked here: `i9` maps to column 8 and
/// the game rejects it. Returns `None` only for lines that are not two
/// characters long.
pub fn parse_move(line: &str) -> Option<(i32, i32)> {
    let lower = line.trim().to_lowercase();
    let mut chars = lower.chars();
    let col_ch = chars.next()?;
    let row_ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let col = col_ch as i32 - 'a' as i32;
    let row = row_ch as i32 - '1' as i32;
    Some((row, col))
}

/// Format board coordinates for display: column letter then row digit.
pub fn format_coord(row: usize, col: usize) -> String {
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}

/// Console front end wrapping a [`Game`].
pub struct Console {
    game: Game,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Console { game: Game::new() }
    }

    /// Run the interactive loop until the game ends or stdin closes.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut out = io::stdout();

        writeln!(out, "Welcome to Reversi\n")?;
        writeln!(out, "You are W.\n")?;
        self.show_position(&mut out)?;

        while !self.game.is_terminal() {
            write!(out, "Where would you like to place your token? ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                return Ok(()); // stdin closed mid-game
            };
            let line = line?;
            writeln!(out)?;

            let Some((row, col)) = parse_move(&line) else {
                writeln!(out, "Illegal move. Try again.\n")?;
                continue;
            };
            if self.game.apply_light_move(row, col).is_err() {
                writeln!(out, "Illegal move. Try again.\n")?;
                continue;
            }
            self.show_position(&mut out)?;

            match self.game.apply_dark_move() {
                Some((r, c)) => {
                    writeln!(out, "The computer places a piece at {}.\n", format_coord(r, c))?;
                    self.show_position(&mut out)?;
                }
                None => writeln!(out, "The computer cannot make any more moves.\n")?,
            }
        }

        match self.game.leader() {
            Leader::Light => writeln!(out, "You win!")?,
            Leader::Tie => writeln!(out, "You tied!")?,
            Leader::Dark => writeln!(out, "Better luck next time!")?,
        }
        Ok(())
    }

    fn show_position(&self, out: &mut impl Write) -> Result<()> {
        let (light, dark) = self.game.counts();
        writeln!(out, "{}", self.game.board())?;
        writeln!(out, "The score is {light}-{dark}.")?;
        Ok(())
    }
}
