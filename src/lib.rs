//! Reversi-Rust: a console Reversi (Othello) engine.
//!
//! The human plays Light and the computer answers as Dark with a greedy
//! one-ply search. The whole engine is synchronous and deterministic:
//! the same sequence of human moves always produces the same game.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and the eight direction vectors
//! - [`board`] - Grid state and per-color disc counts
//! - [`capture`] - The directional capture scan (apply / evaluate)
//! - [`rules`] - Move legality and capture scoring
//! - [`opponent`] - Greedy computer move selection
//! - [`game`] - Turn sequencing, terminal detection, leader
//! - [`console`] - Interactive text interface
//!
//! ## Example
//!
//! ```
//! use reversi_rust::game::{Game, Leader};
//!
//! let mut game = Game::new();
//!
//! // The human opens with f4 (row 3, col 5), flipping one disc.
//! game.apply_light_move(3, 5).unwrap();
//! assert_eq!(game.counts(), (4, 1));
//!
//! // The computer answers and evens the score.
//! let reply = game.apply_dark_move();
//! assert!(reply.is_some());
//! assert_eq!(game.leader(), Leader::Tie);
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod game;
pub mod opponent;
pub mod rules;
