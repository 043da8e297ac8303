//! Reversi-Rust: a console Reversi engine.
//!
//! This is a Rust reimplementation of a classic course-project Reversi,
//! originally written with a model/view/controller split in Java.
//!
//! ## Usage
//!
//! - `reversi-rust` - Play an interactive game (you are W)
//! - `reversi-rust play` - Same as above
//! - `reversi-rust demo` - Show a scripted opening exchange

use anyhow::Result;
use clap::{Parser, Subcommand};

use reversi_rust::console::{format_coord, Console};
use reversi_rust::game::Game;

/// Reversi-Rust: play Reversi against a greedy computer opponent
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the console
    Play,
    /// Run a scripted opening exchange and print the positions
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => run_demo(),
        Some(Commands::Play) | None => {
            let mut console = Console::new();
            console.run()
        }
    }
}

fn run_demo() -> Result<()> {
    println!("Reversi-Rust: scripted opening\n");

    let mut game = Game::new();
    println!("{}", game.board());

    game.apply_light_move(3, 5)?;
    let (light, dark) = game.counts();
    println!("Light plays f4:\n");
    println!("{}", game.board());
    println!("The score is {light}-{dark}.\n");

    if let Some((row, col)) = game.apply_dark_move() {
        let (light, dark) = game.counts();
        println!("The computer places a piece at {}.\n", format_coord(row, col));
        println!("{}", game.board());
        println!("The score is {light}-{dark}.");
    }
    Ok(())
}
