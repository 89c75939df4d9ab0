//! Replay a Game
//!
//! Plays the cell indices given on the command line, then prints the board,
//! the status line and the JSON view a frontend would receive.
//!
//! Key concepts:
//! - Refused moves leave the game untouched
//! - The view is recomputed from the controller, never stored
//! - Set RUST_LOG=debug to see every transition
//!
//! Run with: cargo run --example replay -- 0 4 1 3 2

use tictactoe::{Game, GameView, MoveOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Replay Example ===\n");

    let mut game = Game::new();
    for arg in std::env::args().skip(1) {
        let index: usize = arg.parse()?;
        match game.play(index) {
            MoveOutcome::Applied(played) => {
                println!(
                    "{} takes cell {} (row {}, col {})",
                    played.player,
                    played.index,
                    played.row(),
                    played.col()
                );
            }
            MoveOutcome::Rejected(violations) => {
                for violation in violations {
                    println!("Cell {index} refused: {violation}");
                }
            }
        }
    }

    println!("\n{}\n", game.current());
    println!("{}", game.status());

    let view = GameView::project(&game);
    println!("\n{}", view.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
