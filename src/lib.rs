//! Tictactoe: a pure functional tic-tac-toe core with time travel
//!
//! The game is built on a "pure core, imperative shell" split. Boards,
//! snapshots, history and game state are immutable values transformed by
//! pure functions; the controller owns the current value and swaps in a new
//! one on every move or jump.
//!
//! # Core Concepts
//!
//! - **Board**: 9 cells, row-major, evaluated by the pure [`evaluate`] function
//! - **History**: every snapshot reached, with a cursor selecting the current one
//! - **Rules**: move admissibility via accumulated validation
//! - **View**: a serializable projection for any frontend
//!
//! # Example
//!
//! ```rust
//! use tictactoe::{Game, GameView, MoveOutcome};
//!
//! let mut game = Game::new();
//! assert!(game.play(4).is_applied());
//!
//! // Occupied cells are refused without changing anything
//! assert!(matches!(game.play(4), MoveOutcome::Rejected(_)));
//! assert_eq!(game.history().len(), 2);
//!
//! game.jump_to(0).unwrap();
//! let view = GameView::project(&game);
//! assert_eq!(view.status, "Next player: X");
//! ```

pub mod core;
pub mod enforcement;
pub mod game;
pub mod view;

// Re-export commonly used types
pub use crate::core::{evaluate, Board, Cell, GameState, History, Player, Status, WinResult};
pub use enforcement::{MoveRules, MoveViolation, RulesBuilder};
pub use game::{BuildError, Game, GameBuilder, GameError, MoveOutcome};
pub use view::GameView;
