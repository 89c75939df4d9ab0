//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - Board, cell and player values
//! - The win evaluator
//! - Guard predicates
//! - Immutable snapshot history and game state
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod board;
mod cell;
mod error;
mod evaluate;
mod guard;
mod history;
mod state;

pub use board::{Board, Line, CELL_COUNT, LINES};
pub use cell::{Cell, Player};
pub use error::{GameError, StateError};
pub use evaluate::{evaluate, WinResult};
pub use guard::Guard;
pub use history::{History, Move, Snapshot};
pub use state::{GameState, Status};
