//! The game controller.
//!
//! This module is the "imperative shell" around the pure core: it owns the
//! current [`GameState`](crate::core::GameState), runs the move rules, swaps
//! in new state values, and logs what happened.

mod builder;
mod controller;
mod error;

pub use builder::GameBuilder;
pub use controller::{Game, MoveOutcome};
pub use crate::core::GameError;
pub use error::BuildError;
