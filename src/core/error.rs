//! Errors raised by the pure core.

use thiserror::Error;

/// Errors raised by game state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Step {step} is outside the history (length {len})")]
    StepOutOfRange { step: usize, len: usize },
}

/// Serialized history or state that breaks an invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("History has no snapshots")]
    EmptyHistory,

    #[error("First snapshot is not the empty board")]
    NotStartingEmpty,

    #[error("Cursor {cursor} is outside the history (length {len})")]
    CursorOutOfRange { cursor: usize, len: usize },
}
