//! Builder errors.

use crate::enforcement::MoveViolation;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A replayed move was refused. `position` counts from 0 within the
    /// supplied move list.
    #[error("Move {position} (cell {index}) was refused: {}", format_violations(.violations))]
    IllegalMove {
        position: usize,
        index: usize,
        violations: Vec<MoveViolation>,
    },
}

fn format_violations(violations: &[MoveViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
