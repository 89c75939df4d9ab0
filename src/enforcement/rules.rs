//! Move rules using Validation.

use crate::core::{evaluate, Guard, WinResult, CELL_COUNT};
use crate::enforcement::context::MoveContext;
use crate::enforcement::violations::MoveViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A caller-supplied guard and the message reported when it fails.
pub(crate) struct CustomCheck {
    pub(crate) guard: Guard<MoveContext>,
    pub(crate) message: String,
}

/// Admissibility rules for moves.
///
/// The standard checks (on the board, game not over, cell empty) always
/// run. Custom checks run after them. Uses Validation to accumulate ALL
/// violations instead of stopping at the first.
pub struct MoveRules {
    pub(crate) custom_checks: Vec<CustomCheck>,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl MoveRules {
    /// The standard tic-tac-toe rules with no custom checks.
    pub fn standard() -> Self {
        Self {
            custom_checks: Vec::new(),
        }
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if the move is admissible.
    pub fn enforce(&self, context: &MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<MoveViolation>>> = Vec::new();

        checks.push(if context.index < CELL_COUNT {
            Validation::success(())
        } else {
            Validation::fail(MoveViolation::OutOfRange {
                index: context.index,
            })
        });

        checks.push(match evaluate(&context.board) {
            WinResult::Winner { player, .. } => {
                Validation::fail(MoveViolation::GameOver { winner: player })
            }
            WinResult::NoWinner => Validation::success(()),
        });

        // Off-board targets were reported above
        checks.push(match context.target().and_then(|cell| cell.player()) {
            Some(by) => Validation::fail(MoveViolation::Occupied {
                index: context.index,
                by,
            }),
            None => Validation::success(()),
        });

        for check in &self.custom_checks {
            checks.push(if check.guard.check(context) {
                Validation::success(())
            } else {
                Validation::fail(MoveViolation::CustomCheckFailed {
                    message: check.message.clone(),
                })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Convenience wrapper over [`enforce`](Self::enforce) returning the
    /// violations as a plain list.
    pub fn violations(&self, context: &MoveContext) -> Vec<MoveViolation> {
        match self.enforce(context) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}
