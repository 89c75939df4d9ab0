//! Builder API for creating move rules.

use crate::core::Guard;
use crate::enforcement::context::MoveContext;
use crate::enforcement::rules::{CustomCheck, MoveRules};

/// Builder for layering custom checks over the standard rules
#[derive(Default)]
pub struct RulesBuilder {
    custom_checks: Vec<CustomCheck>,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            custom_checks: Vec::new(),
        }
    }

    /// Add a guard; `message` is reported when it refuses a move
    pub fn require(mut self, guard: Guard<MoveContext>, message: String) -> Self {
        self.custom_checks.push(CustomCheck { guard, message });
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, message: String) -> Self
    where
        F: Fn(&MoveContext) -> bool + Send + Sync + 'static,
    {
        self.require(Guard::new(predicate), message)
    }

    /// Build the move rules
    pub fn build(self) -> MoveRules {
        MoveRules {
            custom_checks: self.custom_checks,
        }
    }
}
