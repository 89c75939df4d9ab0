//! Validation-based move rules.
//!
//! This module decides whether a move may be applied, using Stillwater's
//! `Validation` type to accumulate ALL violations instead of fail-fast
//! behavior. A refused move is not an error: the controller simply leaves
//! the game untouched and hands the violations back.
//!
//! # Example
//!
//! ```rust
//! use tictactoe::core::GameState;
//! use tictactoe::enforcement::{MoveContext, RulesBuilder};
//!
//! let rules = RulesBuilder::new()
//!     .require_pred(|ctx| ctx.index != 4, "Centre is closed".to_string())
//!     .build();
//!
//! let context = MoveContext::from_state(&GameState::new(), 4);
//! assert!(rules.enforce(&context).is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::RulesBuilder;
pub use context::MoveContext;
pub use rules::MoveRules;
pub use violations::MoveViolation;
