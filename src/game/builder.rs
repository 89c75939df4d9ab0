//! Builder for constructing games.

use crate::enforcement::MoveRules;
use crate::game::controller::{Game, MoveOutcome};
use crate::game::error::BuildError;

/// Builder for configuring a game, optionally replaying a move list.
///
/// # Example
///
/// ```rust
/// use tictactoe::game::GameBuilder;
/// use tictactoe::core::{Player, Status};
///
/// let game = GameBuilder::new()
///     .report_draws(false)
///     .moves([4, 0, 8])
///     .build()
///     .unwrap();
///
/// assert_eq!(game.cursor(), 3);
/// assert_eq!(game.status(), Status::NextPlayer(Player::O));
/// ```
pub struct GameBuilder {
    rules: MoveRules,
    report_draws: bool,
    moves: Vec<usize>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rules: MoveRules::standard(),
            report_draws: true,
            moves: Vec::new(),
        }
    }

    /// Replace the standard move rules.
    pub fn rules(mut self, rules: MoveRules) -> Self {
        self.rules = rules;
        self
    }

    /// Whether a full board without a winner reports `Draw` (default) or
    /// falls through to the next player.
    pub fn report_draws(mut self, report: bool) -> Self {
        self.report_draws = report;
        self
    }

    /// Moves to replay, in order, once the game is created.
    pub fn moves(mut self, moves: impl IntoIterator<Item = usize>) -> Self {
        self.moves.extend(moves);
        self
    }

    /// Build the game.
    /// Returns an error if any replayed move is refused.
    pub fn build(self) -> Result<Game, BuildError> {
        let mut game = Game::with_rules(self.rules, self.report_draws);

        for (position, index) in self.moves.into_iter().enumerate() {
            if let MoveOutcome::Rejected(violations) = game.play(index) {
                return Err(BuildError::IllegalMove {
                    position,
                    index,
                    violations,
                });
            }
        }

        Ok(game)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
