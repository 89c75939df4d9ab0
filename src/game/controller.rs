//! Game controller: the single source of truth for a running game.

use crate::core::{Board, GameError, GameState, History, Move, Player, Status, WinResult};
use crate::enforcement::{MoveContext, MoveRules, MoveViolation};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Result of attempting a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed
    Applied(Move),

    /// Nothing changed; every reason is listed
    Rejected(Vec<MoveViolation>),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// A game in progress.
///
/// Holds the current [`GameState`] and replaces it with a new value on every
/// transition. Presentation layers read from here and never keep their own
/// copy of the board.
///
/// # Example
///
/// ```rust
/// use tictactoe::game::Game;
/// use tictactoe::core::{Player, Status};
///
/// let mut game = Game::new();
/// for index in [0, 4, 1, 3, 2] {
///     game.play(index);
/// }
///
/// assert_eq!(
///     game.status(),
///     Status::Winner { player: Player::X, line: [0, 1, 2] }
/// );
///
/// game.jump_to(0).unwrap();
/// assert_eq!(game.status(), Status::NextPlayer(Player::X));
/// assert_eq!(game.history().len(), 6);
/// ```
pub struct Game {
    id: Uuid,
    state: GameState,
    rules: MoveRules,
    report_draws: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game with the standard rules and draw reporting on.
    pub fn new() -> Self {
        Self::with_rules(MoveRules::standard(), true)
    }

    pub(crate) fn with_rules(rules: MoveRules, report_draws: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: GameState::new(),
            rules,
            report_draws,
        }
    }

    /// Session identifier, stable for the life of the game.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current(&self) -> &Board {
        self.state.current()
    }

    pub fn history(&self) -> &History {
        self.state.history()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn next_player(&self) -> Player {
        self.state.next_player()
    }

    pub fn winner(&self) -> WinResult {
        self.state.winner()
    }

    pub fn status(&self) -> Status {
        self.state.status(self.report_draws)
    }

    pub fn reports_draws(&self) -> bool {
        self.report_draws
    }

    /// Place the next player's mark at `index`.
    ///
    /// A refused move leaves the game exactly as it was. An accepted move
    /// made from an earlier snapshot discards the snapshots after it.
    #[instrument(skip(self), fields(game = %self.id, step = self.state.cursor()))]
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        let context = MoveContext::from_state(&self.state, index);
        let violations = self.rules.violations(&context);
        if !violations.is_empty() {
            debug!(?violations, "Move refused");
            return MoveOutcome::Rejected(violations);
        }

        let discarded = self.state.history().len() - 1 - self.state.cursor();
        if discarded > 0 {
            debug!(discarded, "Replacing future snapshots");
        }

        self.state = self.state.with_move(index);
        let played = Move {
            index,
            player: context.player,
        };

        match self.status() {
            Status::Winner { player, line } => info!(%player, ?line, "Game won"),
            Status::Draw => info!("Game drawn"),
            Status::NextPlayer(_) => debug!(?played, "Move applied"),
        }

        MoveOutcome::Applied(played)
    }

    /// Move the cursor to `step` without touching the history.
    ///
    /// Fails with [`GameError::StepOutOfRange`] and leaves the game unchanged
    /// when `step` is not a recorded snapshot.
    #[instrument(skip(self), fields(game = %self.id))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let state = self.state.at_step(step)?;

        debug!(from = self.state.cursor(), to = step, "Jumping through history");
        self.state = state;
        Ok(())
    }
}
