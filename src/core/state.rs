//! Game state as an immutable value.
//!
//! A `GameState` is the history of snapshots plus a cursor into it. Every
//! transition returns a new value; the next player is always derived from
//! the cursor, never stored.

use super::board::Board;
use super::cell::Player;
use super::error::{GameError, StateError};
use super::evaluate::{evaluate, WinResult};
use super::history::{History, Move, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the status line reports for the current snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    Winner { player: Player, line: [usize; 3] },
    /// Board full with no line. Only reported when draw reporting is on.
    Draw,
    NextPlayer(Player),
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::NextPlayer(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { player, .. } => write!(f, "Winner: {player}"),
            Self::Draw => f.write_str("Draw"),
            Self::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// History of snapshots plus the cursor selecting the current one.
///
/// Invariant: `cursor < history.len()`. Deserialization rejects values
/// that break it. New snapshots are only added through
/// [`Game::play`](crate::game::Game::play), which runs the move rules first.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::Player;
/// use tictactoe::game::Game;
///
/// let mut game = Game::new();
/// assert_eq!(game.state().next_player(), Player::X);
///
/// game.play(4);
/// let state = game.state();
/// assert_eq!(state.cursor(), 1);
/// assert_eq!(state.next_player(), Player::O);
///
/// let rewound = state.at_step(0).unwrap();
/// assert_eq!(rewound.next_player(), Player::X);
/// assert_eq!(rewound.history().len(), 2); // Future preserved
/// assert!(state.at_step(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: History,
    cursor: usize,
}

#[derive(Deserialize)]
struct RawGameState {
    history: History,
    cursor: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let len = raw.history.len();
        if raw.cursor >= len {
            return Err(StateError::CursorOutOfRange {
                cursor: raw.cursor,
                len,
            });
        }
        Ok(Self {
            history: raw.history,
            cursor: raw.cursor,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: one empty snapshot, cursor at 0.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Snapshot under the cursor.
    pub fn snapshot(&self) -> &Snapshot {
        &self.history.snapshots()[self.cursor]
    }

    /// Board under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshot().board
    }

    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    pub fn winner(&self) -> WinResult {
        evaluate(self.current())
    }

    /// Status of the current snapshot.
    ///
    /// With `report_draws` off a full board without a winner still reports
    /// the next player, matching the classic behavior.
    pub fn status(&self, report_draws: bool) -> Status {
        match self.winner() {
            WinResult::Winner { player, line } => Status::Winner { player, line },
            WinResult::NoWinner if report_draws && self.current().is_full() => Status::Draw,
            WinResult::NoWinner => Status::NextPlayer(self.next_player()),
        }
    }

    /// Place the next player's mark at `index`, dropping any snapshots after
    /// the cursor first.
    ///
    /// Does not check admissibility; callers run the move rules before
    /// applying. Panics if `index` is off the board.
    pub(crate) fn with_move(&self, index: usize) -> Self {
        let played = Move {
            index,
            player: self.next_player(),
        };
        let snapshot = Snapshot::after(self.current(), played);
        let history = self.history.truncated(self.cursor).record(snapshot);
        let cursor = history.len() - 1;
        Self { history, cursor }
    }

    /// Same history with the cursor moved to `step`. Nothing is truncated.
    ///
    /// Fails with [`GameError::StepOutOfRange`] when `step` is not a valid
    /// history index.
    pub fn at_step(&self, step: usize) -> Result<Self, GameError> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::StepOutOfRange { step, len });
        }
        Ok(Self {
            history: self.history.clone(),
            cursor: step,
        })
    }
}
