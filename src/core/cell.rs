//! Players and cell occupancy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides. X always opens the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player whose turn it is after `step` moves have been made.
    ///
    /// ```rust
    /// use tictactoe::core::Player;
    ///
    /// assert_eq!(Player::for_step(0), Player::X);
    /// assert_eq!(Player::for_step(3), Player::O);
    /// ```
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn mark(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mark())
    }
}

/// Occupancy of a single board position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::X => Some(Player::X),
            Self::O => Some(Player::O),
        }
    }

    /// Mark shown for this cell; blank when empty.
    pub fn mark(self) -> &'static str {
        self.player().map_or("", Player::mark)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Self::X,
            Player::O => Self::O,
        }
    }
}
