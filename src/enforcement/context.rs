//! Context provided to move checks.

use crate::core::{Board, Cell, GameState, Player};

/// An attempted move, as seen by the rules.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveContext {
    /// Board under the cursor when the move was attempted
    pub board: Board,
    pub index: usize,
    /// Player who would place the mark
    pub player: Player,
    /// Cursor position the move is made from
    pub step: usize,
}

impl MoveContext {
    /// Describe placing the next player's mark at `index` from `state`.
    pub fn from_state(state: &GameState, index: usize) -> Self {
        Self {
            board: *state.current(),
            index,
            player: state.next_player(),
            step: state.cursor(),
        }
    }

    /// Current occupant of the target cell; `None` when off the board.
    pub fn target(&self) -> Option<Cell> {
        self.board.get(self.index)
    }
}
