//! The 3×3 board and its winning lines.

use super::cell::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positions on the board.
pub const CELL_COUNT: usize = 9;

/// A winning triple of cell indices.
pub type Line = [usize; 3];

/// All winning lines in scan order: rows top to bottom, columns left to
/// right, then the two diagonals (top-left first).
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3×3 board. Index = 3·row + col.
///
/// Boards are plain values: placing a mark returns a new board and leaves
/// the original untouched.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{Board, Cell, Player};
///
/// let empty = Board::empty();
/// let board = empty.with_mark(4, Player::X);
///
/// assert_eq!(board.get(4), Some(Cell::X));
/// assert_eq!(empty.get(4), Some(Cell::Empty)); // Original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The all-empty starting board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board directly from its cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Copy of this board with `player`'s mark at `index`.
    ///
    /// Overwrites whatever was there; admissibility is checked by the move
    /// rules, not here.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::from(player);
        Self { cells }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let marks: Vec<&str> = chunk
                .iter()
                .map(|cell| match cell.player() {
                    Some(player) => player.mark(),
                    None => ".",
                })
                .collect();
            write!(f, "{}", marks.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_nine_empty_cells() {
        let board = Board::empty();
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert_eq!(Board::empty().get(9), None);
    }

    #[test]
    fn with_mark_is_immutable() {
        let board = Board::empty();
        let marked = board.with_mark(0, Player::O);

        assert_eq!(marked.get(0), Some(Cell::O));
        assert_eq!(board.get(0), Some(Cell::Empty));
    }

    #[test]
    fn count_tracks_each_player() {
        let board = Board::empty()
            .with_mark(0, Player::X)
            .with_mark(4, Player::O)
            .with_mark(8, Player::X);

        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn lines_cover_every_cell() {
        for index in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.contains(&index)));
        }
    }

    #[test]
    fn display_renders_three_rows() {
        let board = Board::empty()
            .with_mark(0, Player::X)
            .with_mark(4, Player::O);

        assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
    }
}
