//! Presentation-neutral projection of a game.
//!
//! A [`GameView`] is recomputed from a [`Game`] after every transition and
//! holds no state of its own. Frontends render it directly or consume it as
//! JSON.

use crate::core::{Move, Status};
use crate::game::Game;
use serde::Serialize;
use uuid::Uuid;

/// One board position as it should be shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    /// `"X"`, `"O"`, or empty
    pub mark: &'static str,
    /// Part of the winning line
    pub winning: bool,
}

/// One clickable history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub step: usize,
    pub label: String,
    /// The entry under the cursor
    pub selected: bool,
    pub played: Option<Move>,
}

/// Everything a frontend needs to draw the game.
///
/// # Example
///
/// ```rust
/// use tictactoe::game::GameBuilder;
/// use tictactoe::view::GameView;
///
/// let game = GameBuilder::new().moves([4]).build().unwrap();
/// let view = GameView::project(&game);
///
/// assert_eq!(view.status, "Next player: O");
/// assert_eq!(view.cells[4].mark, "X");
/// assert_eq!(view.moves[1].label, "Go to move #1");
/// assert!(view.moves[1].selected);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game: Uuid,
    pub cells: Vec<CellView>,
    pub status: String,
    pub moves: Vec<HistoryEntry>,
}

impl GameView {
    pub fn project(game: &Game) -> Self {
        let status = game.status();
        let winning_line = match status {
            Status::Winner { line, .. } => Some(line),
            Status::Draw | Status::NextPlayer(_) => None,
        };

        let cells = game
            .current()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView {
                index,
                mark: cell.mark(),
                winning: winning_line.is_some_and(|line| line.contains(&index)),
            })
            .collect();

        let moves = game
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| HistoryEntry {
                step,
                label: entry_label(step),
                selected: step == game.cursor(),
                played: snapshot.played,
            })
            .collect();

        Self {
            game: game.id(),
            cells,
            status: status.to_string(),
            moves,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn entry_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn fresh_game_projects_blank_board() {
        let game = Game::new();
        let view = GameView::project(&game);

        assert_eq!(view.cells.len(), 9);
        assert!(view.cells.iter().all(|c| c.mark.is_empty() && !c.winning));
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.moves[0].label, "Go to game start");
        assert!(view.moves[0].selected);
        assert_eq!(view.game, game.id());
    }

    #[test]
    fn winning_cells_are_flagged() {
        let game = GameBuilder::new().moves([0, 4, 1, 3, 2]).build().unwrap();
        let view = GameView::project(&game);

        let winning: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.index)
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert_eq!(view.status, "Winner: X");
    }

    #[test]
    fn selected_entry_follows_cursor() {
        let mut game = GameBuilder::new().moves([0, 4, 1]).build().unwrap();
        game.jump_to(1).unwrap();
        let view = GameView::project(&game);

        let selected: Vec<usize> = view
            .moves
            .iter()
            .filter(|m| m.selected)
            .map(|m| m.step)
            .collect();
        assert_eq!(selected, vec![1]);
        assert_eq!(view.moves.len(), 4);
        assert_eq!(view.moves[3].label, "Go to move #3");
        assert_eq!(view.cells[4].mark, "");
    }

    #[test]
    fn draw_is_shown() {
        let game = GameBuilder::new()
            .moves([0, 1, 2, 4, 3, 5, 7, 6, 8])
            .build()
            .unwrap();
        let view = GameView::project(&game);

        assert_eq!(view.status, "Draw");
        assert!(view.cells.iter().all(|c| !c.winning));
    }

    #[test]
    fn view_serializes_to_json() {
        let game = GameBuilder::new().moves([4]).build().unwrap();
        let json = GameView::project(&game).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["cells"][4]["mark"], "X");
        assert_eq!(value["moves"][1]["played"]["index"], 4);
        assert_eq!(value["moves"][1]["played"]["player"], "X");
    }
}
