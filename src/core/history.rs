//! Board snapshot history.
//!
//! Provides immutable tracking of every board position reached in a game,
//! following functional programming principles.

use super::board::Board;
use super::cell::Player;
use super::error::StateError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single placed mark.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    /// Cell index, row-major.
    pub index: usize,
    pub player: Player,
}

impl Move {
    pub fn row(&self) -> usize {
        self.index / 3
    }

    pub fn col(&self) -> usize {
        self.index % 3
    }
}

/// Immutable board captured after a move, or the initial empty board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    /// The move that produced this board; `None` for the game start.
    pub played: Option<Move>,
    /// When the snapshot was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Snapshot {
    /// The snapshot every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            played: None,
            recorded_at: Utc::now(),
        }
    }

    /// Snapshot produced by placing `played` on `previous`.
    pub fn after(previous: &Board, played: Move) -> Self {
        Self {
            board: previous.with_mark(played.index, played.player),
            played: Some(played),
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of snapshots. Snapshot 0 is always the empty board.
///
/// History is immutable - `record` and `truncated` return new histories,
/// leaving the receiver untouched.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{History, Move, Player, Snapshot};
///
/// let history = History::new();
/// let first = Snapshot::after(&history.latest().board, Move { index: 4, player: Player::X });
///
/// let history = history.record(first);
/// assert_eq!(history.len(), 2);
///
/// let rewound = history.truncated(0);
/// assert_eq!(rewound.len(), 1);
/// assert_eq!(history.len(), 2); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawHistory> for History {
    type Error = StateError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let first = raw.snapshots.first().ok_or(StateError::EmptyHistory)?;
        if first.board != Board::empty() {
            return Err(StateError::NotStartingEmpty);
        }
        Ok(Self {
            snapshots: raw.snapshots,
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// History holding only the initial empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Record a snapshot at the end, returning a new history.
    pub fn record(&self, snapshot: Snapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Keep snapshots `0..=last` and drop everything after, returning a new
    /// history. A `last` beyond the end keeps everything.
    pub fn truncated(&self, last: usize) -> Self {
        let keep = last.saturating_add(1).min(self.snapshots.len());
        Self {
            snapshots: self.snapshots[..keep].to_vec(),
        }
    }

    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The most recent snapshot. Never fails: history is never empty.
    pub fn latest(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Moves in the order they were played.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.snapshots.iter().filter_map(|snapshot| snapshot.played)
    }

    /// Time from the first to the last recorded snapshot.
    ///
    /// Returns `None` until at least one move has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if self.snapshots.len() < 2 {
            return None;
        }
        let first = &self.snapshots[0];
        let last = self.latest();
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }
}
