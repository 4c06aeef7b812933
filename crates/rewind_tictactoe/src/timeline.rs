//! Rewindable move timeline: ordered board snapshots plus a cursor.
//!
//! The timeline owns all game progression. Every move derives a fresh
//! snapshot by copy-with-one-square-set, so earlier snapshots are never
//! mutated. Jumping moves only the cursor; playing from a non-latest
//! snapshot discards the abandoned future before appending.

use crate::invariants;
use crate::position::Position;
use crate::rules::{self, GameStatus};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a move request was rejected.
///
/// A rejected move leaves the timeline untouched. Interactive callers
/// drop the error without surfacing a message; the only user-visible
/// feedback is the unchanged status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board at the cursor already has a winning line.
    #[display("the game is already decided")]
    GameDecided,
}

impl std::error::Error for MoveError {}

/// One row of the rendered move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    index: usize,
    latest: bool,
}

impl MoveEntry {
    /// Snapshot index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True for the entry of the latest move.
    ///
    /// The latest entry is rendered as plain status text rather than a
    /// jump control.
    pub fn is_latest(&self) -> bool {
        self.latest
    }

    /// Label text for this entry.
    pub fn label(&self) -> String {
        if self.latest {
            format!("You are at move #{}", self.index)
        } else if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

/// Ordered board snapshots with a cursor selecting the displayed state.
///
/// Snapshot 0 is the empty board; snapshot `k` is the result of one move
/// applied to snapshot `k - 1`. The timeline never caches derived state:
/// turn owner, status, and the move list are recomputed from the
/// snapshots and cursor on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
    pub(crate) newest_first: bool,
}

impl Timeline {
    /// Creates a timeline holding the initial empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
            newest_first: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived state - recomputed on every read
    // ─────────────────────────────────────────────────────────────

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Player who moves from the current snapshot.
    ///
    /// Turn order is a pure function of the cursor: X on even move
    /// numbers, O on odd ones. It is never stored.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current(), self.to_move())
    }

    /// Number of moves played up to the last snapshot.
    pub fn move_count(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Index of the snapshot selected for display.
    pub fn current_move(&self) -> usize {
        self.cursor
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    // ─────────────────────────────────────────────────────────────
    //  Progression
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at `position`.
    ///
    /// The next snapshot is derived by copying the current board and
    /// setting one square. Playing from a non-latest snapshot discards
    /// every later snapshot first; on success the cursor points at the
    /// appended snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the timeline untouched, if the board at
    /// the cursor already has a winning line or the target square is
    /// occupied. A full drawn board rejects every position as occupied.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if rules::winning_line(self.current()).is_some() {
            return Err(MoveError::GameDecided);
        }
        if !self.current().is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let mut next = self.current().clone();
        next.set(position, Square::Occupied(self.to_move()));

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug!(cursor = self.cursor, "Snapshot appended");
        invariants::assert_invariants(self);

        Ok(self.status())
    }

    /// Moves the cursor to `index` without touching the snapshots.
    ///
    /// Navigation alone never truncates; truncation only happens on the
    /// next [`Timeline::play`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers obtain indices from
    /// this timeline's own move list, so an out-of-range index is a
    /// programming error rather than a recoverable game condition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "jump target {index} out of range"
        );
        self.cursor = index;
        debug!(cursor = self.cursor, "Cursor moved");
    }

    /// Builds a timeline by playing each position in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move, including a move played after
    /// the game is decided.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for &position in moves {
            timeline.play(position)?;
        }
        Ok(timeline)
    }

    // ─────────────────────────────────────────────────────────────
    //  Move list
    // ─────────────────────────────────────────────────────────────

    /// Flips the presentation order of the move list.
    ///
    /// Ordering is display-only state; it never affects the snapshots
    /// or the cursor.
    pub fn toggle_order(&mut self) {
        self.newest_first = !self.newest_first;
    }

    /// True when the move list is rendered newest first.
    pub fn newest_first(&self) -> bool {
        self.newest_first
    }

    /// Rows for the rendered move list, honoring the order flag.
    pub fn entries(&self) -> Vec<MoveEntry> {
        let latest = self.move_count();
        let mut rows: Vec<MoveEntry> = (0..=latest)
            .map(|index| MoveEntry {
                index,
                latest: index == latest,
            })
            .collect();
        if self.newest_first {
            rows.reverse();
        }
        rows
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
