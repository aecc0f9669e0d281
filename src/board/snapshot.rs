//! Full board snapshots

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    cell::{BOARD_SIZE, Cell, Mark},
    wire::SnapshotWire,
};
use crate::{Error, Result};

/// Wire token for a drawn game
pub const DRAW_TOKEN: &str = "Draw";

/// Result of a game as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    None,
    Mark(Mark),
    Draw,
}

impl Winner {
    /// Parse the wire winner field. `null`, a missing field and `""` all mean
    /// no winner yet.
    pub fn from_wire(value: Option<&str>) -> Result<Winner> {
        match value {
            None | Some("") => Ok(Winner::None),
            Some(DRAW_TOKEN) => Ok(Winner::Draw),
            Some(symbol) => Mark::parse(symbol).map(Winner::Mark),
        }
    }

    pub fn to_wire(self) -> String {
        match self {
            Winner::None => String::new(),
            Winner::Mark(mark) => mark.to_string(),
            Winner::Draw => DRAW_TOKEN.to_string(),
        }
    }
}

/// The authoritative state of one game at one moment.
///
/// Snapshots always arrive whole from the service and are replaced, never
/// merged, on the next request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotWire", into = "SnapshotWire")]
pub struct BoardSnapshot {
    pub board: [Cell; BOARD_SIZE],
    pub current_player: Mark,
    pub winner: Winner,
    pub game_over: bool,
}

impl BoardSnapshot {
    /// An empty board with `first` to move.
    pub fn fresh(first: Mark) -> Self {
        Self {
            board: [Cell::Empty; BOARD_SIZE],
            current_player: first,
            winner: Winner::None,
            game_over: false,
        }
    }

    /// Build a snapshot from its wire form, validating every field.
    pub fn from_wire(wire: SnapshotWire) -> Result<Self> {
        if wire.board.len() != BOARD_SIZE {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: wire.board.len(),
            });
        }

        let mut board = [Cell::Empty; BOARD_SIZE];
        for (slot, value) in board.iter_mut().zip(&wire.board) {
            *slot = Cell::from_wire(value)?;
        }

        Ok(Self {
            board,
            current_player: Mark::parse(&wire.current_player)?,
            winner: Winner::from_wire(wire.winner.as_deref())?,
            game_over: wire.game_over,
        })
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get(index).copied()
    }

    /// Whether `index` holds a mark. Out-of-range indices are never occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.cell(index).is_some_and(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|cell| cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.board.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Place `mark` at `index`. Used to build fixtures; the client itself
    /// never edits a snapshot it received.
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        if let Some(slot) = self.board.get_mut(index) {
            *slot = Cell::Marked(mark);
        }
        self
    }

    pub fn with_current_player(mut self, mark: Mark) -> Self {
        self.current_player = mark;
        self
    }

    pub fn with_winner(mut self, winner: Winner) -> Self {
        self.winner = winner;
        self.game_over = winner != Winner::None || self.game_over;
        self
    }
}

impl TryFrom<SnapshotWire> for BoardSnapshot {
    type Error = Error;

    fn try_from(wire: SnapshotWire) -> Result<Self> {
        BoardSnapshot::from_wire(wire)
    }
}

impl From<BoardSnapshot> for SnapshotWire {
    fn from(snapshot: BoardSnapshot) -> Self {
        SnapshotWire {
            board: snapshot.board.iter().map(|cell| cell.label()).collect(),
            current_player: snapshot.current_player.to_string(),
            winner: Some(snapshot.winner.to_wire()),
            game_over: snapshot.game_over,
        }
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.board.iter().enumerate() {
            let c = cell.mark().map(Mark::symbol).unwrap_or('.');
            write!(f, "{c}")?;
            if (i + 1).is_multiple_of(3) && i < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
