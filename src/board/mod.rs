//! Board values as reported by the game service

pub mod cell;
pub mod snapshot;
pub mod wire;

pub use cell::{BOARD_SIZE, Cell, Mark};
pub use snapshot::{BoardSnapshot, Winner};
pub use wire::{MoveReply, MoveRequest, SnapshotWire, parse_move_reply, parse_snapshot};
