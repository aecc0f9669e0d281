//! JSON shapes exchanged with the game service

use serde::{Deserialize, Serialize};

use super::snapshot::BoardSnapshot;
use crate::{Error, Result};

/// Body of `POST /move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub index: usize,
}

/// Snapshot exactly as it appears on the wire, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotWire {
    pub board: Vec<String>,
    pub current_player: String,
    #[serde(default)]
    pub winner: Option<String>,
    pub game_over: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ErrorStatus {
    Error,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    status: ErrorStatus,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplyWire {
    Rejected(ErrorBody),
    Snapshot(SnapshotWire),
}

/// The service's answer to a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReply {
    Accepted(BoardSnapshot),
    Rejected { message: String },
}

/// Parse the body of a `/move` response.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the body is neither an error
/// object nor a snapshot, and the snapshot validation errors when the
/// snapshot's fields are out of shape.
pub fn parse_move_reply(body: &str) -> Result<MoveReply> {
    let reply: ReplyWire = serde_json::from_str(body).map_err(|e| Error::MalformedResponse {
        operation: "move".to_string(),
        message: e.to_string(),
    })?;

    match reply {
        ReplyWire::Rejected(error) => Ok(MoveReply::Rejected {
            message: error.message,
        }),
        ReplyWire::Snapshot(wire) => BoardSnapshot::from_wire(wire).map(MoveReply::Accepted),
    }
}

/// Parse the body of a `/reset` response.
pub fn parse_snapshot(body: &str, operation: &str) -> Result<BoardSnapshot> {
    let wire: SnapshotWire = serde_json::from_str(body).map_err(|e| Error::MalformedResponse {
        operation: operation.to_string(),
        message: e.to_string(),
    })?;
    BoardSnapshot::from_wire(wire)
}
