//! In-memory game service for testing.
//!
//! Plays back queued replies and records every request it receives, so tests
//! can drive the controller without a network.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    board::{BoardSnapshot, MoveReply},
    error::Error,
    ports::GameService,
};

/// A request as seen by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRequest {
    Move(usize),
    Reset,
}

#[derive(Debug)]
enum Scripted {
    Snapshot(BoardSnapshot),
    Rejected(String),
    Unreachable(String),
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Scripted>,
    requests: Vec<ServiceRequest>,
}

/// Scripted game service.
///
/// Replies are consumed in order by whichever request comes next. All clones
/// share the same script and request log, so a test can keep a handle after
/// moving a clone into a controller.
///
/// # Examples
///
/// ```
/// use boardsync::adapters::{ScriptedGameService, ServiceRequest};
/// use boardsync::board::{BoardSnapshot, Mark, MoveReply};
/// use boardsync::ports::GameService;
///
/// let service = ScriptedGameService::new();
/// service.push_rejection("Cell already taken");
///
/// let mut handle = service.clone();
/// let reply = handle.submit_move(0)?;
/// assert!(matches!(reply, MoveReply::Rejected { .. }));
/// assert_eq!(service.requests(), vec![ServiceRequest::Move(0)]);
/// # Ok::<(), boardsync::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedGameService {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGameService {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a snapshot answer (valid for both moves and resets).
    pub fn push_snapshot(&self, snapshot: BoardSnapshot) {
        self.script().replies.push_back(Scripted::Snapshot(snapshot));
    }

    /// Queue a rule violation for the next move.
    pub fn push_rejection(&self, message: &str) {
        self.script()
            .replies
            .push_back(Scripted::Rejected(message.to_string()));
    }

    /// Queue a failure to reach the service.
    pub fn push_unreachable(&self, message: &str) {
        self.script()
            .replies
            .push_back(Scripted::Unreachable(message.to_string()));
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.script().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script().requests.len()
    }

    /// Number of queued replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script().replies.len()
    }

    fn next(&self, request: ServiceRequest) -> Result<Scripted> {
        let mut script = self.script();
        script.requests.push(request);
        script.replies.pop_front().ok_or_else(|| Error::MalformedResponse {
            operation: format!("{request:?}"),
            message: "no scripted reply left".to_string(),
        })
    }
}

fn unreachable_error(message: String) -> Error {
    Error::UnexpectedStatus {
        status: 503,
        body: message,
    }
}

impl GameService for ScriptedGameService {
    fn submit_move(&mut self, index: usize) -> Result<MoveReply> {
        match self.next(ServiceRequest::Move(index))? {
            Scripted::Snapshot(snapshot) => Ok(MoveReply::Accepted(snapshot)),
            Scripted::Rejected(message) => Ok(MoveReply::Rejected { message }),
            Scripted::Unreachable(message) => Err(unreachable_error(message)),
        }
    }

    fn reset(&mut self) -> Result<BoardSnapshot> {
        match self.next(ServiceRequest::Reset)? {
            Scripted::Snapshot(snapshot) => Ok(snapshot),
            Scripted::Rejected(message) => Err(Error::MalformedResponse {
                operation: "reset".to_string(),
                message: format!("reset cannot be rejected: {message}"),
            }),
            Scripted::Unreachable(message) => Err(unreachable_error(message)),
        }
    }
}
