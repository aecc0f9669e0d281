//! Common fixtures for the boardsync test suite.
#![allow(dead_code)]

use boardsync::{
    BoardController, BoardSnapshot, Mark, Winner,
    adapters::{RecordingView, ScriptedGameService},
};

/// Build a snapshot from a 9-character picture such as `"A...B...."`.
///
/// `.` is an empty cell; any other character is a mark.
pub fn board(picture: &str, current: Mark) -> BoardSnapshot {
    assert_eq!(picture.chars().count(), 9, "picture must have 9 cells");
    picture
        .chars()
        .enumerate()
        .filter(|(_, c)| *c != '.')
        .fold(BoardSnapshot::fresh(current), |snapshot, (i, c)| {
            snapshot.with_mark(i, Mark::parse(&c.to_string()).unwrap())
        })
}

/// Snapshot of a finished game.
pub fn finished(picture: &str, winner: Winner) -> BoardSnapshot {
    board(picture, Mark::A).with_winner(winner)
}

/// A controller wired to in-memory adapters, plus handles on both.
pub struct Harness {
    pub service: ScriptedGameService,
    pub view: RecordingView,
    pub controller: BoardController<ScriptedGameService, RecordingView>,
}

impl Harness {
    pub fn new() -> Self {
        let service = ScriptedGameService::new();
        let view = RecordingView::new();
        let controller = BoardController::new(service.clone(), view.clone());
        Self {
            service,
            view,
            controller,
        }
    }

    /// Harness already initialized against an empty board with A to move.
    pub fn started() -> Self {
        let mut harness = Self::new();
        harness.service.push_snapshot(BoardSnapshot::fresh(Mark::A));
        assert!(harness.controller.initialize().unwrap().is_rendered());
        harness
    }
}
