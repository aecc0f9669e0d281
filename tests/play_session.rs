//! Integration tests for the interactive terminal session.

mod common;

use std::io::Cursor;

use boardsync::{
    BoardController, BoardSnapshot, Mark,
    adapters::{ScriptedGameService, ServiceRequest, TerminalView},
    cli::commands::play::run,
};
use common::board;

fn session(
    input: &str,
    service: &ScriptedGameService,
) -> BoardController<ScriptedGameService, TerminalView<Cursor<Vec<u8>>, Vec<u8>>> {
    let view = TerminalView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    BoardController::new(service.clone(), view)
}

fn printed(
    controller: &BoardController<ScriptedGameService, TerminalView<Cursor<Vec<u8>>, Vec<u8>>>,
) -> String {
    String::from_utf8(controller.view().output().clone()).unwrap()
}

#[test]
fn test_session_moves_and_quits() {
    let service = ScriptedGameService::new();
    service.push_snapshot(BoardSnapshot::fresh(Mark::A));
    service.push_snapshot(board("....A....", Mark::B));

    let mut controller = session("4\nq\n0\n", &service);
    run(&mut controller).unwrap();

    // input after `q` is never read
    assert_eq!(
        service.requests(),
        vec![ServiceRequest::Reset, ServiceRequest::Move(4)]
    );
    let out = printed(&controller);
    assert!(out.contains("Current Player: A"));
    assert!(out.contains(" 3 │ A │ 5"));
    assert!(out.contains("Current Player: B"));
}

#[test]
fn test_session_hints_for_ignored_input() {
    let service = ScriptedGameService::new();
    service.push_snapshot(board("....A....", Mark::B));

    let mut controller = session("4\n11\nnonsense\n", &service);
    run(&mut controller).unwrap();

    assert_eq!(service.requests(), vec![ServiceRequest::Reset]);
    let out = printed(&controller);
    assert!(out.contains("That cell is already taken."));
    assert!(out.contains("Cells are numbered 0 to 8."));
}

#[test]
fn test_session_reset_and_rejection() {
    let service = ScriptedGameService::new();
    service.push_snapshot(BoardSnapshot::fresh(Mark::A));
    service.push_rejection("Game is over");
    service.push_snapshot(BoardSnapshot::fresh(Mark::A));

    // the empty line after `1` acknowledges the notification
    let mut controller = session("1\n\nr\n", &service);
    run(&mut controller).unwrap();

    assert_eq!(
        service.requests(),
        vec![
            ServiceRequest::Reset,
            ServiceRequest::Move(1),
            ServiceRequest::Reset
        ]
    );
    assert!(printed(&controller).contains("! Game is over"));
}
