//! Integration tests for wiring the client through the app container.

mod common;

use std::time::Duration;

use boardsync::{
    Activation, BoardSnapshot, Mark, Outcome,
    adapters::{RecordingView, ScriptedGameService, ServiceRequest},
    app::{App, ClientConfig, LoadPolicy},
};
use common::board;

#[test]
fn test_app_with_scripted_service() {
    let service = ScriptedGameService::new();
    service.push_snapshot(BoardSnapshot::fresh(Mark::A));
    service.push_snapshot(board("A........", Mark::B));

    let view = RecordingView::new();
    let app = App::for_testing().with_service(service.clone()).build();
    let mut controller = app.into_controller(view.clone()).unwrap();

    controller.initialize();
    controller.on_cell_activated(0);

    assert_eq!(
        service.requests(),
        vec![ServiceRequest::Reset, ServiceRequest::Move(0)]
    );
    assert_eq!(view.status(), "Current Player: B");
}

#[test]
fn test_config_load_policy_is_honoured() {
    let service = ScriptedGameService::new();
    let app = App::for_testing()
        .with_config(ClientConfig::default().with_load_policy(LoadPolicy::Keep))
        .with_service(service.clone())
        .build();
    let mut controller = app.into_controller(RecordingView::new()).unwrap();

    assert!(controller.initialize().is_none());
    assert_eq!(service.request_count(), 0);
}

#[test]
fn test_unreachable_http_service_is_a_silent_transport_failure() {
    // nothing listens on port 9 of the loopback interface
    let config =
        ClientConfig::new("http://127.0.0.1:9").with_request_timeout(Duration::from_secs(5));
    let view = RecordingView::new();
    let mut controller = App::new(config).into_controller(view.clone()).unwrap();

    let outcome = controller.initialize();
    match outcome {
        Some(Outcome::TransportFailed(err)) => assert!(err.is_transport()),
        other => panic!("expected a transport failure, got {other:?}"),
    }

    assert!(view.notifications().is_empty());
    assert_eq!(view.paint_count(), 0);
    assert!(controller.snapshot().is_none());

    let activation = controller.on_cell_activated(4);
    assert!(matches!(
        activation,
        Activation::Submitted(Outcome::TransportFailed(_))
    ));
    assert!(view.notifications().is_empty());
}
