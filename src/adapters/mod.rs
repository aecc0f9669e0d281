//! Adapters implementing the controller's ports.
//!
//! `HttpGameService` and `TerminalView` are what the binary runs with;
//! `ScriptedGameService` and `RecordingView` keep tests off the network and
//! off the terminal.

pub mod http_service;
pub mod recording_view;
pub mod scripted_service;
pub mod terminal_view;

pub use http_service::HttpGameService;
pub use recording_view::RecordingView;
pub use scripted_service::{ScriptedGameService, ServiceRequest};
pub use terminal_view::TerminalView;
