//! boardsync: a thin client for a server-held two-player grid game
//!
//! This crate provides:
//! - Board values as reported by the game service (marks, cells, snapshots)
//! - Ports for the game service and the visual surface
//! - HTTP and terminal adapters, plus in-memory ones for tests
//! - The board controller that mirrors the service's board onto a view
//! - A command-line client

pub mod adapters;
pub mod app;
pub mod board;
pub mod cli;
pub mod controller;
pub mod error;
pub mod ports;

pub use board::{BoardSnapshot, Cell, Mark, Winner};
pub use controller::{Activation, BoardController, IgnoreReason, Outcome, status_line};
pub use error::{Error, Result};
