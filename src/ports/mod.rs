//! Ports (trait boundaries) for external dependencies.
//!
//! The controller owns these traits; adapters implement them. The game
//! service and the visual surface are both on the far side of a port, so the
//! controller can be driven entirely in memory.

pub mod service;
pub mod view;

pub use service::GameService;
pub use view::{BoardView, CellView};
