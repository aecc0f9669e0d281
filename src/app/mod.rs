//! Application layer: configuration and wiring.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  App (container)                             │
//! │    ClientConfig ──► HttpGameService          │
//! │                        │ GameService port    │
//! │                        ▼                     │
//! │              BoardController ◄── BoardView   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production
//!
//! ```no_run
//! use boardsync::adapters::TerminalView;
//! use boardsync::app::{App, ClientConfig};
//!
//! let app = App::new(ClientConfig::new("http://127.0.0.1:5000"));
//! let mut controller = app.into_controller(TerminalView::stdio())?;
//! controller.initialize();
//! # Ok::<(), boardsync::Error>(())
//! ```
//!
//! ## Testing
//!
//! ```
//! use boardsync::adapters::{RecordingView, ScriptedGameService};
//! use boardsync::app::App;
//!
//! let app = App::for_testing()
//!     .with_service(ScriptedGameService::new())
//!     .build();
//! let controller = app.into_controller(RecordingView::new())?;
//! # Ok::<(), boardsync::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{ClientConfig, DEFAULT_BASE_URL, LoadPolicy};
pub use container::{App, AppBuilder, Controller};
