//! CLI commands

pub mod play;
pub mod request;
