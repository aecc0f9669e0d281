//! CLI infrastructure for the boardsync client
//!
//! This module provides the command-line interface for playing against a
//! game service interactively or issuing single requests.

pub mod commands;
pub mod config;
pub mod output;
