//! boardsync - terminal client for a server-held tic-tac-toe board
//!
//! The service owns the game; this client only mirrors it:
//! - `play` runs an interactive session
//! - `move` and `reset` send a single request and print the result

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boardsync")]
#[command(version, about = "Terminal client for a server-held tic-tac-toe board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (resets the service's game on start)
    Play(boardsync::cli::commands::play::PlayArgs),

    /// Send one move in a new session and print the resulting board
    ///
    /// Cookies are not kept between runs, so a service that keeps one game
    /// per session cookie plays this move on a fresh, empty board. Use `play`
    /// to make several moves in the same game.
    Move(boardsync::cli::commands::request::MoveArgs),

    /// Reset the service's game and print the empty board
    Reset(boardsync::cli::commands::request::ResetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => boardsync::cli::commands::play::execute(args),
        Commands::Move(args) => boardsync::cli::commands::request::execute_move(args),
        Commands::Reset(args) => boardsync::cli::commands::request::execute_reset(args),
    }
}
