//! Play command - interactive terminal game against the service

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    adapters::TerminalView,
    app::{App, LoadPolicy},
    cli::{config::ConnectionArgs, output},
    controller::{Activation, BoardController, IgnoreReason},
    ports::GameService,
};

const HELP: &str = "Type a cell number (0-8) to move, 'r' to reset, 'h' for help, 'q' to quit.";

#[derive(Parser, Debug)]
#[command(about = "Play interactively in the terminal")]
pub struct PlayArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Keep the service's current game instead of resetting it on start
    #[arg(long)]
    pub no_reset_on_load: bool,
}

/// A line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(usize),
    Reset,
    Help,
    Quit,
    Unknown,
}

pub fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "r" | "reset" => Command::Reset,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => other
            .parse::<usize>()
            .map(Command::Cell)
            .unwrap_or(Command::Unknown),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    output::init_tracing(args.connection.verbose);

    let mut config = args.connection.resolve()?;
    if args.no_reset_on_load {
        config = config.with_load_policy(LoadPolicy::Keep);
    }
    info!(url = config.base_url(), policy = ?config.load_policy, "starting session");

    let mut controller = App::new(config).into_controller(TerminalView::stdio())?;
    run(&mut controller)
}

/// Drive `controller` from its terminal until the user quits or input ends.
pub fn run<S, R, W>(controller: &mut BoardController<S, TerminalView<R, W>>) -> Result<()>
where
    S: GameService,
    R: BufRead,
    W: Write,
{
    controller.view_mut().say(HELP);
    // outcomes need no handling here: rejections were shown by the view and
    // transport failures were logged by the controller
    controller.initialize();

    while let Some(line) = controller.view_mut().prompt("> ")? {
        match parse_command(&line) {
            Command::Cell(index) => match controller.on_cell_activated(index) {
                Activation::Submitted(_) => {}
                Activation::Ignored(reason) => {
                    let hint = match reason {
                        IgnoreReason::GameOver => "The game is over. Type 'r' to play again.",
                        IgnoreReason::Occupied => "That cell is already taken.",
                        IgnoreReason::OutOfRange => "Cells are numbered 0 to 8.",
                    };
                    controller.view_mut().say(hint);
                }
            },
            Command::Reset => {
                controller.reset_game();
            }
            Command::Help => controller.view_mut().say(HELP),
            Command::Quit => break,
            Command::Unknown => controller.view_mut().say(HELP),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("4"), Command::Cell(4));
        assert_eq!(parse_command(" 12 "), Command::Cell(12));
        assert_eq!(parse_command("R"), Command::Reset);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("-1"), Command::Unknown);
        assert_eq!(parse_command(""), Command::Unknown);
    }
}
