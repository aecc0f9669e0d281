//! One-shot commands - send a single move or reset and print the board
//!
//! Each invocation is a fresh client, so a service that keys games by session
//! cookie will see a new session every time.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    adapters::TerminalView,
    app::App,
    cli::{config::ConnectionArgs, output},
    controller::Outcome,
};

#[derive(Parser, Debug)]
#[command(
    about = "Place the current player's mark on one cell, in a new session",
    long_about = "Place the current player's mark on one cell, in a new session.\n\n\
                  Cookies are not kept between runs. A service that keeps one game per \
                  session cookie therefore plays this move on a fresh, empty board. Use \
                  `play` to make several moves in the same game."
)]
pub struct MoveArgs {
    /// Cell index, 0-8 in reading order
    #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
    pub index: u8,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Parser, Debug)]
#[command(about = "Start a new game on the service")]
pub struct ResetArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub fn execute_move(args: MoveArgs) -> Result<()> {
    output::init_tracing(args.connection.verbose);
    let config = args.connection.resolve()?;

    // nothing to acknowledge in a one-shot run, so notifications never block
    let view = TerminalView::new(io::empty(), io::stdout());
    let mut controller = App::new(config).into_controller(view)?;

    let index = usize::from(args.index);
    let outcome = output::with_spinner("Sending move", || controller.submit_move(index));
    finish(outcome, "move")
}

pub fn execute_reset(args: ResetArgs) -> Result<()> {
    output::init_tracing(args.connection.verbose);
    let config = args.connection.resolve()?;

    let view = TerminalView::new(io::empty(), io::stdout());
    let mut controller = App::new(config).into_controller(view)?;

    let outcome = output::with_spinner("Resetting game", || controller.reset_game());
    finish(outcome, "reset")
}

fn finish(outcome: Outcome, operation: &str) -> Result<()> {
    match outcome {
        Outcome::Rendered => Ok(()),
        Outcome::Rejected { message } => {
            Err(Error::InvalidMove { message }).with_context(|| format!("{operation} rejected"))
        }
        Outcome::TransportFailed(err) => Err(err).with_context(|| format!("{operation} failed")),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_move_help_mentions_fresh_session() {
        let command = MoveArgs::command();
        let about = command.get_about().unwrap().to_string();
        assert!(about.contains("new session"));

        let long_about = command.get_long_about().unwrap().to_string();
        assert!(long_about.contains("Cookies are not kept between runs"));
        assert!(long_about.contains("`play`"));
    }

    #[test]
    fn test_finish_maps_outcomes() {
        assert!(finish(Outcome::Rendered, "move").is_ok());

        let err = finish(
            Outcome::Rejected {
                message: "Cell already taken".to_string(),
            },
            "move",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "move rejected");
        assert_eq!(
            format!("{err:#}"),
            "move rejected: invalid move: Cell already taken"
        );
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidMove { message }) if message == "Cell already taken"
        ));

        let err = finish(
            Outcome::TransportFailed(Error::UnexpectedStatus {
                status: 503,
                body: String::new(),
            }),
            "reset",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "reset failed");
        assert!(err.downcast_ref::<Error>().is_some_and(Error::is_transport));
    }
}
