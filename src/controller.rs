//! Board controller - mirrors the service's board onto a view
//!
//! The controller turns cell activations into move requests and repaints the
//! whole grid from every snapshot the service returns. It never predicts a
//! move or patches a single cell: what is on screen is always a pure function
//! of the last snapshot received.
//!
//! # Examples
//!
//! ```
//! use boardsync::adapters::{RecordingView, ScriptedGameService};
//! use boardsync::board::{BoardSnapshot, Mark};
//! use boardsync::controller::{Activation, BoardController, Outcome};
//!
//! let service = ScriptedGameService::new();
//! service.push_snapshot(BoardSnapshot::fresh(Mark::A));
//! service.push_snapshot(BoardSnapshot::fresh(Mark::B).with_mark(4, Mark::A));
//!
//! let view = RecordingView::new();
//! let mut controller = BoardController::new(service.clone(), view.clone());
//!
//! controller.initialize();
//! assert_eq!(view.status(), "Current Player: A");
//!
//! let activation = controller.on_cell_activated(4);
//! assert!(matches!(activation, Activation::Submitted(Outcome::Rendered)));
//! assert_eq!(view.status(), "Current Player: B");
//! ```

use tracing::{debug, error, info, warn};

use crate::{
    app::LoadPolicy,
    board::{BOARD_SIZE, BoardSnapshot, MoveReply, Winner},
    ports::{BoardView, CellView, GameService},
};

/// Status line for a snapshot.
///
/// Draws and wins take precedence over whose turn it is.
pub fn status_line(snapshot: &BoardSnapshot) -> String {
    match snapshot.winner {
        Winner::Draw => "It's a Draw!".to_string(),
        Winner::Mark(mark) => format!("Player {mark} Wins!"),
        Winner::None => format!("Current Player: {}", snapshot.current_player),
    }
}

/// Why an activation was dropped without contacting the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    GameOver,
    Occupied,
    OutOfRange,
}

/// What happened to a request that was handed to the service
#[derive(Debug)]
pub enum Outcome {
    /// The service answered with a snapshot and the view was repainted.
    Rendered,
    /// The service refused the move; the user was notified.
    Rejected { message: String },
    /// The service could not be reached or understood; the error was logged.
    TransportFailed(crate::Error),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }
}

/// Result of a cell activation
#[derive(Debug)]
pub enum Activation {
    Ignored(IgnoreReason),
    Submitted(Outcome),
}

/// Client-side state derived from the service's answers
#[derive(Debug, Default)]
struct ControllerState {
    game_over: bool,
    snapshot: Option<BoardSnapshot>,
}

/// Bridges user input and the authoritative game service.
///
/// Every request blocks the `&mut self` call that issued it until the service
/// answers or fails, so a second move or reset cannot start while one is
/// outstanding.
pub struct BoardController<S, V> {
    service: S,
    view: V,
    load_policy: LoadPolicy,
    state: ControllerState,
}

impl<S: GameService, V: BoardView> BoardController<S, V> {
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view,
            load_policy: LoadPolicy::default(),
            state: ControllerState::default(),
        }
    }

    /// Choose what happens on startup (defaults to [`LoadPolicy::Reset`]).
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Bring the view in line with the service on startup.
    ///
    /// The service keeps its board across client restarts while the client
    /// starts blank, so by default this forces a reset. That throws away any
    /// game the service had in progress. With [`LoadPolicy::Keep`] nothing is
    /// requested, a blank grid is painted and `None` is returned; the first
    /// move then reveals the service's board.
    pub fn initialize(&mut self) -> Option<Outcome> {
        match self.load_policy {
            LoadPolicy::Reset => {
                info!("resetting game on load");
                Some(self.reset_game())
            }
            LoadPolicy::Keep => {
                debug!("keeping service state on load");
                for index in 0..BOARD_SIZE {
                    self.view.paint_cell(index, &CellView::default());
                }
                self.view.set_status("");
                self.view.present();
                None
            }
        }
    }

    /// Handle a user selecting the cell at `index`.
    ///
    /// Activations on a finished game, on an occupied cell or outside the
    /// grid never reach the service.
    pub fn on_cell_activated(&mut self, index: usize) -> Activation {
        let reason = if index >= BOARD_SIZE {
            Some(IgnoreReason::OutOfRange)
        } else if self.state.game_over {
            Some(IgnoreReason::GameOver)
        } else if self
            .state
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.is_occupied(index))
        {
            Some(IgnoreReason::Occupied)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(index, ?reason, "ignoring cell activation");
                Activation::Ignored(reason)
            }
            None => Activation::Submitted(self.submit_move(index)),
        }
    }

    /// Send a move to the service and apply its answer.
    ///
    /// Unlike [`Self::on_cell_activated`] this performs no local checks; the
    /// service is the judge of whether the move is legal.
    pub fn submit_move(&mut self, index: usize) -> Outcome {
        debug!(index, "submitting move");
        match self.service.submit_move(index) {
            Ok(MoveReply::Accepted(snapshot)) => {
                self.render(snapshot);
                Outcome::Rendered
            }
            Ok(MoveReply::Rejected { message }) => {
                warn!(index, %message, "move rejected by service");
                self.view.notify(&message);
                Outcome::Rejected { message }
            }
            Err(err) => {
                error!(index, error = %err, "move request failed");
                Outcome::TransportFailed(err)
            }
        }
    }

    /// Ask the service for a new game and render it.
    pub fn reset_game(&mut self) -> Outcome {
        match self.service.reset() {
            Ok(snapshot) => {
                self.render(snapshot);
                Outcome::Rendered
            }
            Err(err) => {
                error!(error = %err, "reset request failed");
                Outcome::TransportFailed(err)
            }
        }
    }

    /// Repaint every cell and the status line from `snapshot`, then make it
    /// the snapshot all later local checks are made against.
    pub fn render(&mut self, snapshot: BoardSnapshot) {
        for (index, cell) in snapshot.board.iter().enumerate() {
            self.view.paint_cell(index, &CellView::from(*cell));
        }
        self.view.set_status(&status_line(&snapshot));
        self.view.present();

        if snapshot.game_over && !self.state.game_over {
            info!(winner = ?snapshot.winner, "game over");
        }
        self.state.game_over = snapshot.game_over;
        self.state.snapshot = Some(snapshot);
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Last snapshot received from the service, if any.
    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.state.snapshot.as_ref()
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_status_for_each_winner() {
        let fresh = BoardSnapshot::fresh(Mark::A);
        assert_eq!(status_line(&fresh), "Current Player: A");

        let won = fresh.clone().with_winner(Winner::Mark(Mark::A));
        assert_eq!(status_line(&won), "Player A Wins!");

        let drawn = fresh.with_winner(Winner::Draw);
        assert_eq!(status_line(&drawn), "It's a Draw!");
    }

    #[test]
    fn test_status_uses_reported_player() {
        let snapshot = BoardSnapshot::fresh(Mark::parse("O").unwrap());
        assert_eq!(status_line(&snapshot), "Current Player: O");
    }

    #[test]
    fn test_outcome_is_rendered() {
        assert!(Outcome::Rendered.is_rendered());
        let rejected = Outcome::Rejected {
            message: "Cell already taken".to_string(),
        };
        assert!(!rejected.is_rendered());
    }
}
