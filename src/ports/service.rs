//! Game service port - the request/response contract of the external
//! authoritative game-state service

use crate::{
    Result,
    board::{BoardSnapshot, MoveReply},
};

/// The external service that owns every game rule and the authoritative board.
///
/// # Examples
///
/// ```
/// use boardsync::adapters::ScriptedGameService;
/// use boardsync::board::{BoardSnapshot, Mark};
/// use boardsync::ports::GameService;
///
/// let mut service = ScriptedGameService::new();
/// service.push_snapshot(BoardSnapshot::fresh(Mark::A));
///
/// let snapshot = service.reset()?;
/// assert!(snapshot.is_empty());
/// # Ok::<(), boardsync::Error>(())
/// ```
pub trait GameService {
    /// Ask the service to place the current player's mark at `index`.
    ///
    /// A rule violation is not an error: it comes back as
    /// [`MoveReply::Rejected`] carrying the service's message.
    ///
    /// # Errors
    ///
    /// Returns an error when the service cannot be reached or its answer
    /// cannot be understood.
    fn submit_move(&mut self, index: usize) -> Result<MoveReply>;

    /// Ask the service to start a new game and return the fresh board.
    fn reset(&mut self) -> Result<BoardSnapshot>;
}

impl<T: GameService + ?Sized> GameService for Box<T> {
    fn submit_move(&mut self, index: usize) -> Result<MoveReply> {
        (**self).submit_move(index)
    }

    fn reset(&mut self) -> Result<BoardSnapshot> {
        (**self).reset()
    }
}
