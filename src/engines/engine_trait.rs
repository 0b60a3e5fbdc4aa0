//! Engine abstraction used by the game session and the terminal driver.
//!
//! An engine takes a snapshot of the game and returns its chosen move. It owns
//! no reference to the session, so it can be moved onto a worker thread.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::search::minimax::SearchResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Plies to search. Engines fall back to their own default when unset.
    pub depth: Option<u8>,
}

impl GoParams {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth: Some(depth) }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Returns `ChessError::NoLegalMoves` when the side to move has no move,
    /// which callers treat as the end of the game.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<SearchResult>;
}
