//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type of the crate. Every variant is
//! recoverable at the session boundary: a UI re-prompts or ignores the input.
//! Malformed positions (missing king, out-of-range squares) are a caller
//! contract violation and are not detected here.

use thiserror::Error;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_status::GameStatus;
use crate::moves::move_descriptions::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not among the legal moves of the position. State is left
    /// untouched.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// The side to move has no legal moves; drives game-end detection.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Promotion to a pawn or king was requested.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionChoice(PieceKind),

    /// A pawn reached the last rank but no promotion piece was chosen.
    #[error("a promotion piece must be chosen")]
    PromotionChoiceRequired,

    /// Human input arrived while the computer is searching.
    #[error("the engine is still thinking")]
    EngineBusy,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("the game is over: {0}")]
    GameOver(GameStatus),

    /// `move_selected_to` was called with no piece selected.
    #[error("no piece is selected")]
    NoPieceSelected,

    #[error("not enough moves to undo")]
    NothingToUndo,

    /// `finish_engine_turn` was called without a matching `begin_engine_turn`.
    #[error("no engine turn is pending")]
    NoEngineTurnPending,

    /// The engine came back without a move although the game is not over,
    /// e.g. its worker died. The engine turn can be started again.
    #[error("the engine failed to produce a move")]
    EngineFailed,

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
