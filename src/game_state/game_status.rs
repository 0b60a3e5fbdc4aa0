//! Game-end detection: checkmate, stalemate and a narrow insufficient
//! material rule (bare kings, or king and one minor piece against a king).
//! Repetition and the fifty-move rule are not tracked.

use std::fmt;

use crate::game_state::chess_rules::INSUFFICIENT_MATERIAL_MAX_PIECES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    DrawInsufficientMaterial,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "game in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner:?} wins"),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::DrawInsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

pub fn game_status(position: &Position) -> GameStatus {
    status_of(&position.state)
}

pub fn status_of(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move;
    if legal_moves_of(game_state).is_empty() {
        return if is_king_in_check(&game_state.board, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }

    if has_insufficient_material(&game_state.board) {
        return GameStatus::DrawInsufficientMaterial;
    }

    GameStatus::Ongoing
}

/// Only bare kings and a single knight or bishop beside the kings count.
/// Other dead positions (two knights, same-colored bishops) are left alone.
pub fn has_insufficient_material(board: &Board) -> bool {
    if board.piece_count() > INSUFFICIENT_MATERIAL_MAX_PIECES {
        return false;
    }
    let non_kings: Vec<Piece> = board
        .pieces()
        .map(|(_, piece)| piece)
        .filter(|piece| piece.kind != PieceKind::King)
        .collect();

    match non_kings.as_slice() {
        [] => true,
        [single] => matches!(single.kind, PieceKind::Knight | PieceKind::Bishop),
        _ => false,
    }
}
