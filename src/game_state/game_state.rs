//! The search-facing state of a game.
//!
//! `GameState` is a small `Copy` value holding exactly what move generation
//! needs: the board, the side to move, castling rights and the en-passant
//! target. Applying a move produces a new value; the old one stays valid,
//! which is what undo and search backtracking rely on.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::moves::move_descriptions::Move;
use crate::utils::fen::{generate_fen, parse_fen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move, no rights. Used to build test positions.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
        }
    }

    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_square: None,
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn is_starting_position(&self) -> bool {
        *self == Self::new_game()
    }

    /// Applies `mv` without any legality check and flips the side to move.
    /// Returns the new state and whatever piece was captured.
    pub fn apply(&self, mv: Move) -> (GameState, Option<Piece>) {
        let applied = apply_move_to_board(
            &self.board,
            mv,
            self.castling_rights,
            self.en_passant_square,
        );
        let next = GameState {
            board: applied.board,
            side_to_move: self.side_to_move.opposite(),
            castling_rights: applied.castling_rights,
            en_passant_square: applied.en_passant_square,
        };
        (next, applied.captured)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn apply_leaves_the_original_untouched() {
        let start = GameState::new_game();
        let (next, captured) = start.apply(Move::new(52, 36));
        assert_eq!(captured, None);
        assert_eq!(next.side_to_move, Color::Black);
        assert_eq!(next.en_passant_square, Some(44));
        assert!(start.is_starting_position());
        assert!(!next.is_starting_position());
    }
}
