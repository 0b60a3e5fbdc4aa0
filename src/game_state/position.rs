//! Position snapshot: the search-facing `GameState` plus the presentation
//! history a UI needs (last move and capture tallies).
//!
//! Positions are immutable values. `apply_move` validates a move against the
//! legal set and returns a new position; the session keeps the old one on its
//! history stack for undo.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_of;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub state: GameState,
    pub last_move: Option<Move>,
    /// Black pieces taken by White, in capture order.
    pub captured_by_white: Vec<Piece>,
    /// White pieces taken by Black, in capture order.
    pub captured_by_black: Vec<Piece>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl From<GameState> for Position {
    fn from(state: GameState) -> Self {
        Self {
            state,
            last_move: None,
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
        }
    }
}

impl Position {
    pub fn new_game() -> Self {
        Self::from(GameState::new_game())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from(GameState::from_fen(fen)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// All legal moves, optionally only those starting on `from`.
    pub fn legal_moves(&self, from: Option<Square>) -> Vec<Move> {
        let moves = legal_moves_of(&self.state);
        match from {
            Some(from) => moves.into_iter().filter(|m| m.from == from).collect(),
            None => moves,
        }
    }

    /// Returns the position after `mv`. Promotion to a pawn or king is
    /// rejected before legality is checked; any move outside the legal set is
    /// rejected without side effects.
    pub fn apply_move(&self, mv: Move) -> ChessResult<Position> {
        if let Some(kind) = mv.promotion {
            if !kind.is_promotion_choice() {
                return Err(ChessError::InvalidPromotionChoice(kind));
            }
        }

        let Some(legal) = self
            .legal_moves(Some(mv.from))
            .into_iter()
            .find(|candidate| candidate.to == mv.to && candidate.promotion == mv.promotion)
        else {
            return Err(ChessError::IllegalMove(mv));
        };

        let mover = self.side_to_move();
        let (state, captured) = self.state.apply(legal);
        let mut next = Position {
            state,
            last_move: Some(legal),
            captured_by_white: self.captured_by_white.clone(),
            captured_by_black: self.captured_by_black.clone(),
        };
        if let Some(piece) = captured {
            match mover {
                Color::White => next.captured_by_white.push(piece),
                Color::Black => next.captured_by_black.push(piece),
            }
        }
        Ok(next)
    }

    /// True when the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_king_in_check(&self.state.board, self.state.side_to_move)
    }

    pub fn status(&self) -> GameStatus {
        game_status(self)
    }

    /// Captured material difference in centipawns, White minus Black.
    pub fn material_balance(&self) -> i32 {
        let taken = |pieces: &[Piece]| pieces.iter().map(|p| p.kind.value()).sum::<i32>();
        taken(&self.captured_by_white) - taken(&self.captured_by_black)
    }

    /// True when the last move needs a promotion choice that was not given.
    pub fn needs_promotion_choice(&self, from: Square, to: Square) -> bool {
        self.state.board.get(from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && row_of(to) == piece.color.promotion_row()
        })
    }
}

/// Standard initial setup.
pub fn new_game() -> Position {
    Position::new_game()
}

pub fn legal_moves_for(position: &Position, from: Option<Square>) -> Vec<Move> {
    position.legal_moves(from)
}

pub fn apply_move(position: &Position, mv: Move) -> ChessResult<Position> {
    position.apply_move(mv)
}

pub fn is_check(position: &Position) -> bool {
    position.is_check()
}

#[cfg(test)]
mod tests {
    use super::{apply_move, is_check, legal_moves_for, new_game, Position};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;
    use crate::utils::algebraic::algebraic_to_square as sq;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from).unwrap(), sq(to).unwrap())
    }

    #[test]
    fn legal_moves_can_be_filtered_by_origin() {
        let position = Position::new_game();
        assert_eq!(position.legal_moves(None).len(), 20);
        let knight = position.legal_moves(Some(sq("g1").unwrap()));
        assert_eq!(knight.len(), 2);
        assert!(position.legal_moves(Some(sq("e4").unwrap())).is_empty());
    }

    #[test]
    fn illegal_move_is_rejected_and_position_unchanged() {
        let position = Position::new_game();
        let before = position.clone();
        let err = position.apply_move(mv("e2", "e5")).unwrap_err();
        assert_eq!(err, ChessError::IllegalMove(mv("e2", "e5")));
        assert_eq!(position, before);
    }

    #[test]
    fn captures_are_tallied_for_the_mover() {
        let position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let next = position.apply_move(mv("e4", "d5")).unwrap();
        assert_eq!(
            next.captured_by_white,
            vec![Piece::new(Color::Black, PieceKind::Pawn)]
        );
        assert!(next.captured_by_black.is_empty());
        assert_eq!(next.material_balance(), 100);
        assert_eq!(next.last_move, Some(mv("e4", "d5")));
    }

    #[test]
    fn promotion_to_king_is_an_invalid_choice() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let to_king = Move::with_promotion(sq("a7").unwrap(), sq("a8").unwrap(), PieceKind::King);
        assert_eq!(
            position.apply_move(to_king),
            Err(ChessError::InvalidPromotionChoice(PieceKind::King))
        );
        // A promotion-rank push without a choice is not in the legal set.
        assert!(matches!(
            position.apply_move(mv("a7", "a8")),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(position.needs_promotion_choice(sq("a7").unwrap(), sq("a8").unwrap()));

        let rook = Move::with_promotion(sq("a7").unwrap(), sq("a8").unwrap(), PieceKind::Rook);
        let next = position.apply_move(rook).unwrap();
        assert_eq!(
            next.board().get(sq("a8").unwrap()),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn free_functions_mirror_the_methods() {
        let start = new_game();
        assert_eq!(legal_moves_for(&start, None).len(), 20);
        let next = apply_move(&start, mv("f2", "f3")).unwrap();
        let next = apply_move(&next, mv("e7", "e5")).unwrap();
        let next = apply_move(&next, mv("g2", "g4")).unwrap();
        assert!(!is_check(&next));
        let mated = apply_move(&next, mv("d8", "h4")).unwrap();
        assert!(is_check(&mated));
        assert!(legal_moves_for(&mated, None).is_empty());
    }
}
