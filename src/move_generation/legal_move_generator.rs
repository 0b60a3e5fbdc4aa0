//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, applies each candidate to a
//! scratch state and drops those that leave the mover's own king attacked.
//! No pin detection shortcuts: every candidate is applied and checked.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let pseudo = pseudo_legal_moves(game_state);
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            let (next, captured) = game_state.apply(mv);
            if is_king_in_check(&next.board, game_state.side_to_move) {
                continue;
            }
            legal.push(GeneratedMove {
                mv,
                game_after_move: next,
                captured,
            });
        }

        legal
    }
}

/// Moves obeying piece movement rules, not yet checked for self-check.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_pawn_moves(game_state, &mut out);
    generate_knight_moves(game_state, &mut out);
    generate_slider_moves(game_state, &mut out);
    generate_king_moves(game_state, &mut out);
    out
}

/// Legal moves for `color` on `board` with the given rights and en-passant
/// target.
pub fn legal_moves(
    board: &Board,
    color: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> Vec<Move> {
    let game_state = GameState {
        board: *board,
        side_to_move: color,
        castling_rights,
        en_passant_square,
    };
    legal_moves_of(&game_state)
}

pub fn legal_moves_of(game_state: &GameState) -> Vec<Move> {
    pseudo_legal_moves(game_state)
        .into_iter()
        .filter(|mv| {
            let applied = apply_move_to_board(
                &game_state.board,
                *mv,
                game_state.castling_rights,
                game_state.en_passant_square,
            );
            !is_king_in_check(&applied.board, game_state.side_to_move)
        })
        .collect()
}
