//! Pure move application.
//!
//! `apply_move_to_board` never mutates its inputs: it copies the board and
//! castling rights, edits the copies and returns them together with the new
//! en-passant target and the captured piece, if any.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Result of applying one move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub captured: Option<Piece>,
}

/// Applies `mv` to `board`. The move is assumed to be at least pseudo-legal;
/// a move from an empty square returns the board unchanged.
pub fn apply_move_to_board(
    board: &Board,
    mv: Move,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
) -> AppliedMove {
    let mut next = *board;
    let mut rights = castling_rights;

    let Some(moving) = board.get(mv.from) else {
        return AppliedMove {
            board: next,
            castling_rights: rights,
            en_passant_square: None,
            captured: None,
        };
    };
    let is_pawn = moving.kind == PieceKind::Pawn;

    // En-passant removes the pawn that sits one rank behind the destination.
    let mut captured = None;
    if is_pawn && en_passant_square == Some(mv.to) {
        let behind = offset_square(mv.to, -moving.color.pawn_direction(), 0);
        if let Some(victim_square) = behind {
            captured = next.get(victim_square);
            next.set(victim_square, None);
        }
    }

    if captured.is_none() {
        captured = next.get(mv.to);
    }
    next.set(mv.to, Some(moving));
    next.set(mv.from, None);

    let new_en_passant = if is_pawn && mv.from.abs_diff(mv.to) == 16 {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    if let Some(tag) = mv.castle {
        let rook = next.get(tag.rook_from());
        next.set(tag.rook_from(), None);
        next.set(tag.rook_to(), rook);
    }

    update_castling_rights(&mut rights, moving, mv.from, mv.to);

    if let Some(promotion) = mv.promotion {
        next.set(mv.to, Some(Piece::new(moving.color, promotion)));
    }

    AppliedMove {
        board: next,
        castling_rights: rights,
        en_passant_square: new_en_passant,
        captured,
    }
}

fn update_castling_rights(rights: &mut CastlingRights, moving: Piece, from: Square, to: Square) {
    if moving.kind == PieceKind::King {
        rights.revoke_color(moving.color);
    }

    // Covers both a rook leaving home and a rook being captured at home.
    for tag in CastleTag::ALL {
        if from == tag.rook_from() || to == tag.rook_from() {
            rights.revoke(tag);
        }
    }
}
