//! Attack and check detection.
//!
//! `is_square_attacked` probes outward from the target square: knight hops,
//! the first occupant along each ray, reversed pawn captures and king
//! adjacency. Pins and checks against the attacker are ignored.

use crate::game_state::chess_types::*;
use crate::moves::piece_offsets::{DIAGONAL_RAYS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_RAYS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        matches!(board.get(sq), Some(p) if p.color == attacker_color && kinds.contains(&p.kind))
    };

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(from) = offset_square(square, d_row, d_col) {
            if holds(from, &[PieceKind::Knight]) {
                return true;
            }
        }
    }

    if ray_hits(board, square, &DIAGONAL_RAYS, |p| {
        p.color == attacker_color && matches!(p.kind, PieceKind::Bishop | PieceKind::Queen)
    }) {
        return true;
    }

    if ray_hits(board, square, &ORTHOGONAL_RAYS, |p| {
        p.color == attacker_color && matches!(p.kind, PieceKind::Rook | PieceKind::Queen)
    }) {
        return true;
    }

    // An attacking pawn sits one row behind the target from its own view.
    let pawn_row = -attacker_color.pawn_direction();
    for d_col in [-1i8, 1] {
        if let Some(from) = offset_square(square, pawn_row, d_col) {
            if holds(from, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KING_OFFSETS {
        if let Some(from) = offset_square(square, d_row, d_col) {
            if holds(from, &[PieceKind::King]) {
                return true;
            }
        }
    }

    false
}

fn ray_hits(
    board: &Board,
    square: Square,
    rays: &[(i8, i8)],
    is_attacker: impl Fn(Piece) -> bool,
) -> bool {
    for &(d_row, d_col) in rays {
        let mut current = square;
        while let Some(next) = offset_square(current, d_row, d_col) {
            if let Some(piece) = board.get(next) {
                if is_attacker(piece) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
