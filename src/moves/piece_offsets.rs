//! Step and ray direction tables as `(d_row, d_col)` pairs.

use crate::game_state::chess_types::PieceKind;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Ray directions of a sliding piece; empty for non-sliders.
pub fn slider_rays(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN_RAYS: [(i8, i8); 8] = [
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
        (-1, 0),
        (1, 0),
        (0, -1),
        (0, 1),
    ];

    match kind {
        PieceKind::Bishop => &DIAGONAL_RAYS,
        PieceKind::Rook => &ORTHOGONAL_RAYS,
        PieceKind::Queen => &QUEEN_RAYS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}
