//! Pluggable static evaluation.
//!
//! Scores are always from White's point of view: positive favors White.
//! Search maximizes for White and minimizes for Black, so scorers never need
//! to know whose turn it is.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> i32;
}

/// Material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| signed(piece.color, piece.kind.value()))
            .sum()
    }
}

/// Material plus piece-square bonuses. The default engine scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(sq, piece)| {
                signed(piece.color, piece.kind.value() + piece_square_bonus(piece, sq))
            })
            .sum()
    }
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Tables are laid out from White's side with row 0 being rank 8, so White
/// reads them directly and Black reads the vertically mirrored square.
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let index = match piece.color {
        Color::White => square as usize,
        Color::Black => ((7 - row_of(square)) * 8 + col_of(square)) as usize,
    };
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_MIDGAME_TABLE,
    };
    table[index]
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5,  5,  5,  5,  5,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// Midgame only: the king prefers its back rank and the castled corners.
#[rustfmt::skip]
const KING_MIDGAME_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        GameState::from_fen(fen).expect("FEN should parse").board
    }

    #[test]
    fn start_position_is_balanced() {
        let start = Board::starting();
        assert_eq!(PieceSquareScorer.score(&start), 0);
        assert_eq!(MaterialScorer.score(&start), 0);
    }

    #[test]
    fn material_scorer_is_white_positive() {
        assert_eq!(MaterialScorer.score(&board("4k3/8/8/8/8/8/8/4KQ2 w - - 0 1")), 900);
        assert_eq!(MaterialScorer.score(&board("4kq2/8/8/8/8/8/8/4K3 w - - 0 1")), -900);
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        let center = board("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1");
        let rim = board("4k3/8/8/8/8/8/N7/4K3 w - - 0 1");
        assert!(PieceSquareScorer.score(&center) > PieceSquareScorer.score(&rim));
    }

    #[test]
    fn black_reads_the_mirrored_square() {
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        // e4 for White mirrors e5 for Black.
        assert_eq!(piece_square_bonus(white_pawn, 36), piece_square_bonus(black_pawn, 28));
        assert_eq!(piece_square_bonus(white_pawn, 36), 20);
    }
}
