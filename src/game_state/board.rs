//! Mailbox board: one optional piece per square.

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial setup.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as Square;
            board.set(col, Some(Piece::new(Color::Black, *kind)));
            board.set(8 + col, Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(48 + col, Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(56 + col, Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    #[inline]
    pub fn has_piece_of(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color == color)
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, cell)| cell.map(|piece| (sq as Square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_board_has_thirty_two_pieces_in_place() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.get(4), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(board.get(60), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board.get(59), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert_eq!(board.get(52), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(board.is_empty(36));
        assert_eq!(board.pieces_of(Color::White).count(), 16);
    }
}
