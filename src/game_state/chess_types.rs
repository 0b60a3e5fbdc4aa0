//! Core value types shared by every subsystem.
//!
//! Squares are mailbox indices `0..=63`, row-major from White's point of view:
//! `0 == a8`, `7 == h8`, `56 == a1`, `63 == h1`. Row 0 is therefore rank 8.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::position::Position;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Promotion choices, in the order they are generated and offered.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Upper-case letter used by FEN and move notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: upper case for White, lower case for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

/// Identifies which of the four castling rights a castling move exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleTag {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastleTag {
    pub const ALL: [CastleTag; 4] = [
        CastleTag::WhiteKingside,
        CastleTag::WhiteQueenside,
        CastleTag::BlackKingside,
        CastleTag::BlackQueenside,
    ];

    pub const fn color(self) -> Color {
        match self {
            CastleTag::WhiteKingside | CastleTag::WhiteQueenside => Color::White,
            CastleTag::BlackKingside | CastleTag::BlackQueenside => Color::Black,
        }
    }

    pub const fn is_kingside(self) -> bool {
        matches!(self, CastleTag::WhiteKingside | CastleTag::BlackKingside)
    }

    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::White => 60,
            Color::Black => 4,
        }
    }

    pub const fn king_to(self) -> Square {
        match self {
            CastleTag::WhiteKingside => 62,
            CastleTag::WhiteQueenside => 58,
            CastleTag::BlackKingside => 6,
            CastleTag::BlackQueenside => 2,
        }
    }

    /// Rook home square; a move from or onto it revokes this right.
    pub const fn rook_from(self) -> Square {
        match self {
            CastleTag::WhiteKingside => 63,
            CastleTag::WhiteQueenside => 56,
            CastleTag::BlackKingside => 7,
            CastleTag::BlackQueenside => 0,
        }
    }

    pub const fn rook_to(self) -> Square {
        match self {
            CastleTag::WhiteKingside => 61,
            CastleTag::WhiteQueenside => 59,
            CastleTag::BlackKingside => 5,
            CastleTag::BlackQueenside => 3,
        }
    }

    /// Squares between king and rook that must be empty.
    pub const fn must_be_empty(self) -> &'static [Square] {
        match self {
            CastleTag::WhiteKingside => &[61, 62],
            CastleTag::WhiteQueenside => &[59, 58, 57],
            CastleTag::BlackKingside => &[5, 6],
            CastleTag::BlackQueenside => &[3, 2, 1],
        }
    }

    /// King origin plus every square it crosses, none of which may be attacked.
    pub const fn king_path(self) -> &'static [Square] {
        match self {
            CastleTag::WhiteKingside => &[60, 61, 62],
            CastleTag::WhiteQueenside => &[60, 59, 58],
            CastleTag::BlackKingside => &[4, 5, 6],
            CastleTag::BlackQueenside => &[4, 3, 2],
        }
    }
}

/// The four castling booleans. Rights are only ever revoked during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub const fn has(&self, tag: CastleTag) -> bool {
        match tag {
            CastleTag::WhiteKingside => self.white_kingside,
            CastleTag::WhiteQueenside => self.white_queenside,
            CastleTag::BlackKingside => self.black_kingside,
            CastleTag::BlackQueenside => self.black_queenside,
        }
    }

    #[inline]
    pub fn revoke(&mut self, tag: CastleTag) {
        match tag {
            CastleTag::WhiteKingside => self.white_kingside = false,
            CastleTag::WhiteQueenside => self.white_queenside = false,
            CastleTag::BlackKingside => self.black_kingside = false,
            CastleTag::BlackQueenside => self.black_queenside = false,
        }
    }

    pub fn revoke_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// True when every right held by `self` is also held by `earlier`.
    pub fn is_subset_of(&self, earlier: &CastlingRights) -> bool {
        CastleTag::ALL
            .iter()
            .all(|tag| !self.has(*tag) || earlier.has(*tag))
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % 8
}

/// Square reached from `square` by `(d_row, d_col)`, or `None` off the board.
#[inline]
pub fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let row = row_of(square) as i8 + d_row;
    let col = col_of(square) as i8 + d_col;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row * 8 + col) as Square)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_square_stays_on_board() {
        // a8 has no square above or to its left.
        assert_eq!(offset_square(0, -1, 0), None);
        assert_eq!(offset_square(0, 0, -1), None);
        assert_eq!(offset_square(0, 1, 1), Some(9));
        assert_eq!(offset_square(63, 1, 0), None);
        assert_eq!(offset_square(7, 0, 1), None);
    }

    #[test]
    fn castle_tags_agree_on_color_and_geometry() {
        for tag in CastleTag::ALL {
            assert_eq!(tag.king_path()[0], tag.king_from());
            assert_eq!(*tag.king_path().last().unwrap(), tag.king_to());
            assert_eq!(row_of(tag.rook_from()), row_of(tag.king_from()));
            assert_eq!(row_of(tag.king_from()), tag.color().opposite().promotion_row());
        }
    }

    #[test]
    fn revoking_a_right_is_seen_as_subset() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(CastleTag::BlackQueenside);
        assert!(rights.is_subset_of(&CastlingRights::ALL));
        assert!(!CastlingRights::ALL.is_subset_of(&rights));
        rights.revoke_color(Color::White);
        assert!(!rights.white_kingside && !rights.white_queenside);
        assert!(rights.black_kingside);
    }
}
