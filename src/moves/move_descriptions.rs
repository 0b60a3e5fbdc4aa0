//! The `Move` value passed between generation, application and search.

use std::fmt;

use crate::game_state::chess_types::{CastleTag, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// A move is a plain value; it is regenerated per position and never
/// referenced across positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleTag>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            castle: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
            castle: None,
        }
    }

    #[inline]
    pub const fn castling(tag: CastleTag) -> Self {
        Self {
            from: tag.king_from(),
            to: tag.king_to(),
            promotion: None,
            castle: Some(tag),
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::{CastleTag, PieceKind};

    #[test]
    fn displays_long_algebraic() {
        assert_eq!(Move::new(52, 36).to_string(), "e2e4");
        assert_eq!(Move::with_promotion(12, 4, PieceKind::Queen).to_string(), "e7e8q");
        assert_eq!(Move::castling(CastleTag::BlackQueenside).to_string(), "e8c8");
    }
}
