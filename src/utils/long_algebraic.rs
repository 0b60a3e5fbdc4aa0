use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Parses `e2e4` or `e7e8q`. Castling is written as the king move (`e1g1`);
/// the castle tag is resolved against the legal moves when the move is
/// applied.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(letter) => {
            let kind = PieceKind::from_letter(letter)
                .ok_or_else(|| ChessError::InvalidMoveText(long_algebraic.to_owned()))?;
            Ok(Move::with_promotion(from, to, kind))
        }
    }
}

pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let push = long_algebraic_to_move("e2e4").unwrap();
        assert_eq!(push, Move::new(52, 36));
        assert_eq!(move_to_long_algebraic(push), "e2e4");

        let promo = long_algebraic_to_move("a7a8n").unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(promo), "a7a8n");
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            long_algebraic_to_move("e2"),
            Err(ChessError::InvalidMoveText(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e2e9"),
            Err(ChessError::InvalidSquare(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e7e8x"),
            Err(ChessError::InvalidMoveText(_))
        ));
    }

    #[test]
    fn king_promotion_parses_but_is_rejected_later() {
        let mv = long_algebraic_to_move("e7e8k").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::King));
    }
}
