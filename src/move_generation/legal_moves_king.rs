use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::Move;
use crate::moves::piece_offsets::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;

    for (from, piece) in board.pieces_of(side) {
        if piece.kind != PieceKind::King {
            continue;
        }
        for (d_row, d_col) in KING_OFFSETS {
            if let Some(to) = offset_square(from, d_row, d_col) {
                if !board.has_piece_of(to, side) {
                    out.push(Move::new(from, to));
                }
            }
        }
    }

    generate_castling_moves(game_state, out);
}

/// Castling preconditions are all checked on the pre-move board: the right is
/// held, the king and rook stand on their home squares, the squares between
/// them are empty, and no square on the king's path is attacked.
fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let enemy = side.opposite();
    let king = Piece::new(side, PieceKind::King);
    let rook = Piece::new(side, PieceKind::Rook);

    for tag in CastleTag::ALL {
        if tag.color() != side || !game_state.castling_rights.has(tag) {
            continue;
        }
        if board.get(tag.king_from()) != Some(king) || board.get(tag.rook_from()) != Some(rook) {
            continue;
        }
        if !tag.must_be_empty().iter().all(|sq| board.is_empty(*sq)) {
            continue;
        }
        if tag
            .king_path()
            .iter()
            .any(|sq| is_square_attacked(board, *sq, enemy))
        {
            continue;
        }
        out.push(Move::castling(tag));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    fn castles(fen: &str) -> Vec<CastleTag> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, &mut out);
        out.iter().filter_map(|m: &Move| m.castle).collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec![CastleTag::WhiteKingside, CastleTag::WhiteQueenside]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            vec![CastleTag::BlackKingside, CastleTag::BlackQueenside]
        );
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec![CastleTag::WhiteQueenside]
        );
    }

    #[test]
    fn cannot_castle_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn b_file_may_be_attacked_but_must_be_empty() {
        // b1 attacked by the rook on b8 does not matter for queen-side castling.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"),
            vec![CastleTag::WhiteQueenside]
        );
        assert!(castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").is_empty());
    }

    #[test]
    fn missing_rook_means_no_castling_even_with_the_right() {
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }
}
