use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::piece_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;

    for (from, piece) in board.pieces_of(side) {
        if piece.kind != PieceKind::Knight {
            continue;
        }
        for (d_row, d_col) in KNIGHT_OFFSETS {
            if let Some(to) = offset_square(from, d_row, d_col) {
                if !board.has_piece_of(to, side) {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn corner_knight_skips_own_pieces() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out);
        // a1 knight reaches b3 only; c2 holds a friendly pawn.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, 41);
    }
}
