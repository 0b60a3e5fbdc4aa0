use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Pseudo-legal pawn moves for the side to move. Moves onto the last rank are
/// emitted once per promotion choice.
pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let dir = side.pawn_direction();

    for (from, piece) in board.pieces_of(side) {
        if piece.kind != PieceKind::Pawn {
            continue;
        }

        if let Some(one_step) = offset_square(from, dir, 0) {
            if board.is_empty(one_step) {
                push_pawn_move(side, from, one_step, out);

                if row_of(from) == side.pawn_start_row() {
                    if let Some(two_step) = offset_square(one_step, dir, 0) {
                        if board.is_empty(two_step) {
                            out.push(Move::new(from, two_step));
                        }
                    }
                }
            }
        }

        for d_col in [-1i8, 1] {
            let Some(to) = offset_square(from, dir, d_col) else {
                continue;
            };
            if board.has_piece_of(to, side.opposite()) || game_state.en_passant_square == Some(to)
            {
                push_pawn_move(side, from, to, out);
            }
        }
    }
}

fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if row_of(to) == side.promotion_row() {
        for promotion in PieceKind::PROMOTION_CHOICES {
            out.push(Move::with_promotion(from, to, promotion));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
