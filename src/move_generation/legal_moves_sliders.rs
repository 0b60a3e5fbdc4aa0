//! Bishop, rook and queen moves by ray casting.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::piece_offsets::slider_rays;

pub fn generate_slider_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;

    for (from, piece) in board.pieces_of(side) {
        for &(d_row, d_col) in slider_rays(piece.kind) {
            let mut current = from;
            while let Some(to) = offset_square(current, d_row, d_col) {
                match board.get(to) {
                    None => out.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != side {
                            out.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
