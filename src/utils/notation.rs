//! Short algebraic move text for the move log (`Nf3`, `exd5`, `O-O`,
//! `e8=Q+`). Presentation only; nothing in the rules depends on it.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{file_char, square_to_algebraic};

/// Renders `mv` as played from `position`. The move must be legal there.
pub fn move_to_notation(position: &Position, mv: Move) -> ChessResult<String> {
    let next = position.apply_move(mv)?;
    let played = next.last_move.unwrap_or(mv);
    let piece = position
        .board()
        .get(played.from)
        .ok_or(ChessError::IllegalMove(mv))?;

    let mut text = match played.castle {
        Some(tag) if tag.is_kingside() => "O-O".to_owned(),
        Some(_) => "O-O-O".to_owned(),
        None => piece_move_text(position, played, piece),
    };

    text.push_str(match next.status() {
        GameStatus::Checkmate { .. } => "#",
        _ if next.is_check() => "+",
        _ => "",
    });
    Ok(text)
}

fn piece_move_text(position: &Position, mv: Move, piece: Piece) -> String {
    let board = position.board();
    let is_capture = board.get(mv.to).is_some()
        || (piece.kind == PieceKind::Pawn && position.state.en_passant_square == Some(mv.to));

    let mut text = String::new();
    if piece.kind == PieceKind::Pawn {
        if is_capture {
            text.push(file_char(mv.from));
        }
    } else {
        text.push(piece.kind.letter());
        text.push_str(&disambiguation(position, mv, piece));
    }

    if is_capture {
        text.push('x');
    }
    text.push_str(&square_to_algebraic(mv.to));

    if let Some(kind) = mv.promotion {
        text.push('=');
        text.push(kind.letter());
    }
    text
}

/// File, rank or both, when another piece of the same kind could also
/// reach the destination.
fn disambiguation(position: &Position, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Square> = position
        .legal_moves(None)
        .into_iter()
        .filter(|other| other.to == mv.to && other.from != mv.from)
        .filter(|other| position.board().get(other.from) == Some(piece))
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let from = square_to_algebraic(mv.from);
    let shares_file = rivals.iter().any(|&sq| col_of(sq) == col_of(mv.from));
    let shares_rank = rivals.iter().any(|&sq| row_of(sq) == row_of(mv.from));
    match (shares_file, shares_rank) {
        (false, _) => from[0..1].to_owned(),
        (true, false) => from[1..2].to_owned(),
        (true, true) => from,
    }
}

/// Numbers a move log from White's first move: `1. e4 e5 2. Nf3`.
pub fn format_move_list(moves: &[String]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| format!("{}. {}", index + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
