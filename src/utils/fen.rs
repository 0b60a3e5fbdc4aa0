//! FEN import and export for `GameState`.
//!
//! The parser accepts the four position fields alone or followed by the two
//! clock fields; clocks are validated but not kept, since no fifty-move rule
//! is tracked. The generator emits the four position fields only.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(ChessError::InvalidFen(format!(
            "expected 4 or 6 fields, found {}",
            fields.len()
        )));
    }

    let mut game_state = GameState::new_empty();
    game_state.board = parse_board(fields[0])?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = parse_castling_rights(fields[2])?;
    game_state.en_passant_square =
        parse_en_passant_square(fields[3], game_state.side_to_move)?;

    if fields.len() == 6 {
        for clock in &fields[4..] {
            clock
                .parse::<u16>()
                .map_err(|_| ChessError::InvalidFen(format!("invalid move clock '{clock}'")))?;
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0 of the mailbox.
    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in row_text.chars() {
            if let Some(empty) = ch.to_digit(10) {
                if !(1..=8).contains(&empty) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty as usize;
            } else {
                let piece = Piece::from_fen_char(ch)
                    .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece '{ch}'")))?;
                if col >= 8 {
                    return Err(ChessError::InvalidFen(format!(
                        "rank '{row_text}' is too long"
                    )));
                }
                board.set((row * 8 + col) as Square, Some(piece));
                col += 1;
            }
        }
        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank '{row_text}' does not cover 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(text: &str) -> ChessResult<Color> {
    match text {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(ChessError::InvalidFen(format!(
            "invalid side to move '{other}'"
        ))),
    }
}

fn parse_castling_rights(text: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if text == "-" {
        return Ok(rights);
    }
    for ch in text.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling flag '{other}'"
                )))
            }
        }
    }
    Ok(rights)
}

/// The target sits behind a pawn the opponent just pushed: rank 6 when White
/// is to move, rank 3 when Black is.
fn parse_en_passant_square(text: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if text == "-" {
        return Ok(None);
    }
    let square = algebraic_to_square(text)
        .map_err(|_| ChessError::InvalidFen(format!("invalid en-passant square '{text}'")))?;
    let (expected_row, rank) = match side_to_move {
        Color::White => (2, 6),
        Color::Black => (5, 3),
    };
    if row_of(square) != expected_row {
        return Err(ChessError::InvalidFen(format!(
            "en-passant square '{text}' must be on rank {rank} with {side_to_move:?} to move"
        )));
    }
    Ok(Some(square))
}

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..8u8 {
        let mut empty = 0;
        for col in 0..8u8 {
            match game_state.board.get(row * 8 + col) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let rights = game_state.castling_rights;
    let mut any = false;
    for (held, flag) in [
        (rights.white_kingside, 'K'),
        (rights.white_queenside, 'Q'),
        (rights.black_kingside, 'k'),
        (rights.black_queenside, 'q'),
    ] {
        if held {
            out.push(flag);
            any = true;
        }
    }
    if !any {
        out.push('-');
    }

    out.push(' ');
    match game_state.en_passant_square {
        Some(square) => out.push_str(&square_to_algebraic(square)),
        None => out.push('-'),
    }

    out
}
