use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{col_of, row_of, Square};

const FILES: &[u8; 8] = b"abcdefgh";

/// `0 -> "a8"`, `63 -> "h1"`.
pub fn square_to_algebraic(square: Square) -> String {
    let file = FILES[col_of(square) as usize] as char;
    let rank = (b'8' - row_of(square)) as char;
    format!("{file}{rank}")
}

pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

pub fn file_char(square: Square) -> char {
    FILES[col_of(square) as usize] as char
}
