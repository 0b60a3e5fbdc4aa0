//! Crate root module declarations for the arcade chess core.
//!
//! Exposes the rules (board model, move generation, game status), the
//! minimax search, the human-versus-computer game session, and the text
//! helpers (FEN, notation, rendering) used by front-ends.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod position;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod piece_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod move_ordering;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod session {
    pub mod background_search;
    pub mod game_session;
}

pub mod terminal {
    pub mod terminal_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen;
    pub mod long_algebraic;
    pub mod notation;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use config::SessionConfig;
pub use game_state::chess_types::{
    Board, CastleTag, CastlingRights, Color, GameState, Piece, PieceKind, Position, Square,
};
pub use game_state::game_status::{game_status, GameStatus};
pub use game_state::position::{apply_move, is_check, legal_moves_for, new_game};
pub use moves::move_descriptions::Move;
pub use search::minimax::{best_move, SearchConfig, SearchResult};
pub use session::game_session::GameSession;
