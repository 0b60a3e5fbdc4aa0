use crate::game_state::chess_types::{GameState, Piece};
use crate::moves::move_descriptions::Move;

/// A legal move together with the state it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
    pub captured: Option<Piece>,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
