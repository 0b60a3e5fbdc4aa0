//! Perft node counting used to validate move generation against published
//! reference counts.

use crate::game_state::chess_types::{GameState, PieceKind};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_moves(game_state) {
        if depth == 1 {
            total.nodes += 1;
            if generated.captured.is_some() {
                total.captures += 1;
            }
            let moved_pawn = game_state
                .board
                .get(generated.mv.from)
                .is_some_and(|p| p.kind == PieceKind::Pawn);
            if moved_pawn && game_state.en_passant_square == Some(generated.mv.to) {
                total.en_passant += 1;
            }
            if generated.mv.castle.is_some() {
                total.castles += 1;
            }
            if generated.mv.promotion.is_some() {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(generator, &generated.game_after_move, depth - 1));
        }
    }
    total
}

/// Node count per root move, in generation order. Handy when bisecting a
/// mismatch against another engine.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(String, usize)> {
    generator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|generated| {
            let nodes =
                perft(generator, &generated.game_after_move, depth.saturating_sub(1)).nodes;
            (generated.mv.to_string(), nodes)
        })
        .collect()
}
