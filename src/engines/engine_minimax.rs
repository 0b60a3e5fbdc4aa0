use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{search_best_move, SearchConfig, SearchResult};

/// Fixed-depth alpha-beta engine over a pluggable evaluation.
pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    move_generator: LegalMoveGenerator,
    scorer: S,
    default_depth: u8,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(default_depth: u8) -> Self {
        Self::with_scorer(PieceSquareScorer, default_depth)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, default_depth: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer,
            default_depth: SearchConfig::new(default_depth).depth,
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Arcade Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<SearchResult> {
        let config = SearchConfig::new(params.depth.unwrap_or(self.default_depth));
        let result = search_best_move(game_state, &self.move_generator, &self.scorer, config);
        if result.best_move.is_none() {
            return Err(ChessError::NoLegalMoves);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::chess_errors::ChessError;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn default_depth_is_clamped() {
        assert_eq!(MinimaxEngine::new(0).default_depth(), 1);
        assert_eq!(MinimaxEngine::new(42).default_depth(), 6);
        assert_eq!(MinimaxEngine::default().default_depth(), 2);
    }

    #[test]
    fn returns_a_legal_opening_move() {
        let game = GameState::new_game();
        let mut engine = MinimaxEngine::new(2);
        let result = engine
            .choose_move(&game, &GoParams::default())
            .expect("opening has moves");
        let best = result.best_move.expect("best move set");
        let legal = crate::move_generation::legal_move_generator::legal_moves_of(&game);
        assert!(legal.contains(&best));
        assert!(result.nodes > 20);
    }

    #[test]
    fn no_legal_moves_is_reported_as_an_error() {
        let mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN");
        let mut engine = MinimaxEngine::with_scorer(MaterialScorer, 2);
        assert_eq!(
            engine.choose_move(&mated, &GoParams::with_depth(1)),
            Err(ChessError::NoLegalMoves)
        );
    }
}
