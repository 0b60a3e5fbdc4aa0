//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes a White-positive evaluation. Search
//! only ever works on values it is handed or derives itself, so it can run on
//! any thread without touching session state. Recursion depth is bounded by
//! `MAX_SEARCH_DEPTH`.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::move_ordering::order_moves;

/// Score of being mated at the root. Mates further away score closer to zero,
/// so the search prefers the fastest mate and the slowest loss.
pub const MATE_SCORE: i32 = 99_999;

pub const MAX_SEARCH_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

impl SearchConfig {
    /// Clamps `depth` into `1..=MAX_SEARCH_DEPTH`.
    pub fn new(depth: u8) -> Self {
        let clamped = depth.clamp(1, MAX_SEARCH_DEPTH);
        if clamped != depth {
            log::warn!("search depth {depth} clamped to {clamped}");
        }
        Self { depth: clamped }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// White-positive score of the chosen line.
    pub score: i32,
    pub nodes: u64,
}

/// Picks the best move for the side to move. `best_move` is `None` only when
/// the side to move has no legal moves.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.depth.clamp(1, MAX_SEARCH_DEPTH);
    let maximizing = game_state.side_to_move == Color::White;
    let mut nodes = 1u64;

    let moves = searchable_moves(generator, game_state);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: terminal_score(game_state, 0),
            nodes,
        };
    }

    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for generated in &moves {
        let score = minimax(
            &generated.game_after_move,
            generator,
            scorer,
            depth - 1,
            i32::MIN,
            i32::MAX,
            1,
            &mut nodes,
        );
        // Strict comparison: the first move reaching the best score wins ties.
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(generated.mv);
        }
    }

    log::debug!(
        "search depth {depth} for {:?}: best {:?} score {best_score} nodes {nodes}",
        game_state.side_to_move,
        best_move.map(|m| m.to_string()),
    );

    SearchResult {
        best_move,
        score: best_score,
        nodes,
    }
}

/// Best move for the side to move of `position` with the default engine
/// setup. `None` when there are no legal moves.
pub fn best_move(position: &Position, depth: u8) -> Option<Move> {
    search_best_move(
        &position.state,
        &LegalMoveGenerator,
        &PieceSquareScorer,
        SearchConfig::new(depth),
    )
    .best_move
}

#[allow(clippy::too_many_arguments)]
fn minimax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(&game_state.board);
    }

    let moves = searchable_moves(generator, game_state);
    if moves.is_empty() {
        return terminal_score(game_state, ply);
    }

    if game_state.side_to_move == Color::White {
        let mut best = i32::MIN;
        for generated in &moves {
            let score = minimax(
                &generated.game_after_move,
                generator,
                scorer,
                depth - 1,
                alpha,
                beta,
                ply.saturating_add(1),
                nodes,
            );
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for generated in &moves {
            let score = minimax(
                &generated.game_after_move,
                generator,
                scorer,
                depth - 1,
                alpha,
                beta,
                ply.saturating_add(1),
                nodes,
            );
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Legal moves as search sees them: promotions are explored as queens only,
/// and captures and promotions are tried first.
fn searchable_moves<G: MoveGenerator>(generator: &G, game_state: &GameState) -> Vec<GeneratedMove> {
    let mut moves: Vec<GeneratedMove> = generator
        .generate_legal_moves(game_state)
        .into_iter()
        .filter(|generated| matches!(generated.mv.promotion, None | Some(PieceKind::Queen)))
        .collect();
    order_moves(&mut moves);
    moves
}

/// Score for a side with no legal moves: mated if in check, else stalemate.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if !is_king_in_check(&game_state.board, game_state.side_to_move) {
        return 0;
    }
    let mate = MATE_SCORE - i32::from(ply);
    match game_state.side_to_move {
        Color::White => -mate,
        Color::Black => mate,
    }
}

#[cfg(test)]
mod tests {
    use super::{best_move, search_best_move, SearchConfig, MATE_SCORE, MAX_SEARCH_DEPTH};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::{MaterialScorer, PieceSquareScorer};
    use crate::utils::algebraic::algebraic_to_square as sq;

    fn search(fen: &str, depth: u8) -> super::SearchResult {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        search_best_move(
            &game,
            &LegalMoveGenerator,
            &PieceSquareScorer,
            SearchConfig::new(depth),
        )
    }

    #[test]
    fn config_depth_is_clamped() {
        assert_eq!(SearchConfig::new(0).depth, 1);
        assert_eq!(SearchConfig::new(200).depth, MAX_SEARCH_DEPTH);
        assert_eq!(SearchConfig::default().depth, 2);
    }

    #[test]
    fn takes_a_free_queen() {
        let result = search("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", 1);
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.from, sq("e4").unwrap());
        assert_eq!(best.to, sq("d5").unwrap());
    }

    #[test]
    fn black_minimizes() {
        let result = search("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1", 2);
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.from, sq("e5").unwrap());
        assert_eq!(best.to, sq("d4").unwrap());
        assert!(result.score < 0);
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let result = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.to, sq("a8").unwrap());
        assert_eq!(result.score, MATE_SCORE - 1);
    }

    #[test]
    fn prefers_the_faster_mate_score() {
        let fast = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3);
        assert_eq!(fast.score, MATE_SCORE - 1);
    }

    #[test]
    fn no_moves_means_no_best_move() {
        let mated = search("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", 2);
        assert_eq!(mated.best_move, None);
        assert_eq!(mated.score, MATE_SCORE);

        let stalemated = search("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1", 2);
        assert_eq!(stalemated.best_move, None);
        assert_eq!(stalemated.score, 0);
    }

    #[test]
    fn promotes_to_a_queen() {
        let result = search("8/P6k/8/8/8/8/8/K7 w - - 0 1", 1);
        let best = result.best_move.expect("a move exists");
        assert_eq!(best.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn ties_go_to_the_first_generated_move() {
        // Material-only evaluation: every quiet king move scores the same.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        let result = search_best_move(
            &game,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig::new(1),
        );
        let first = crate::move_generation::legal_move_generator::legal_moves_of(&game)[0];
        assert_eq!(result.best_move, Some(first));
    }

    #[test]
    fn opening_move_does_not_hang_the_queen() {
        let position = Position::new_game();
        let chosen = best_move(&position, 1).expect("opening has moves");
        let after = position.apply_move(chosen).expect("search returns legal moves");
        let queen_lost = after.legal_moves(None).into_iter().any(|reply| {
            after.board().get(reply.to) == Some(Piece::new(Color::White, PieceKind::Queen))
        });
        assert!(!queen_lost);
    }
}
