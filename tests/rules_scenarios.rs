use arcade_chess::game_state::chess_types::*;
use arcade_chess::move_generation::legal_move_checks::is_king_in_check;
use arcade_chess::utils::algebraic::algebraic_to_square;
use arcade_chess::{
    apply_move, best_move, game_status, is_check, legal_moves_for, new_game, ChessError,
    GameSession, GameStatus, Move, SessionConfig,
};

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("valid square")
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("FEN should parse")
}

#[test]
fn queen_check_must_be_answered() {
    let position = position("4k3/8/8/8/7q/8/8/4K3 w - - 0 1");
    assert!(is_check(&position));

    let moves = legal_moves_for(&position, None);
    assert!(!moves.is_empty());
    for m in moves {
        let next = apply_move(&position, m).expect("generated moves apply");
        assert!(
            !is_king_in_check(next.board(), Color::White),
            "{m} leaves the king in check"
        );
    }
    // f2 is on the checking diagonal.
    assert!(apply_move(&position, mv("e1", "f2")).is_err());
}

#[test]
fn kingside_castle_moves_rook_and_clears_rights() {
    let position = position("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let castle = Move::castling(CastleTag::WhiteKingside);
    assert!(legal_moves_for(&position, None).contains(&castle));

    // The UI sends a plain king move; the castle is recognised.
    let next = apply_move(&position, mv("e1", "g1")).expect("castling is legal");
    assert_eq!(next.board().get(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(next.board().get(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(next.board().is_empty(sq("h1")));
    assert!(next.board().is_empty(sq("e1")));
    assert!(!next.state.castling_rights.has(CastleTag::WhiteKingside));
    assert!(!next.state.castling_rights.has(CastleTag::WhiteQueenside));
}

#[test]
fn castling_through_an_attacked_square_is_not_offered() {
    let position = position("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!legal_moves_for(&position, None).contains(&Move::castling(CastleTag::WhiteKingside)));
}

#[test]
fn en_passant_lasts_exactly_one_ply() {
    // White a2-a4 passes the Black pawn on b4.
    let start = position("4k3/7p/8/8/1p6/8/P7/4K3 w - - 0 1");
    let after_push = apply_move(&start, mv("a2", "a4")).unwrap();
    assert_eq!(after_push.state.en_passant_square, Some(sq("a3")));
    assert!(legal_moves_for(&after_push, Some(sq("b4"))).contains(&mv("b4", "a3")));

    let taken = apply_move(&after_push, mv("b4", "a3")).unwrap();
    assert!(taken.board().is_empty(sq("a4")));
    assert_eq!(taken.captured_by_black, vec![Piece::new(Color::White, PieceKind::Pawn)]);

    // Declining it once loses it.
    let declined = apply_move(&after_push, mv("h7", "h6")).unwrap();
    let declined = apply_move(&declined, mv("e1", "d1")).unwrap();
    assert_eq!(declined.state.en_passant_square, None);
    assert!(!legal_moves_for(&declined, Some(sq("b4"))).contains(&mv("b4", "a3")));
}

#[test]
fn en_passant_after_black_double_push() {
    let start = position("4k3/p7/8/1P6/8/8/8/4K3 b - - 0 1");
    let after_push = apply_move(&start, mv("a7", "a5")).unwrap();
    assert!(legal_moves_for(&after_push, Some(sq("b5"))).contains(&mv("b5", "a6")));

    let waited = apply_move(&after_push, mv("e1", "e2")).unwrap();
    let waited = apply_move(&waited, mv("e8", "e7")).unwrap();
    assert!(!legal_moves_for(&waited, Some(sq("b5"))).contains(&mv("b5", "a6")));
}

#[test]
fn bare_kings_are_a_draw() {
    assert_eq!(
        game_status(&position("4k3/8/8/8/8/8/8/4K3 w - - 0 1")),
        GameStatus::DrawInsufficientMaterial
    );
}

#[test]
fn fools_mate_is_checkmate() {
    let mut position = new_game();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        position = apply_move(&position, mv(from, to)).unwrap();
    }
    assert_eq!(
        game_status(&position),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(best_move(&position, 2), None);
}

#[test]
fn every_opening_move_round_trips_through_undo() {
    let start = new_game();
    let openings = legal_moves_for(&start, None);
    assert_eq!(openings.len(), 20);

    for opening in openings {
        let mut session = GameSession::default();
        session.play_move(opening).unwrap();
        session.begin_engine_turn().unwrap();
        let reply = legal_moves_for(session.position(), None)[0];
        session.finish_engine_turn(Some(reply)).unwrap();

        session.undo().unwrap();
        assert_eq!(session.position(), &start, "undo after {opening}");
        assert!(session.move_log().is_empty());
    }
}

#[test]
fn illegal_input_leaves_the_session_untouched() {
    let mut session = GameSession::new(SessionConfig::default());
    let before = session.position().clone();
    assert_eq!(
        session.play_move(mv("e2", "e5")),
        Err(ChessError::IllegalMove(mv("e2", "e5")))
    );
    assert_eq!(session.position(), &before);
    assert!(session.is_human_turn());
}

#[test]
fn depth_one_search_keeps_the_queen_safe() {
    // Qg4 and Qh5 both walk into the f6 knight.
    let position = position("rnbqkb1r/pppp1ppp/5n2/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 2 3");
    let chosen = best_move(&position, 1).expect("a move exists");
    assert_ne!(chosen, mv("d1", "g4"));
    assert_ne!(chosen, mv("d1", "h5"));
}
