//! Canonical chess-rule constants.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Insufficient-material detection only looks at boards with at most this
/// many pieces (two kings plus one minor piece).
pub const INSUFFICIENT_MATERIAL_MAX_PIECES: usize = 3;
