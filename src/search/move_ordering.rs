//! Cheap capture/promotion ordering used to improve alpha-beta cutoffs.
//! Ordering changes how much is pruned, never which score is returned.

use crate::move_generation::move_generator::GeneratedMove;

const PROMOTION_BONUS: i32 = 800;

#[inline]
pub fn ordering_score(generated: &GeneratedMove) -> i32 {
    let capture = generated.captured.map_or(0, |piece| piece.kind.value());
    let promotion = if generated.mv.promotion.is_some() {
        PROMOTION_BONUS
    } else {
        0
    };
    capture + promotion
}

/// Highest score first. The sort is stable, so equal moves keep generation
/// order and root tie-breaking stays deterministic.
pub fn order_moves(moves: &mut [GeneratedMove]) {
    moves.sort_by_key(|generated| std::cmp::Reverse(ordering_score(generated)));
}
