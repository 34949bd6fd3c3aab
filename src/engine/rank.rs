//! Pick ranker: deterministic ordering of a batch of picks.

use std::cmp::Ordering;

use crate::engine::types::Pick;

/// Order picks by descending edge magnitude, then descending confidence
/// tier, then ascending player id. The final key makes the ordering total,
/// so identical batches always rank identically.
pub fn rank_picks(mut picks: Vec<Pick>) -> Vec<Pick> {
    picks.sort_by(|a, b| {
        b.edge_score
            .abs()
            .partial_cmp(&a.edge_score.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.confidence.rank().cmp(&a.confidence.rank()))
            .then_with(|| a.player_id.as_str().cmp(b.player_id.as_str()))
    });
    picks
}

/// Bounded prefix of an already-ranked batch. A view, not a re-rank.
pub fn top_n(picks: &[Pick], n: usize) -> &[Pick] {
    &picks[..n.min(picks.len())]
}
