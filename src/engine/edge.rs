//! Edge scorer: normalized gap between projection and line.

use crate::engine::config::PickConfig;
use crate::engine::types::{Direction, EdgeResult, Line, Projection};
use crate::error::PickError;
use crate::Result;

/// Score the edge of a projection against a line.
///
/// `edge_score = (projection - line) / scale` where the scale is the
/// projection's variance hint floored at `min_scale`, so a near-zero
/// variance can never blow the score up. An edge of exactly zero is
/// treated as Under; the tie has to break somewhere and Under is the
/// documented convention.
///
/// A negative projection value should be impossible after normalization,
/// but the scorer defends its own precondition and fails with
/// [`PickError::DegenerateInput`] rather than trusting the caller.
pub fn score_edge(projection: &Projection, line: &Line, cfg: &PickConfig) -> Result<EdgeResult> {
    if projection.value < 0.0 || !projection.value.is_finite() {
        return Err(PickError::DegenerateInput {
            value: projection.value,
        });
    }

    let scale = cfg.min_scale.max(projection.variance_hint);
    let edge_score = (projection.value - line.value) / scale;
    let direction = if edge_score > 0.0 {
        Direction::Over
    } else {
        Direction::Under
    };

    Ok(EdgeResult {
        edge_score,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::StatKind;

    fn projection(value: f64, variance_hint: f64) -> Projection {
        Projection {
            stat: StatKind::Kills,
            value,
            variance_hint,
        }
    }

    #[test]
    fn test_positive_edge_is_over() {
        let cfg = PickConfig::default();
        let edge = score_edge(&projection(20.0, 2.0), &Line { value: 18.5 }, &cfg).unwrap();
        assert!(edge.edge_score > 0.0);
        assert_eq!(edge.direction, Direction::Over);
        assert!((edge.edge_score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_negative_edge_is_under() {
        let cfg = PickConfig::default();
        let edge = score_edge(&projection(17.0, 2.0), &Line { value: 18.5 }, &cfg).unwrap();
        assert!(edge.edge_score < 0.0);
        assert_eq!(edge.direction, Direction::Under);
    }

    #[test]
    fn test_exact_tie_breaks_under() {
        let cfg = PickConfig::default();
        let edge = score_edge(&projection(18.5, 2.0), &Line { value: 18.5 }, &cfg).unwrap();
        assert_eq!(edge.edge_score, 0.0);
        assert_eq!(edge.direction, Direction::Under);
    }

    #[test]
    fn test_scale_floored_at_min_scale() {
        let cfg = PickConfig::default();
        let tight = score_edge(&projection(19.5, 0.0), &Line { value: 18.5 }, &cfg).unwrap();
        assert!((tight.edge_score - 1.0 / cfg.min_scale).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_in_projection_for_fixed_line() {
        let cfg = PickConfig::default();
        let line = Line { value: 18.5 };
        let mut prev = f64::NEG_INFINITY;
        for i in 0..100 {
            let value = i as f64 * 0.5;
            let edge = score_edge(&projection(value, 2.0), &line, &cfg).unwrap();
            assert!(edge.edge_score >= prev);
            prev = edge.edge_score;
        }
    }

    #[test]
    fn test_negative_projection_rejected() {
        let cfg = PickConfig::default();
        assert!(matches!(
            score_edge(&projection(-0.1, 2.0), &Line { value: 0.5 }, &cfg),
            Err(PickError::DegenerateInput { .. })
        ));
    }
}
