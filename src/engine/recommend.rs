//! Recommendation mapper: edge score into a verdict, confidence tier, and
//! an approximate probability of clearing the line.

use crate::engine::config::PickConfig;
use crate::engine::types::{
    Confidence, Direction, EdgeResult, Line, PlayerStat, Projection, Recommendation,
};

/// Verdict for one pick before it is assembled and ranked.
#[derive(Debug, Clone, Copy)]
pub struct Assessment {
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub p_over: f64,
}

/// Map an edge and its projection's variance hint to a verdict.
///
/// Edges inside `t_low` of zero are Stay Away. Confidence follows the
/// edge magnitude (`t_high` and above earns High), then a wide variance
/// hint knocks it down one tier regardless of how big the edge is.
pub fn assess(edge: &EdgeResult, variance_hint: f64, cfg: &PickConfig) -> Assessment {
    let magnitude = edge.edge_score.abs();

    let recommendation = if magnitude < cfg.t_low {
        Recommendation::StayAway
    } else {
        match edge.direction {
            Direction::Over => Recommendation::LeanOver,
            Direction::Under => Recommendation::LeanUnder,
        }
    };

    let base = if magnitude >= cfg.t_high {
        Confidence::High
    } else if magnitude >= cfg.t_low {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    let confidence = if variance_hint > cfg.v_high {
        base.downgrade()
    } else {
        base
    };

    Assessment {
        recommendation,
        confidence,
        p_over: probability_over(edge.edge_score, cfg),
    }
}

/// Squash an edge score into P(Over) with a logistic curve.
///
/// Exactly 0.5 at zero edge, strictly inside (0, 1) everywhere; the tails
/// are clipped to [0.01, 0.99] so the output never claims certainty.
pub fn probability_over(edge_score: f64, cfg: &PickConfig) -> f64 {
    if edge_score == 0.0 {
        return 0.5;
    }
    let p = 1.0 / (1.0 + (-cfg.logistic_k * edge_score).exp());
    p.clamp(0.01, 0.99)
}

/// Plain-English explanation for a pick. Purely a formatting concern:
/// identical inputs always produce the identical string.
pub fn explain(
    player: &PlayerStat,
    projection: &Projection,
    line: &Line,
    edge: &EdgeResult,
    assessment: &Assessment,
) -> String {
    let maps_txt = match player.maps_played {
        Some(m) => format!(" over ~{} maps", m),
        None => " in this window".to_string(),
    };
    let base = player.per_map(projection.stat);
    let gap = (projection.value - line.value).abs();

    let prob_txt = match assessment.recommendation {
        Recommendation::LeanOver => {
            format!(" About {:.0}% to clear the line.", assessment.p_over * 100.0)
        }
        Recommendation::LeanUnder => format!(
            " About {:.0}% to stay under.",
            (1.0 - assessment.p_over) * 100.0
        ),
        Recommendation::StayAway => " Close to a coin flip either side.".to_string(),
    };

    format!(
        "{} ({} {}) averages {:.1} {} per map{}. Projection {:.1} against the {:.1} line leans {} by {:.1} (edge {:+.2}).{} Verdict: {} ({} confidence).",
        player.handle,
        player.team,
        player.role,
        base,
        projection.stat,
        maps_txt,
        projection.value,
        line.value,
        edge.direction,
        gap,
        edge.edge_score,
        prob_txt,
        assessment.recommendation,
        assessment.confidence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{PlayerId, Role, StatKind};

    fn edge(score: f64) -> EdgeResult {
        EdgeResult {
            edge_score: score,
            direction: if score > 0.0 {
                Direction::Over
            } else {
                Direction::Under
            },
        }
    }

    #[test]
    fn test_small_edges_stay_away() {
        let cfg = PickConfig::default();
        let a = assess(&edge(0.1), 2.0, &cfg);
        assert_eq!(a.recommendation, Recommendation::StayAway);
        assert_eq!(a.confidence, Confidence::Low);
    }

    #[test]
    fn test_directional_edges_lean_with_the_sign() {
        let cfg = PickConfig::default();
        assert_eq!(
            assess(&edge(0.5), 2.0, &cfg).recommendation,
            Recommendation::LeanOver
        );
        assert_eq!(
            assess(&edge(-0.5), 2.0, &cfg).recommendation,
            Recommendation::LeanUnder
        );
    }

    #[test]
    fn test_large_edges_earn_high_confidence() {
        let cfg = PickConfig::default();
        let a = assess(&edge(1.2), 2.0, &cfg);
        assert_eq!(a.confidence, Confidence::High);
    }

    #[test]
    fn test_wide_variance_downgrades_one_tier() {
        let cfg = PickConfig::default();
        let a = assess(&edge(1.2), cfg.v_high + 0.1, &cfg);
        assert_eq!(a.confidence, Confidence::Medium);

        let b = assess(&edge(0.5), cfg.v_high + 0.1, &cfg);
        assert_eq!(b.confidence, Confidence::Low);
    }

    #[test]
    fn test_thresholds_are_injectable() {
        let cfg = PickConfig {
            t_low: 0.6,
            t_high: 0.9,
            ..PickConfig::default()
        };
        assert_eq!(
            assess(&edge(0.5), 2.0, &cfg).recommendation,
            Recommendation::StayAway
        );
        assert_eq!(assess(&edge(0.95), 2.0, &cfg).confidence, Confidence::High);
    }

    #[test]
    fn test_probability_bounds_and_midpoint() {
        let cfg = PickConfig::default();
        assert_eq!(probability_over(0.0, &cfg), 0.5);
        for score in [-50.0, -3.0, -0.4, 0.4, 3.0, 50.0] {
            let p = probability_over(score, &cfg);
            assert!(p > 0.0 && p < 1.0, "p_over {p} out of bounds for {score}");
        }
        assert!(probability_over(1.0, &cfg) > 0.5);
        assert!(probability_over(-1.0, &cfg) < 0.5);
    }

    #[test]
    fn test_probability_monotonic_in_edge() {
        let cfg = PickConfig::default();
        let mut prev = 0.0;
        for i in -40..=40 {
            let p = probability_over(i as f64 * 0.1, &cfg);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_explanation_is_deterministic() {
        let cfg = PickConfig::default();
        let player = PlayerStat {
            player_id: PlayerId::from_org_handle("SEN", "TenZ"),
            handle: "TenZ".to_string(),
            team: "SEN".to_string(),
            role: Role::Duelist,
            kills_per_map: 18.7,
            assists_per_map: 3.3,
            rating: 1.2,
            kast: 75.0,
            maps_played: Some(12),
            consistency: 0.75,
        };
        let projection = Projection {
            stat: StatKind::Kills,
            value: 19.8,
            variance_hint: 2.325,
        };
        let line = Line { value: 18.5 };
        let e = edge(0.56);
        let a = assess(&e, projection.variance_hint, &cfg);

        let first = explain(&player, &projection, &line, &e, &a);
        let second = explain(&player, &projection, &line, &e, &a);
        assert_eq!(first, second);
        assert!(first.contains("TenZ"));
        assert!(first.contains("18.5"));
        assert!(first.contains("Lean Over"));
    }

    #[test]
    fn test_unknown_maps_reads_as_window() {
        let cfg = PickConfig::default();
        let player = PlayerStat {
            player_id: PlayerId::from_org_handle("SEN", "TenZ"),
            handle: "TenZ".to_string(),
            team: "SEN".to_string(),
            role: Role::Unknown,
            kills_per_map: 18.7,
            assists_per_map: 3.3,
            rating: 1.2,
            kast: 75.0,
            maps_played: None,
            consistency: 0.75,
        };
        let projection = Projection {
            stat: StatKind::Kills,
            value: 19.8,
            variance_hint: 2.325,
        };
        let e = edge(0.56);
        let a = assess(&e, projection.variance_hint, &cfg);
        let text = explain(&player, &projection, &Line { value: 18.5 }, &e, &a);
        assert!(text.contains("in this window"));
        assert!(!text.contains("~"));
    }
}
