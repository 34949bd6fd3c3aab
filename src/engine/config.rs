//! Tunable modeling constants, collected in one injectable structure.
//!
//! Every threshold the pipeline uses lives here rather than as a literal
//! buried in component logic, so tests can drive boundary behavior by
//! constructing a config instead of patching globals.

use crate::cli::types::RiskMode;

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PickConfig {
    /// Rounds assumed per pro map; converts per-round rates to per-map.
    pub rounds_per_map: f64,

    /// Blend weights for the consistency score; must sum to 1.
    pub w_rating: f64,
    pub w_kast: f64,

    /// Linear ramp mapping rating onto [0, 1]: `rating_ramp_start` maps to
    /// 0 and `rating_ramp_start + rating_ramp_span` maps to 1, clamped.
    pub rating_ramp_start: f64,
    pub rating_ramp_span: f64,

    /// What an average player looks like; projection adjustments are
    /// deviations from these.
    pub baseline_rating: f64,
    /// Baseline KAST as a fraction (0.72 == 72%).
    pub baseline_kast: f64,

    /// Projection sensitivity to rating/KAST deviations, per market.
    pub kill_rating_weight: f64,
    pub kill_kast_weight: f64,
    pub assist_rating_weight: f64,
    pub assist_kast_weight: f64,

    /// Typical per-map variation in stat units, per market.
    pub kill_spread: f64,
    pub assist_spread: f64,
    /// Fraction of the spread removed for a fully consistent player.
    pub spread_shrink: f64,

    /// Floor for the edge denominator; keeps near-zero variance from
    /// blowing up the score.
    pub min_scale: f64,

    /// Edges below `t_low` are Stay Away; edges at or above `t_high`
    /// earn High confidence.
    pub t_low: f64,
    pub t_high: f64,

    /// Variance hint above this downgrades confidence one tier.
    pub v_high: f64,

    /// Logistic slope for converting edge into P(Over).
    pub logistic_k: f64,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            rounds_per_map: 22.0,
            w_rating: 0.5,
            w_kast: 0.5,
            rating_ramp_start: 0.6,
            rating_ramp_span: 0.8,
            baseline_rating: 1.0,
            baseline_kast: 0.72,
            kill_rating_weight: 4.0,
            kill_kast_weight: 10.0,
            assist_rating_weight: 2.5,
            assist_kast_weight: 6.0,
            kill_spread: 3.0,
            assist_spread: 2.0,
            spread_shrink: 0.3,
            min_scale: 0.5,
            t_low: 0.25,
            t_high: 0.75,
            v_high: 2.8,
            logistic_k: 1.7,
        }
    }
}

impl PickConfig {
    /// Preset for a risk profile. Only the recommendation thresholds move;
    /// the modeling constants are shared across profiles.
    pub fn for_risk(mode: RiskMode) -> Self {
        let base = Self::default();
        match mode {
            RiskMode::Safe => Self {
                t_low: 0.45,
                t_high: 1.0,
                ..base
            },
            RiskMode::Standard => base,
            RiskMode::Yolo => Self {
                t_low: 0.15,
                t_high: 0.5,
                ..base
            },
        }
    }
}
