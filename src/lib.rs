//! Valorant Prop-Pick Engine
//!
//! A Rust library and CLI that turns vlr.gg player statistics into ranked
//! Over/Under prop-pick recommendations.
//!
//! ## How it works
//!
//! - **Normalize**: raw per-round stats become per-map [`PlayerStat`]
//!   snapshots; players with missing required stats are skipped, not fatal
//! - **Project**: per-map kills/assists expectations from the player's
//!   baseline rate plus rating and KAST adjustments
//! - **Synthesize**: a prop-style half-step line anchored on the baseline
//! - **Score**: a z-score-like edge between projection and line
//! - **Recommend**: Lean Over / Lean Under / Stay Away with a confidence
//!   tier and an approximate P(Over)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vlr_picks::{engine, vlr::types::StatsSegment, PickConfig};
//!
//! # fn example() -> vlr_picks::Result<()> {
//! let raw: Vec<StatsSegment> = serde_json::from_str(
//!     r#"[{
//!         "player": "TenZ", "org": "SEN", "rating": "1.18",
//!         "kills_per_round": "0.86", "assists_per_round": "0.24",
//!         "kill_assists_survived_traded": "74%", "rounds_played": "264"
//!     }]"#,
//! )?;
//!
//! let batch = engine::build_picks(&raw, None, &PickConfig::default())?;
//! for pick in &batch.picks {
//!     println!("{} {} -> {}", pick.handle, pick.stat, pick.recommendation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline is pure computation over an in-memory batch: no caching,
//! no persistence, and deterministic output for identical input.

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod vlr;

// Re-export commonly used types
pub use cli::types::{Region, RiskMode, Timespan};
pub use engine::types::{
    Confidence, Direction, Pick, PickBatch, PlayerId, PlayerStat, Recommendation, StatKind,
};
pub use engine::PickConfig;
pub use error::{PickError, Result};
