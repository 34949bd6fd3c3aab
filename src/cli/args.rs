//! CLI argument definitions and parsing structures.

use super::types::{ConfidenceFilter, Region, RiskMode, StatKindFilter, Timespan};
use clap::{Args, Parser, Subcommand};

/// Common fetch arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// Stats region (vlr.gg region code).
    #[clap(long, short, value_enum, default_value_t = Region::Na)]
    pub region: Region,

    /// Stat window in days: 30, 60, 90, or all.
    #[clap(long, short, default_value_t = Timespan::default())]
    pub timespan: Timespan,

    /// Keep only the strongest N players by rating before scoring.
    #[clap(long, default_value_t = 40)]
    pub pool: usize,
}

#[derive(Debug, Parser)]
#[clap(name = "vlr-picks", about = "Valorant prop-pick projections and edge-scored recommendations")]
pub struct VlrPicks {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build ranked Over/Under prop picks for a region and window.
    ///
    /// Fetches player stats, projects per-map kills and assists,
    /// synthesizes half-step lines, and ranks picks by edge strength.
    Picks {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Risk profile controlling the recommendation thresholds.
        #[clap(long, value_enum, default_value_t = RiskMode::Standard)]
        risk: RiskMode,

        /// Restrict to one stat market (repeatable): `--stat kills`.
        #[clap(long = "stat", value_enum)]
        stats: Option<Vec<StatKindFilter>>,

        /// Filter by player handle or team (substring match).
        #[clap(long, short = 'n')]
        search: Option<String>,

        /// Drop picks below this confidence tier.
        #[clap(long, value_enum)]
        min_confidence: Option<ConfidenceFilter>,

        /// Show only the top N picks after ranking.
        #[clap(long)]
        top: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print per-pick explanations and skipped-player reasons.
        #[clap(long)]
        verbose: bool,
    },

    /// Show normalized per-map player stats without scoring picks.
    Stats {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// List skipped players and their reasons.
        #[clap(long)]
        verbose: bool,
    },
}
