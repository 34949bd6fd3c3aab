//! Filter types for narrowing pick output on the command line.

use crate::engine::types::{Confidence, StatKind};
use std::fmt;

/// Restrict output to one stat market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatKindFilter {
    Kills,
    Assists,
}

impl StatKindFilter {
    pub fn to_stat(self) -> StatKind {
        match self {
            StatKindFilter::Kills => StatKind::Kills,
            StatKindFilter::Assists => StatKind::Assists,
        }
    }
}

impl fmt::Display for StatKindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_stat())
    }
}

/// Drop picks below a confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfidenceFilter {
    Low,
    Medium,
    High,
}

impl ConfidenceFilter {
    pub fn to_confidence(self) -> Confidence {
        match self {
            ConfidenceFilter::Low => Confidence::Low,
            ConfidenceFilter::Medium => Confidence::Medium,
            ConfidenceFilter::High => Confidence::High,
        }
    }
}

impl fmt::Display for ConfidenceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_confidence())
    }
}
