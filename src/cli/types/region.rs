//! Competitive regions recognized by the vlr.gg stats endpoint.

use std::fmt;

/// Region code passed straight through as the `region` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Region {
    /// North America
    Na,
    /// Europe
    Eu,
    /// Asia-Pacific
    Ap,
    /// South America
    Sa,
    /// Japan
    Jp,
    /// Oceania
    Oce,
    /// MENA
    Mn,
}

impl Region {
    pub fn as_query(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Ap => "ap",
            Region::Sa => "sa",
            Region::Jp => "jp",
            Region::Oce => "oce",
            Region::Mn => "mn",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}
