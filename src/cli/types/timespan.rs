//! Stat window selection.

use crate::error::{PickError, Result};
use std::fmt;
use std::str::FromStr;

/// Time window the stats endpoint aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timespan {
    Days30,
    Days60,
    Days90,
    All,
}

impl Timespan {
    pub fn as_query(&self) -> &'static str {
        match self {
            Timespan::Days30 => "30",
            Timespan::Days60 => "60",
            Timespan::Days90 => "90",
            Timespan::All => "all",
        }
    }
}

impl Default for Timespan {
    fn default() -> Self {
        Timespan::Days30
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

impl FromStr for Timespan {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "30" => Ok(Timespan::Days30),
            "60" => Ok(Timespan::Days60),
            "90" => Ok(Timespan::Days90),
            "all" => Ok(Timespan::All),
            other => Err(PickError::InvalidTimespan(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_display() {
        for t in [
            Timespan::Days30,
            Timespan::Days60,
            Timespan::Days90,
            Timespan::All,
        ] {
            assert_eq!(t.to_string().parse::<Timespan>().unwrap(), t);
        }
    }

    #[test]
    fn test_rejects_unknown_windows() {
        assert!(matches!(
            "45".parse::<Timespan>(),
            Err(PickError::InvalidTimespan(_))
        ));
    }
}
