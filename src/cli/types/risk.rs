//! Risk profiles controlling how aggressive the recommendations are.

use std::fmt;

/// How strong an edge has to be before the engine takes a side.
///
/// Safe demands conviction, yolo takes thinner edges; standard sits at
/// the documented default thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RiskMode {
    Safe,
    #[default]
    Standard,
    Yolo,
}

impl fmt::Display for RiskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskMode::Safe => "safe",
            RiskMode::Standard => "standard",
            RiskMode::Yolo => "yolo",
        };
        write!(f, "{}", s)
    }
}
