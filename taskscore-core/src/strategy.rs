//! Weight profiles ("strategies") for combining component scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative influence of each component score on the total.
///
/// The four weights are meant to sum to 1.0; this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl Weights {
    pub const fn new(urgency: f64, importance: f64, effort: f64, dependencies: f64) -> Self {
        Self {
            urgency,
            importance,
            effort,
            dependencies,
        }
    }

    pub fn sum(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependencies
    }
}

/// Built-in scoring strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Even spread with a lean towards deadlines.
    #[default]
    SmartBalance,
    /// Quick wins first.
    FastestWins,
    /// Importance dominates.
    HighImpact,
    /// Due date dominates.
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    pub fn weights(&self) -> Weights {
        match self {
            Strategy::SmartBalance => Weights::new(0.35, 0.30, 0.15, 0.20),
            Strategy::FastestWins => Weights::new(0.20, 0.20, 0.50, 0.10),
            Strategy::HighImpact => Weights::new(0.15, 0.60, 0.10, 0.15),
            Strategy::DeadlineDriven => Weights::new(0.60, 0.20, 0.05, 0.15),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    /// Lenient lookup: unknown names fall back to `smart_balance`.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for strict strategy parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == key)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
