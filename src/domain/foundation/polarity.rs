//! Criterion polarity - whether larger raw values are desirable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optimization direction of a criterion.
///
/// Polarity drives both optimal-value selection (max vs. min) and the
/// normalization formula (direct vs. reciprocal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Higher raw values are desirable.
    #[default]
    Benefit,
    /// Lower raw values are desirable.
    Cost,
}

impl Polarity {
    /// Returns true for a benefit criterion.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Polarity::Benefit)
    }

    /// Returns true for a cost criterion.
    pub fn is_cost(&self) -> bool {
        matches!(self, Polarity::Cost)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "Benefit",
            Polarity::Cost => "Cost",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
