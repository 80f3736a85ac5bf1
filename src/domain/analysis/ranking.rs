//! Utility computation and ranking against the optimal row.

use serde::{Deserialize, Serialize};

/// Ranking output: degrees of utility indexed by alternative, plus the
/// winner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Degree of utility per alternative, relative to the optimal scalar.
    pub utilities: Vec<f64>,
    /// Index of the best alternative; `None` when there are none.
    pub best_index: Option<usize>,
}

/// Computes each alternative's degree of utility relative to the optimal
/// scalar and picks the winning alternative.
pub struct UtilityRanker;

impl UtilityRanker {
    /// Ranks from the defuzzified scalars, indexed with the optimal row
    /// first and one entry per alternative after it.
    ///
    /// # Edge Cases
    /// - Optimal scalar of zero: every utility is 0 (no division).
    /// - Ties: the earliest index wins (strict `>` while scanning).
    /// - No alternatives: empty utilities, no winner.
    pub fn rank(scalars: &[f64]) -> Ranking {
        if scalars.len() <= 1 {
            return Ranking::default();
        }

        let optimal = scalars[0];
        let utilities: Vec<f64> = scalars[1..]
            .iter()
            .map(|s| if optimal != 0.0 { s / optimal } else { 0.0 })
            .collect();

        let mut best_index = None;
        let mut best_utility = f64::NEG_INFINITY;
        for (i, utility) in utilities.iter().enumerate() {
            if *utility > best_utility {
                best_utility = *utility;
                best_index = Some(i);
            }
        }

        Ranking {
            utilities,
            best_index,
        }
    }
}
