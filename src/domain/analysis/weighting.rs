//! Criterion weighting of the normalized matrix.

use crate::domain::foundation::FiveComponentFuzzyNumber;

/// Multiplies every normalized cell componentwise by its criterion's
/// aggregated weight.
pub struct Weighter;

impl Weighter {
    /// Applies `weights` (one per criterion) to every row of `normalized`.
    pub fn apply(
        normalized: &[Vec<FiveComponentFuzzyNumber>],
        weights: &[FiveComponentFuzzyNumber],
    ) -> Vec<Vec<FiveComponentFuzzyNumber>> {
        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(cell, weight)| *cell * *weight)
                    .collect()
            })
            .collect()
    }
}
