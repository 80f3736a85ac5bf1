//! Normalization of the combined matrix, benefit/cost aware.

use tracing::warn;

use crate::domain::foundation::{CriterionSpec, FiveComponentFuzzyNumber, Polarity};

/// Rescales the combined (optimal + alternatives) matrix per criterion.
///
/// Benefit criteria divide each cell componentwise by the column's sum of
/// upper bounds. Cost criteria first invert each cell (reciprocal with the
/// component pairs swapped), then divide by the column's sum of reciprocal
/// lower bounds. A degenerate denominator zeroes the whole column instead
/// of letting `NaN` or an infinity reach downstream stages.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes `combined`, shaped `(1 + alternatives) x criteria` with
    /// the optimal row first. The output has the same shape.
    pub fn normalize(
        combined: &[Vec<FiveComponentFuzzyNumber>],
        criteria: &[CriterionSpec],
    ) -> Vec<Vec<FiveComponentFuzzyNumber>> {
        let mut normalized =
            vec![vec![FiveComponentFuzzyNumber::ZERO; criteria.len()]; combined.len()];

        for (j, spec) in criteria.iter().enumerate() {
            match spec.polarity {
                Polarity::Benefit => Self::normalize_benefit(combined, &mut normalized, j),
                Polarity::Cost => Self::normalize_cost(combined, &mut normalized, j),
            }
        }

        normalized
    }

    /// Benefit: divide by the column sum of upper bounds.
    fn normalize_benefit(
        combined: &[Vec<FiveComponentFuzzyNumber>],
        normalized: &mut [Vec<FiveComponentFuzzyNumber>],
        j: usize,
    ) {
        let denominator: f64 = combined.iter().map(|row| row[j].u).sum();
        if denominator == 0.0 {
            warn!(criterion = j, "zero denominator in benefit normalization, column zeroed");
            return;
        }

        for (i, row) in combined.iter().enumerate() {
            normalized[i][j] = row[j].div_scalar(denominator);
        }
    }

    /// Cost: invert each cell, then divide by the column sum of reciprocal
    /// lower bounds. A zero lower bound contributes `+inf` to the sum,
    /// which trips the guard and zeroes the column.
    fn normalize_cost(
        combined: &[Vec<FiveComponentFuzzyNumber>],
        normalized: &mut [Vec<FiveComponentFuzzyNumber>],
        j: usize,
    ) {
        let denominator: f64 = combined.iter().map(|row| 1.0 / row[j].l).sum();
        if denominator == 0.0 || !denominator.is_finite() {
            warn!(criterion = j, "degenerate denominator in cost normalization, column zeroed");
            return;
        }

        for (i, row) in combined.iter().enumerate() {
            normalized[i][j] = row[j].invert().div_scalar(denominator);
        }
    }
}
