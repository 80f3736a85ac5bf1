//! Optimal row selection - the synthetic ideal alternative.

use crate::domain::foundation::{CriterionSpec, FiveComponentFuzzyNumber, Polarity};

/// Derives, per criterion, the ideal five-component number across all
/// alternatives: componentwise max for benefit criteria, componentwise min
/// for cost criteria.
///
/// Each of the five components is reduced independently, so the optimal
/// row's `l` comes from the alternatives' `l` values alone, never from its
/// own `m` or `u`. No clamping beyond the polarity selection.
pub struct OptimalRowSelector;

impl OptimalRowSelector {
    /// Selects the optimal row from the `alternatives x criteria` aggregate
    /// matrix.
    ///
    /// # Edge Cases
    /// - No alternatives: returns one zero number per criterion.
    pub fn select(
        aggregates: &[Vec<FiveComponentFuzzyNumber>],
        criteria: &[CriterionSpec],
    ) -> Vec<FiveComponentFuzzyNumber> {
        criteria
            .iter()
            .enumerate()
            .map(|(j, spec)| Self::reduce_column(aggregates, j, spec.polarity))
            .collect()
    }

    fn reduce_column(
        aggregates: &[Vec<FiveComponentFuzzyNumber>],
        criterion: usize,
        polarity: Polarity,
    ) -> FiveComponentFuzzyNumber {
        if aggregates.is_empty() {
            return FiveComponentFuzzyNumber::ZERO;
        }

        let (reduce, init): (fn(f64, f64) -> f64, f64) = match polarity {
            Polarity::Benefit => (f64::max, f64::NEG_INFINITY),
            Polarity::Cost => (f64::min, f64::INFINITY),
        };

        let column = aggregates.iter().map(|row| row[criterion]);
        FiveComponentFuzzyNumber {
            l: column.clone().map(|f| f.l).fold(init, reduce),
            l_prime: column.clone().map(|f| f.l_prime).fold(init, reduce),
            m: column.clone().map(|f| f.m).fold(init, reduce),
            u_prime: column.clone().map(|f| f.u_prime).fold(init, reduce),
            u: column.map(|f| f.u).fold(init, reduce),
        }
    }
}
