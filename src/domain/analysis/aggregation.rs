//! Expert aggregation - collapsing triangular judgments into
//! five-component numbers.

use tracing::trace;

use crate::domain::foundation::{FiveComponentFuzzyNumber, TriangularFuzzyNumber};

/// Substitute for non-positive values inside a geometric mean.
///
/// Lower bounds of the boundary terms ("Very low", "Very poor") are
/// exactly zero, so the substitution is hit in ordinary use, not only on
/// malformed input.
pub const GEOMETRIC_MEAN_EPSILON: f64 = 1e-10;

/// Computes the n-th root of the product of `values`.
///
/// Non-positive values are replaced by [`GEOMETRIC_MEAN_EPSILON`] before
/// multiplying, keeping the mean defined over the full judgment domain.
/// The substitution is applied uniformly; the mean is never zeroed out
/// wholesale. Returns 0 for an empty slice.
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    if values.iter().any(|v| *v <= 0.0) {
        trace!("substituting epsilon for non-positive geometric mean input");
    }

    let product: f64 = values
        .iter()
        .map(|v| if *v > 0.0 { *v } else { GEOMETRIC_MEAN_EPSILON })
        .product();
    product.powf(1.0 / values.len() as f64)
}

/// Collapses one triangular judgment per expert into a five-component
/// number: the outer components keep min/max, the inner components carry
/// geometric means.
pub struct ExpertAggregator;

impl ExpertAggregator {
    /// Aggregates the judgments for a single cell.
    ///
    /// # Edge Cases
    /// - Empty input: returns the zero number.
    /// - Single expert: min, max, and means all collapse to that expert's
    ///   triple.
    pub fn aggregate(judgments: &[TriangularFuzzyNumber]) -> FiveComponentFuzzyNumber {
        if judgments.is_empty() {
            return FiveComponentFuzzyNumber::ZERO;
        }

        let lowers: Vec<f64> = judgments.iter().map(|t| t.l).collect();
        let modes: Vec<f64> = judgments.iter().map(|t| t.m).collect();
        let uppers: Vec<f64> = judgments.iter().map(|t| t.u).collect();

        FiveComponentFuzzyNumber {
            l: lowers.iter().copied().fold(f64::INFINITY, f64::min),
            l_prime: geometric_mean(&lowers),
            m: geometric_mean(&modes),
            u_prime: geometric_mean(&uppers),
            u: uppers.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}
