//! Calculation results - every intermediate and final pipeline product.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FiveComponentFuzzyNumber, TriangularFuzzyNumber};

/// All products of one calculation run.
///
/// In the combined matrices (`normalized_matrix`, `weighted_matrix`,
/// `row_sums`, `defuzzified_scalars`) row 0 is the optimal row and
/// alternative `i` sits at row `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Resolved criteria judgments, `[expert][criterion]`.
    pub criteria_triangular: Vec<Vec<TriangularFuzzyNumber>>,
    /// Resolved alternative judgments, `[expert][alternative][criterion]`.
    pub alternative_triangular: Vec<Vec<Vec<TriangularFuzzyNumber>>>,
    /// Aggregated criterion weights, one per criterion.
    pub criteria_weights: Vec<FiveComponentFuzzyNumber>,
    /// Aggregated alternative performance, `[alternative][criterion]`.
    pub alternative_aggregates: Vec<Vec<FiveComponentFuzzyNumber>>,
    /// Ideal value per criterion.
    pub optimal_row: Vec<FiveComponentFuzzyNumber>,
    /// Normalized combined matrix, `[1 + alternatives][criterion]`.
    pub normalized_matrix: Vec<Vec<FiveComponentFuzzyNumber>>,
    /// Weighted combined matrix, same shape.
    pub weighted_matrix: Vec<Vec<FiveComponentFuzzyNumber>>,
    /// Componentwise row sums of the weighted matrix.
    pub row_sums: Vec<FiveComponentFuzzyNumber>,
    /// Defuzzified scalar per combined row; index 0 is the optimal value.
    pub defuzzified_scalars: Vec<f64>,
    /// Degree of utility per alternative.
    pub utilities: Vec<f64>,
    /// Winning alternative, `None` when there are no alternatives.
    pub best_alternative_index: Option<usize>,
    /// Alternative labels, copied from the problem for presentation.
    pub alternative_labels: Vec<String>,
}

impl CalculationResults {
    /// Neutral result for an incomplete setup (zero experts, criteria, or
    /// alternatives).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Label of the winning alternative, if any.
    pub fn best_alternative_label(&self) -> Option<&str> {
        self.best_alternative_index
            .and_then(|i| self.alternative_labels.get(i))
            .map(String::as_str)
    }
}
