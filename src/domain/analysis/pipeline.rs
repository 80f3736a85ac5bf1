//! The calculation pipeline - one pure pass from judgments to ranking.

use tracing::debug;

use crate::domain::foundation::{FiveComponentFuzzyNumber, TriangularFuzzyNumber};
use crate::domain::judgment::JudgmentResolver;

use super::{
    CalculationResults, DecisionProblem, Defuzzifier, ExpertAggregator, Normalizer,
    OptimalRowSelector, UtilityRanker, Weighter,
};

/// Runs the full fuzzy ARAS pipeline over `problem`.
///
/// Pure and synchronous: every invocation recomputes from the judgment
/// matrices, nothing is cached between calls, and concurrent invocations
/// are trivially safe. An incomplete setup (zero criteria, experts, or
/// alternatives) yields [`CalculationResults::empty`] instead of an error.
pub fn compute(problem: &DecisionProblem) -> CalculationResults {
    let experts = problem.expert_count();
    let alternatives = problem.alternative_count();
    let criteria = problem.criterion_count();

    debug!(experts, alternatives, criteria, "running fuzzy ARAS calculation");

    if experts == 0 || alternatives == 0 || criteria == 0 {
        return CalculationResults::empty();
    }

    let criteria_triangular =
        JudgmentResolver::resolve_matrix(problem.criteria_judgments(), problem.criteria_vocabulary());
    let alternative_triangular = JudgmentResolver::resolve_cube(
        problem.alternative_judgments(),
        problem.alternative_vocabulary(),
    );

    // One weight per criterion, aggregated across experts.
    let criteria_weights: Vec<FiveComponentFuzzyNumber> = (0..criteria)
        .map(|j| {
            let column: Vec<TriangularFuzzyNumber> = (0..experts)
                .map(|k| cell_2d(&criteria_triangular, k, j))
                .collect();
            ExpertAggregator::aggregate(&column)
        })
        .collect();

    // One aggregate per (alternative, criterion) cell.
    let alternative_aggregates: Vec<Vec<FiveComponentFuzzyNumber>> = (0..alternatives)
        .map(|i| {
            (0..criteria)
                .map(|j| {
                    let cell: Vec<TriangularFuzzyNumber> = (0..experts)
                        .map(|k| cell_3d(&alternative_triangular, k, i, j))
                        .collect();
                    ExpertAggregator::aggregate(&cell)
                })
                .collect()
        })
        .collect();

    let optimal_row = OptimalRowSelector::select(&alternative_aggregates, problem.criteria());

    // Combined matrix: optimal row first, then each alternative.
    let mut combined = Vec::with_capacity(1 + alternatives);
    combined.push(optimal_row.clone());
    combined.extend(alternative_aggregates.iter().cloned());

    let normalized_matrix = Normalizer::normalize(&combined, problem.criteria());
    let weighted_matrix = Weighter::apply(&normalized_matrix, &criteria_weights);
    let row_sums = Defuzzifier::row_sums(&weighted_matrix);
    let defuzzified_scalars = Defuzzifier::scalars(&row_sums);
    let ranking = UtilityRanker::rank(&defuzzified_scalars);

    debug!(best = ?ranking.best_index, "fuzzy ARAS calculation finished");

    CalculationResults {
        criteria_triangular,
        alternative_triangular,
        criteria_weights,
        alternative_aggregates,
        optimal_row,
        normalized_matrix,
        weighted_matrix,
        row_sums,
        defuzzified_scalars,
        utilities: ranking.utilities,
        best_alternative_index: ranking.best_index,
        alternative_labels: problem.alternative_labels().to_vec(),
    }
}

/// Missing cells read as zero, the same degradation as an unknown code.
fn cell_2d(matrix: &[Vec<TriangularFuzzyNumber>], row: usize, col: usize) -> TriangularFuzzyNumber {
    matrix
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .unwrap_or(TriangularFuzzyNumber::ZERO)
}

fn cell_3d(
    cube: &[Vec<Vec<TriangularFuzzyNumber>>],
    layer: usize,
    row: usize,
    col: usize,
) -> TriangularFuzzyNumber {
    cube.get(layer)
        .and_then(|l| l.get(row))
        .and_then(|r| r.get(col))
        .copied()
        .unwrap_or(TriangularFuzzyNumber::ZERO)
}
