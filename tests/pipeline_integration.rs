//! Integration tests for the fuzzy ARAS calculation pipeline.
//!
//! These tests drive the whole flow the way a caller would:
//! 1. Build a `DecisionProblem` from counts, polarities, and judgments
//! 2. Run `compute`
//! 3. Inspect aggregates, the optimal row, utilities, and the winner
//!
//! Property tests at the bottom exercise randomized problems built from
//! the built-in vocabularies.

use proptest::prelude::*;

use fuzzy_aras::domain::analysis::{compute, ExpertAggregator};
use fuzzy_aras::domain::foundation::{CriterionSpec, FiveComponentFuzzyNumber, TriangularFuzzyNumber};
use fuzzy_aras::domain::judgment::{JudgmentCube, JudgmentMatrix};
use fuzzy_aras::DecisionProblem;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn assert_five_close(actual: FiveComponentFuzzyNumber, expected: FiveComponentFuzzyNumber) {
    assert_close(actual.l, expected.l);
    assert_close(actual.l_prime, expected.l_prime);
    assert_close(actual.m, expected.m);
    assert_close(actual.u_prime, expected.u_prime);
    assert_close(actual.u, expected.u);
}

/// A cube where every expert gives alternative `i` the code `codes[i]`
/// for every criterion.
fn uniform_cube(experts: usize, codes: &[&str], criteria: usize) -> JudgmentCube {
    JudgmentCube::from_layers(vec![
        codes
            .iter()
            .map(|code| vec![code.to_string(); criteria])
            .collect::<Vec<_>>();
        experts
    ])
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn ranks_good_above_fair_on_a_single_benefit_criterion() {
    // Two experts rate the criterion "M"; alternative A is "G" for both
    // experts, alternative B is "F" for both.
    let problem = DecisionProblem::builder()
        .criterion(CriterionSpec::benefit("Quality"))
        .alternatives(vec!["A", "B"])
        .experts(2)
        .criteria_judgments(JudgmentMatrix::filled(2, 1, "M"))
        .alternative_judgments(uniform_cube(2, &["G", "F"], 1))
        .build()
        .unwrap();

    let results = compute(&problem);

    // Criterion weight: both experts say (0.3, 0.5, 0.7).
    assert_five_close(
        results.criteria_weights[0],
        FiveComponentFuzzyNumber::new(0.3, 0.3, 0.5, 0.7, 0.7),
    );

    // A aggregates from (0.7, 0.7, 1.0) twice, B from (0.3, 0.5, 0.7).
    assert_five_close(
        results.alternative_aggregates[0][0],
        FiveComponentFuzzyNumber::new(0.7, 0.7, 0.7, 1.0, 1.0),
    );
    assert_five_close(
        results.alternative_aggregates[1][0],
        FiveComponentFuzzyNumber::new(0.3, 0.3, 0.5, 0.7, 0.7),
    );

    // Benefit polarity: the optimal row is A's aggregate.
    assert_eq!(results.optimal_row[0], results.alternative_aggregates[0][0]);

    // A matches the ideal, B trails it.
    assert_eq!(results.best_alternative_index, Some(0));
    assert_eq!(results.best_alternative_label(), Some("A"));
    assert_close(results.utilities[0], 1.0);
    assert_close(results.utilities[1], 141.0 / 217.0);
    assert!(results.utilities[0] > results.utilities[1]);
}

#[test]
fn cost_polarity_prefers_the_cheaper_alternative() {
    // On a cost criterion the smaller judgment is the better one, so the
    // "F" alternative must beat the "G" alternative.
    let problem = DecisionProblem::builder()
        .criterion(CriterionSpec::cost("Price"))
        .alternatives(vec!["Expensive", "Cheap"])
        .experts(1)
        .criteria_judgments(JudgmentMatrix::filled(1, 1, "M"))
        .alternative_judgments(uniform_cube(1, &["G", "F"], 1))
        .build()
        .unwrap();

    let results = compute(&problem);

    // Cost polarity: the optimal row is the componentwise minimum (B).
    assert_eq!(results.optimal_row[0], results.alternative_aggregates[1][0]);

    assert_eq!(results.best_alternative_index, Some(1));
    assert_eq!(results.best_alternative_label(), Some("Cheap"));
    assert_close(results.utilities[1], 1.0);
    assert_close(results.utilities[0], 348.0 / 685.0);
}

#[test]
fn tie_break_keeps_the_earliest_of_equal_alternatives() {
    // Alternatives 2 and 3 carry identical judgments; both outrank
    // alternative 1. The earlier index must win.
    let problem = DecisionProblem::builder()
        .criteria(vec![
            CriterionSpec::benefit("Quality"),
            CriterionSpec::benefit("Speed"),
        ])
        .alternatives(vec!["A1", "A2", "A3"])
        .experts(1)
        .criteria_judgments(JudgmentMatrix::filled(1, 2, "M"))
        .alternative_judgments(uniform_cube(1, &["F", "G", "G"], 2))
        .build()
        .unwrap();

    let results = compute(&problem);

    assert_eq!(results.utilities[1], results.utilities[2]);
    assert!(results.utilities[1] > results.utilities[0]);
    assert_eq!(results.best_alternative_index, Some(1));
}

#[test]
fn unknown_codes_zero_the_column_and_rank_neutrally() {
    // Codes missing from the vocabulary resolve to zero triples, the
    // column's upper-bound sum is zero, and the zero-guard wipes the
    // whole normalized column for every row including the optimal one.
    let problem = DecisionProblem::builder()
        .criterion(CriterionSpec::benefit("Quality"))
        .alternatives(vec!["A", "B"])
        .experts(1)
        .criteria_judgments(JudgmentMatrix::filled(1, 1, "M"))
        .alternative_judgments(uniform_cube(1, &["??", "??"], 1))
        .build()
        .unwrap();

    let results = compute(&problem);

    for row in &results.normalized_matrix {
        assert_eq!(row[0], FiveComponentFuzzyNumber::ZERO);
    }
    assert_eq!(results.utilities, vec![0.0, 0.0]);
    assert_eq!(results.defuzzified_scalars, vec![0.0, 0.0, 0.0]);
    assert_eq!(results.best_alternative_index, Some(0));
}

#[test]
fn optimal_row_is_an_extremum_per_polarity() {
    let problem = DecisionProblem::builder()
        .criteria(vec![
            CriterionSpec::benefit("Quality"),
            CriterionSpec::cost("Price"),
        ])
        .alternatives(vec!["A", "B", "C"])
        .experts(2)
        .criteria_judgments(JudgmentMatrix::from_rows(vec![
            vec!["MH".into(), "M".into()],
            vec!["H".into(), "ML".into()],
        ]))
        .alternative_judgments(JudgmentCube::from_layers(vec![
            vec![
                vec!["G".into(), "MP".into()],
                vec!["F".into(), "VG".into()],
                vec!["MG".into(), "P".into()],
            ],
            vec![
                vec!["VG".into(), "F".into()],
                vec!["MP".into(), "G".into()],
                vec!["F".into(), "MG".into()],
            ],
        ]))
        .build()
        .unwrap();

    let results = compute(&problem);

    // Benefit criterion: the optimal upper bound is the maximum over
    // alternatives.
    let max_u = results
        .alternative_aggregates
        .iter()
        .map(|row| row[0].u)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(results.optimal_row[0].u, max_u);

    // Cost criterion: the optimal lower bound is the minimum.
    let min_l = results
        .alternative_aggregates
        .iter()
        .map(|row| row[1].l)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(results.optimal_row[1].l, min_l);
}

#[test]
fn recomputation_is_deterministic() {
    let problem = DecisionProblem::builder()
        .criteria(vec![
            CriterionSpec::benefit("Quality"),
            CriterionSpec::cost("Price"),
        ])
        .alternatives(vec!["A", "B"])
        .experts(3)
        .build()
        .unwrap();

    let first = compute(&problem);
    let second = compute(&problem);
    assert_eq!(first, second);
}

// =============================================================================
// Property Tests
// =============================================================================

const CRITERIA_CODES: &[&str] = &["VL", "L", "ML", "M", "MH", "H", "VH"];
// "??" exercises the unknown-code degradation path.
const ALTERNATIVE_CODES: &[&str] = &["VP", "P", "MP", "F", "MG", "G", "VG", "??"];

fn criteria_code() -> impl Strategy<Value = String> {
    (0..CRITERIA_CODES.len()).prop_map(|i| CRITERIA_CODES[i].to_string())
}

fn alternative_code() -> impl Strategy<Value = String> {
    (0..ALTERNATIVE_CODES.len()).prop_map(|i| ALTERNATIVE_CODES[i].to_string())
}

fn problem_strategy() -> impl Strategy<Value = DecisionProblem> {
    (1usize..=3, 1usize..=3, 1usize..=3)
        .prop_flat_map(|(experts, alternatives, criteria)| {
            (
                Just((experts, alternatives)),
                prop::collection::vec(
                    prop::collection::vec(criteria_code(), criteria),
                    experts,
                ),
                prop::collection::vec(
                    prop::collection::vec(
                        prop::collection::vec(alternative_code(), criteria),
                        alternatives,
                    ),
                    experts,
                ),
                prop::collection::vec(any::<bool>(), criteria),
            )
        })
        .prop_map(|((experts, alternatives), criteria_rows, cube_layers, polarities)| {
            let criteria: Vec<CriterionSpec> = polarities
                .iter()
                .enumerate()
                .map(|(j, benefit)| {
                    let label = format!("C{}", j + 1);
                    if *benefit {
                        CriterionSpec::benefit(label)
                    } else {
                        CriterionSpec::cost(label)
                    }
                })
                .collect();
            let labels: Vec<String> = (0..alternatives).map(|i| format!("A{}", i + 1)).collect();

            DecisionProblem::builder()
                .criteria(criteria)
                .alternatives(labels)
                .experts(experts)
                .criteria_judgments(JudgmentMatrix::from_rows(criteria_rows))
                .alternative_judgments(JudgmentCube::from_layers(cube_layers))
                .build()
                .unwrap()
        })
}

proptest! {
    /// Utilities are finite, non-negative, and never exceed the optimal
    /// row's ratio of 1; the winner is the first maximum.
    #[test]
    fn utilities_stay_relative_to_the_optimal_row(problem in problem_strategy()) {
        let results = compute(&problem);

        prop_assert_eq!(results.utilities.len(), problem.alternative_count());
        for utility in &results.utilities {
            prop_assert!(utility.is_finite());
            prop_assert!(*utility >= 0.0);
            prop_assert!(*utility <= 1.0 + 1e-9);
        }

        let best = results.best_alternative_index.unwrap();
        prop_assert!(best < problem.alternative_count());

        let max = results
            .utilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let first_max = results.utilities.iter().position(|u| *u == max).unwrap();
        prop_assert_eq!(best, first_max);
    }

    /// Each utility equals its row's defuzzified scalar divided by the
    /// optimal scalar (or zero under the zero-guard).
    #[test]
    fn utilities_are_scalar_ratios(problem in problem_strategy()) {
        let results = compute(&problem);
        let optimal = results.defuzzified_scalars[0];

        for (i, utility) in results.utilities.iter().enumerate() {
            let expected = if optimal != 0.0 {
                results.defuzzified_scalars[i + 1] / optimal
            } else {
                0.0
            };
            prop_assert_eq!(*utility, expected);
        }
    }

    /// Every normalized and weighted cell stays finite regardless of the
    /// judgments, including unknown codes and cost criteria.
    #[test]
    fn no_infinity_escapes_the_pipeline(problem in problem_strategy()) {
        let results = compute(&problem);

        for row in results.normalized_matrix.iter().chain(results.weighted_matrix.iter()) {
            for cell in row {
                prop_assert!(cell.is_finite());
            }
        }
        for scalar in &results.defuzzified_scalars {
            prop_assert!(scalar.is_finite());
        }
    }

    /// When every expert hands in the same positive triple, aggregation
    /// collapses to `{l, l, m, u, u}`.
    #[test]
    fn aggregation_identity_for_uniform_judgments(
        l in 0.01f64..0.9,
        mode_spread in 0.0f64..0.05,
        upper_spread in 0.01f64..0.05,
        experts in 1usize..6,
    ) {
        let m = l + mode_spread;
        let u = m + upper_spread;
        let judgments = vec![TriangularFuzzyNumber::new(l, m, u); experts];

        let agg = ExpertAggregator::aggregate(&judgments);

        prop_assert!((agg.l - l).abs() < 1e-9);
        prop_assert!((agg.l_prime - l).abs() < 1e-9);
        prop_assert!((agg.m - m).abs() < 1e-9);
        prop_assert!((agg.u_prime - u).abs() < 1e-9);
        prop_assert!((agg.u - u).abs() < 1e-9);
    }

    /// Resizing a judgment cube preserves every overlapping cell.
    #[test]
    fn resize_preserves_overlapping_cells(
        experts in 1usize..=3,
        alternatives in 1usize..=3,
        criteria in 1usize..=3,
        grow_e in 0usize..=2,
        grow_a in 0usize..=2,
        grow_c in 0usize..=2,
    ) {
        let mut cube = JudgmentCube::filled(experts, alternatives, criteria, "G");
        cube.set(0, 0, 0, "VP");
        cube.set(experts - 1, alternatives - 1, criteria - 1, "VG");

        let resized = cube.resized(experts + grow_e, alternatives + grow_a, criteria + grow_c, "F");

        for e in 0..experts {
            for a in 0..alternatives {
                for c in 0..criteria {
                    prop_assert_eq!(cube.get(e, a, c), resized.get(e, a, c));
                }
            }
        }
        if grow_e > 0 {
            prop_assert_eq!(resized.get(experts, 0, 0), Some("F"));
        }
    }
}
