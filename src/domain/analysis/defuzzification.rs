//! Row summation and defuzzification.

use crate::domain::foundation::FiveComponentFuzzyNumber;

/// Sums each weighted row across criteria, then collapses the sums into
/// crisp scalars.
pub struct Defuzzifier;

impl Defuzzifier {
    /// Componentwise sum of each row's weighted numbers.
    pub fn row_sums(weighted: &[Vec<FiveComponentFuzzyNumber>]) -> Vec<FiveComponentFuzzyNumber> {
        weighted
            .iter()
            .map(|row| {
                row.iter()
                    .fold(FiveComponentFuzzyNumber::ZERO, |acc, cell| acc + *cell)
            })
            .collect()
    }

    /// Defuzzifies each row sum: the arithmetic mean of its five
    /// components.
    pub fn scalars(sums: &[FiveComponentFuzzyNumber]) -> Vec<f64> {
        sums.iter().map(|sum| sum.defuzzify()).collect()
    }
}
