//! Resolution of judgment codes into triangular fuzzy numbers.

use crate::domain::foundation::TriangularFuzzyNumber;
use crate::domain::vocabulary::TermVocabulary;

use super::{JudgmentCube, JudgmentMatrix};

/// Maps matrices of judgment term codes to matrices of triangular numbers
/// via vocabulary lookup.
///
/// Resolution is total: unknown codes become the zero number, so a
/// judgment referencing a removed term degrades instead of failing.
pub struct JudgmentResolver;

impl JudgmentResolver {
    /// Resolves an expert-by-criterion matrix.
    pub fn resolve_matrix(
        matrix: &JudgmentMatrix,
        vocabulary: &TermVocabulary,
    ) -> Vec<Vec<TriangularFuzzyNumber>> {
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|code| vocabulary.resolve(code)).collect())
            .collect()
    }

    /// Resolves an expert-by-alternative-by-criterion cube.
    pub fn resolve_cube(
        cube: &JudgmentCube,
        vocabulary: &TermVocabulary,
    ) -> Vec<Vec<Vec<TriangularFuzzyNumber>>> {
        cube.layers()
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|row| row.iter().map(|code| vocabulary.resolve(code)).collect())
                    .collect()
            })
            .collect()
    }
}
