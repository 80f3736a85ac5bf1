//! Linguistic term - a named qualitative judgment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TriangularFuzzyNumber;

/// A named qualitative judgment mapped to a triangular fuzzy number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticTerm {
    /// Short code, unique within its vocabulary (e.g. "VH").
    pub code: String,
    /// Human-readable label (e.g. "Very high (VH)").
    pub label: String,
    /// Triangular value the code resolves to.
    pub value: TriangularFuzzyNumber,
}

impl LinguisticTerm {
    /// Creates a linguistic term.
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        value: TriangularFuzzyNumber,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            value,
        }
    }
}
