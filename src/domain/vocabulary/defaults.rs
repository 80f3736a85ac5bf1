//! Built-in linguistic scales for criterion importance and alternative
//! performance.

use once_cell::sync::Lazy;

use crate::domain::foundation::TriangularFuzzyNumber;

use super::{LinguisticTerm, TermVocabulary};

/// Fill code for newly introduced criteria judgment cells.
pub const DEFAULT_CRITERIA_CODE: &str = "M";

/// Fill code for newly introduced alternative judgment cells.
pub const DEFAULT_ALTERNATIVE_CODE: &str = "G";

fn term(code: &str, label: &str, l: f64, m: f64, u: f64) -> LinguisticTerm {
    LinguisticTerm::new(code, label, TriangularFuzzyNumber::new(l, m, u))
}

static CRITERIA_VOCABULARY: Lazy<TermVocabulary> = Lazy::new(|| {
    TermVocabulary::try_new(vec![
        term("VL", "Very low (VL)", 0.0, 0.0, 0.1),
        term("L", "Low (L)", 0.0, 0.1, 0.3),
        term("ML", "Medium low (ML)", 0.1, 0.3, 0.5),
        term("M", "Medium (M)", 0.3, 0.5, 0.7),
        term("MH", "Medium high (MH)", 0.5, 0.7, 0.9),
        term("H", "High (H)", 0.7, 0.7, 1.0),
        term("VH", "Very high (VH)", 0.9, 1.0, 1.0),
    ])
    .expect("built-in criteria vocabulary is valid")
});

static ALTERNATIVE_VOCABULARY: Lazy<TermVocabulary> = Lazy::new(|| {
    TermVocabulary::try_new(vec![
        term("VP", "Very poor (VP)", 0.0, 0.0, 0.1),
        term("P", "Poor (P)", 0.0, 0.1, 0.3),
        term("MP", "Medium poor (MP)", 0.1, 0.3, 0.5),
        term("F", "Fair (F)", 0.3, 0.5, 0.7),
        term("MG", "Medium good (MG)", 0.5, 0.7, 0.9),
        term("G", "Good (G)", 0.7, 0.7, 1.0),
        term("VG", "Very good (VG)", 0.9, 1.0, 1.0),
    ])
    .expect("built-in alternative vocabulary is valid")
});

/// The built-in seven-term criterion importance scale (VL .. VH).
pub fn default_criteria_vocabulary() -> &'static TermVocabulary {
    &CRITERIA_VOCABULARY
}

/// The built-in seven-term alternative performance scale (VP .. VG).
pub fn default_alternative_vocabulary() -> &'static TermVocabulary {
    &ALTERNATIVE_VOCABULARY
}
