//! Vocabulary module - Linguistic term scales.
//!
//! Judgments are entered as short term codes ("M", "VH", ...) and resolved
//! against an immutable vocabulary snapshot at calculation time. Two
//! built-in scales ship with the engine: one for criterion importance, one
//! for alternative performance.

mod defaults;
mod term;
mod vocabulary;

pub use defaults::{
    default_alternative_vocabulary, default_criteria_vocabulary, DEFAULT_ALTERNATIVE_CODE,
    DEFAULT_CRITERIA_CODE,
};
pub use term::LinguisticTerm;
pub use vocabulary::{TermVocabulary, MIN_TERMS};
