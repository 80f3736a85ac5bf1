//! Term vocabulary - an immutable, ordered set of linguistic terms.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{TriangularFuzzyNumber, ValidationError};

use super::LinguisticTerm;

/// Minimum number of terms a vocabulary must hold to be usable.
pub const MIN_TERMS: usize = 2;

/// An ordered set of linguistic terms, consumed as an immutable snapshot
/// per calculation run.
///
/// Editing never mutates a vocabulary in place; [`TermVocabulary::with_term`]
/// returns a new snapshot, so a calculation holding the old one is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermVocabulary {
    terms: Vec<LinguisticTerm>,
}

impl TermVocabulary {
    /// Creates a vocabulary, validating the term count, code uniqueness,
    /// and each term's triangular invariant.
    pub fn try_new(terms: Vec<LinguisticTerm>) -> Result<Self, ValidationError> {
        if terms.len() < MIN_TERMS {
            return Err(ValidationError::too_few_terms(MIN_TERMS, terms.len()));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for term in &terms {
            if term.code.is_empty() {
                return Err(ValidationError::empty_field("term code"));
            }
            if !seen.insert(term.code.as_str()) {
                return Err(ValidationError::duplicate_term_code(&term.code));
            }
            TriangularFuzzyNumber::try_new(term.value.l, term.value.m, term.value.u)?;
        }

        Ok(Self { terms })
    }

    /// Looks up a term code.
    ///
    /// Unknown codes resolve to the zero number rather than failing; a
    /// stale judgment cell must not abort a calculation.
    pub fn resolve(&self, code: &str) -> TriangularFuzzyNumber {
        self.terms
            .iter()
            .find(|t| t.code == code)
            .map(|t| t.value)
            .unwrap_or(TriangularFuzzyNumber::ZERO)
    }

    /// Returns a new vocabulary with `term` appended, or replacing the
    /// existing term carrying the same code.
    pub fn with_term(&self, term: LinguisticTerm) -> Result<Self, ValidationError> {
        let mut terms = self.terms.clone();
        match terms.iter().position(|t| t.code == term.code) {
            Some(index) => terms[index] = term,
            None => terms.push(term),
        }
        Self::try_new(terms)
    }

    /// The terms in vocabulary order.
    pub fn terms(&self) -> &[LinguisticTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the vocabulary holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when a term with `code` exists.
    pub fn contains(&self, code: &str) -> bool {
        self.terms.iter().any(|t| t.code == code)
    }
}
