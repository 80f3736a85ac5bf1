//! Triangular fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A triangular fuzzy number `(l, m, u)`: lower bound, most-likely value,
/// upper bound.
///
/// Linguistic terms map to triangular numbers; unknown judgment codes
/// resolve to [`TriangularFuzzyNumber::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangularFuzzyNumber {
    /// Lower bound.
    pub l: f64,
    /// Most-likely (modal) value.
    pub m: f64,
    /// Upper bound.
    pub u: f64,
}

impl TriangularFuzzyNumber {
    /// The zero number, substituted for unresolved term codes.
    pub const ZERO: Self = Self { l: 0.0, m: 0.0, u: 0.0 };

    /// Creates a triangular number without validating the bounds.
    pub const fn new(l: f64, m: f64, u: f64) -> Self {
        Self { l, m, u }
    }

    /// Creates a triangular number, rejecting triples that are not ordered
    /// `l <= m <= u` or that collapse to a single point (`l == u`).
    ///
    /// Used when a vocabulary is edited; the built-in vocabularies satisfy
    /// the invariant by construction.
    pub fn try_new(l: f64, m: f64, u: f64) -> Result<Self, ValidationError> {
        if !(l <= m && m <= u) {
            return Err(ValidationError::invalid_triangle(format!(
                "components must satisfy l <= m <= u, got ({}, {}, {})",
                l, m, u
            )));
        }
        if l == u {
            return Err(ValidationError::invalid_triangle(format!(
                "lower and upper bounds must differ, got ({}, {}, {})",
                l, m, u
            )));
        }
        Ok(Self { l, m, u })
    }

    /// Returns true if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.l == 0.0 && self.m == 0.0 && self.u == 0.0
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.l, self.m, self.u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_ordered_triple() {
        let tri = TriangularFuzzyNumber::try_new(0.3, 0.5, 0.7).unwrap();
        assert_eq!(tri, TriangularFuzzyNumber::new(0.3, 0.5, 0.7));
    }

    #[test]
    fn try_new_accepts_touching_lower_and_middle() {
        assert!(TriangularFuzzyNumber::try_new(0.0, 0.0, 0.1).is_ok());
        assert!(TriangularFuzzyNumber::try_new(0.9, 1.0, 1.0).is_ok());
    }

    #[test]
    fn try_new_rejects_unordered_triple() {
        assert!(TriangularFuzzyNumber::try_new(0.5, 0.3, 0.7).is_err());
        assert!(TriangularFuzzyNumber::try_new(0.3, 0.8, 0.7).is_err());
    }

    #[test]
    fn try_new_rejects_degenerate_point() {
        assert!(TriangularFuzzyNumber::try_new(0.5, 0.5, 0.5).is_err());
    }

    #[test]
    fn zero_is_all_zero() {
        assert!(TriangularFuzzyNumber::ZERO.is_zero());
        assert!(!TriangularFuzzyNumber::new(0.0, 0.1, 0.3).is_zero());
    }

    #[test]
    fn displays_two_decimal_places() {
        let tri = TriangularFuzzyNumber::new(0.3, 0.5, 0.7);
        assert_eq!(format!("{}", tri), "(0.30, 0.50, 0.70)");
    }

    #[test]
    fn serializes_to_json() {
        let tri = TriangularFuzzyNumber::new(0.3, 0.5, 0.7);
        let json = serde_json::to_string(&tri).unwrap();
        assert_eq!(json, r#"{"l":0.3,"m":0.5,"u":0.7}"#);
    }

    #[test]
    fn deserializes_from_json() {
        let tri: TriangularFuzzyNumber =
            serde_json::from_str(r#"{"l":0.0,"m":0.1,"u":0.3}"#).unwrap();
        assert_eq!(tri, TriangularFuzzyNumber::new(0.0, 0.1, 0.3));
    }
}
