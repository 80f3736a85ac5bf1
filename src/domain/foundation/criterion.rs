//! Criterion specification - label plus optimization direction.

use serde::{Deserialize, Serialize};

use super::Polarity;

/// One criterion column of the decision problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    /// Display label for the criterion.
    pub label: String,
    /// Whether higher raw values are desirable.
    pub polarity: Polarity,
}

impl CriterionSpec {
    /// Creates a criterion spec.
    pub fn new(label: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            label: label.into(),
            polarity,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(label: impl Into<String>) -> Self {
        Self::new(label, Polarity::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(label: impl Into<String>) -> Self {
        Self::new(label, Polarity::Cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benefit_constructor_sets_polarity() {
        let spec = CriterionSpec::benefit("Quality");
        assert_eq!(spec.label, "Quality");
        assert!(spec.polarity.is_benefit());
    }

    #[test]
    fn cost_constructor_sets_polarity() {
        let spec = CriterionSpec::cost("Price");
        assert!(spec.polarity.is_cost());
    }
}
