//! Five-component fuzzy number - the aggregate of several expert judgments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// A five-component fuzzy number `(l, l', m, u', u)`.
///
/// Produced by aggregating triangular judgments across experts: the outer
/// components keep the extremes (min of lowers, max of uppers) while the
/// inner components carry geometric means. No ordering invariant holds
/// between the components; mixing min/max with geometric means can
/// legitimately yield `l' >= m` and similar inversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FiveComponentFuzzyNumber {
    /// Minimum of the lower bounds.
    pub l: f64,
    /// Geometric mean of the lower bounds.
    pub l_prime: f64,
    /// Geometric mean of the modal values.
    pub m: f64,
    /// Geometric mean of the upper bounds.
    pub u_prime: f64,
    /// Maximum of the upper bounds.
    pub u: f64,
}

impl FiveComponentFuzzyNumber {
    /// The zero number.
    pub const ZERO: Self = Self {
        l: 0.0,
        l_prime: 0.0,
        m: 0.0,
        u_prime: 0.0,
        u: 0.0,
    };

    /// Creates a five-component number from raw components.
    pub const fn new(l: f64, l_prime: f64, m: f64, u_prime: f64, u: f64) -> Self {
        Self {
            l,
            l_prime,
            m,
            u_prime,
            u,
        }
    }

    /// Divides every component by a scalar.
    pub fn div_scalar(self, denominator: f64) -> Self {
        Self {
            l: self.l / denominator,
            l_prime: self.l_prime / denominator,
            m: self.m / denominator,
            u_prime: self.u_prime / denominator,
            u: self.u / denominator,
        }
    }

    /// Reciprocal of every component, with the `l`/`u` and `l'`/`u'` pairs
    /// swapped so the result keeps the inverted orientation.
    ///
    /// A zero component inverts to `+inf`; callers guard the denominator
    /// before the inverted value reaches downstream stages.
    pub fn invert(self) -> Self {
        Self {
            l: 1.0 / self.u,
            l_prime: 1.0 / self.u_prime,
            m: 1.0 / self.m,
            u_prime: 1.0 / self.l_prime,
            u: 1.0 / self.l,
        }
    }

    /// Collapses to a single scalar: the arithmetic mean of the five
    /// components.
    pub fn defuzzify(self) -> f64 {
        (self.l + self.l_prime + self.m + self.u_prime + self.u) / 5.0
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.l.is_finite()
            && self.l_prime.is_finite()
            && self.m.is_finite()
            && self.u_prime.is_finite()
            && self.u.is_finite()
    }
}

impl Add for FiveComponentFuzzyNumber {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            l: self.l + other.l,
            l_prime: self.l_prime + other.l_prime,
            m: self.m + other.m,
            u_prime: self.u_prime + other.u_prime,
            u: self.u + other.u,
        }
    }
}

impl Mul for FiveComponentFuzzyNumber {
    type Output = Self;

    /// Componentwise product, used for criterion weighting.
    fn mul(self, other: Self) -> Self {
        Self {
            l: self.l * other.l,
            l_prime: self.l_prime * other.l_prime,
            m: self.m * other.m,
            u_prime: self.u_prime * other.u_prime,
            u: self.u * other.u,
        }
    }
}

impl fmt::Display for FiveComponentFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}, {:.4}, {:.4})",
            self.l, self.l_prime, self.m, self.u_prime, self.u
        )
    }
}
