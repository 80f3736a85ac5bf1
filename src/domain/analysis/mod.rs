//! Analysis Module - Pure domain services for the fuzzy ARAS pipeline.
//!
//! This module contains stateless functions that turn resolved judgments
//! into a ranked result.
//!
//! # Components
//!
//! - `ExpertAggregator` - triangular judgments -> five-component aggregates
//! - `OptimalRowSelector` - synthetic ideal alternative per criterion
//! - `Normalizer` - benefit/cost-aware rescaling of the combined matrix
//! - `Weighter` - criterion weighting of normalized rows
//! - `Defuzzifier` - row summation and scalar collapse
//! - `UtilityRanker` - degrees of utility and the winning alternative
//! - `compute` - the one-call orchestration of all stages
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. Degenerate arithmetic is
//! guarded at the stage where it arises, so every stage's output is finite
//! and the pipeline as a whole never fails.

mod aggregation;
mod defuzzification;
mod normalization;
mod optimal;
mod pipeline;
mod problem;
mod ranking;
mod results;
mod weighting;

// Re-export all public types
pub use aggregation::{geometric_mean, ExpertAggregator, GEOMETRIC_MEAN_EPSILON};
pub use defuzzification::Defuzzifier;
pub use normalization::Normalizer;
pub use optimal::OptimalRowSelector;
pub use pipeline::compute;
pub use problem::{DecisionProblem, DecisionProblemBuilder};
pub use ranking::{Ranking, UtilityRanker};
pub use results::CalculationResults;
pub use weighting::Weighter;
