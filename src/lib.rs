//! Fuzzy ARAS - Multi-Criteria Decision Analysis Engine
//!
//! This crate implements the fuzzy ARAS (Additive Ratio ASsessment) method:
//! linguistic judgments from several experts are aggregated into fuzzy
//! numbers, measured against a synthetic optimal alternative, and ranked
//! by degree of utility.

pub mod domain;

pub use domain::analysis::{compute, CalculationResults, DecisionProblem};
