//! Judgment module - Matrices of linguistic judgment codes.
//!
//! The surrounding data layer edits these containers cell by cell and
//! resizes them when dimension counts change. Resizing reallocates and
//! copies: overlapping cells are preserved, new cells are padded with a
//! default code.

mod cube;
mod matrix;
mod resolver;

pub use cube::JudgmentCube;
pub use matrix::JudgmentMatrix;
pub use resolver::JudgmentResolver;

/// Upper bound on alternative, criterion, and expert counts.
pub const MAX_DIMENSION: usize = 20;

/// Resizes a label vector, keeping existing labels and naming new entries
/// `"{prefix} {index + 1}"`.
pub fn resized_labels(labels: &[String], count: usize, prefix: &str) -> Vec<String> {
    (0..count)
        .map(|i| {
            labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("{} {}", prefix, i + 1))
        })
        .collect()
}
