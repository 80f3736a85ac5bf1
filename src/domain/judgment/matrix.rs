//! Expert-by-criterion judgment matrix.

use serde::{Deserialize, Serialize};

/// A matrix of term codes indexed `[expert][criterion]`, holding the
/// criterion importance judgments.
///
/// Rows are expected to be rectangular; the problem builder resizes any
/// supplied matrix to the declared shape before a calculation runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentMatrix {
    cells: Vec<Vec<String>>,
}

impl JudgmentMatrix {
    /// Creates a matrix with every cell set to `fill`.
    pub fn filled(experts: usize, criteria: usize, fill: &str) -> Self {
        Self {
            cells: vec![vec![fill.to_string(); criteria]; experts],
        }
    }

    /// Creates a matrix from explicit rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { cells: rows }
    }

    /// Number of expert rows.
    pub fn expert_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of criterion columns.
    pub fn criterion_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell lookup; `None` outside the matrix.
    pub fn get(&self, expert: usize, criterion: usize) -> Option<&str> {
        self.cells
            .get(expert)
            .and_then(|row| row.get(criterion))
            .map(String::as_str)
    }

    /// Sets a cell, ignoring coordinates outside the matrix.
    pub fn set(&mut self, expert: usize, criterion: usize, code: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(expert).and_then(|row| row.get_mut(criterion)) {
            *cell = code.into();
        }
    }

    /// Reallocates to the new shape, preserving overlapping cells and
    /// padding new cells with `fill`.
    pub fn resized(&self, experts: usize, criteria: usize, fill: &str) -> Self {
        let mut next = Self::filled(experts, criteria, fill);
        for (e, row) in self.cells.iter().take(experts).enumerate() {
            for (c, code) in row.iter().take(criteria).enumerate() {
                next.cells[e][c] = code.clone();
            }
        }
        next
    }

    /// The rows in expert order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }
}
