//! Expert-by-alternative-by-criterion judgment cube.

use serde::{Deserialize, Serialize};

/// A three-dimensional array of term codes indexed
/// `[expert][alternative][criterion]`, holding the alternative
/// performance judgments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentCube {
    cells: Vec<Vec<Vec<String>>>,
}

impl JudgmentCube {
    /// Creates a cube with every cell set to `fill`.
    pub fn filled(experts: usize, alternatives: usize, criteria: usize, fill: &str) -> Self {
        Self {
            cells: vec![vec![vec![fill.to_string(); criteria]; alternatives]; experts],
        }
    }

    /// Creates a cube from explicit layers.
    pub fn from_layers(layers: Vec<Vec<Vec<String>>>) -> Self {
        Self { cells: layers }
    }

    /// Number of expert layers.
    pub fn expert_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of alternative rows.
    pub fn alternative_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Number of criterion columns.
    pub fn criterion_count(&self) -> usize {
        self.cells
            .first()
            .and_then(|layer| layer.first())
            .map_or(0, Vec::len)
    }

    /// Cell lookup; `None` outside the cube.
    pub fn get(&self, expert: usize, alternative: usize, criterion: usize) -> Option<&str> {
        self.cells
            .get(expert)
            .and_then(|layer| layer.get(alternative))
            .and_then(|row| row.get(criterion))
            .map(String::as_str)
    }

    /// Sets a cell, ignoring coordinates outside the cube.
    pub fn set(
        &mut self,
        expert: usize,
        alternative: usize,
        criterion: usize,
        code: impl Into<String>,
    ) {
        if let Some(cell) = self
            .cells
            .get_mut(expert)
            .and_then(|layer| layer.get_mut(alternative))
            .and_then(|row| row.get_mut(criterion))
        {
            *cell = code.into();
        }
    }

    /// Reallocates to the new shape, preserving overlapping cells and
    /// padding new cells with `fill`.
    pub fn resized(
        &self,
        experts: usize,
        alternatives: usize,
        criteria: usize,
        fill: &str,
    ) -> Self {
        let mut next = Self::filled(experts, alternatives, criteria, fill);
        for (e, layer) in self.cells.iter().take(experts).enumerate() {
            for (a, row) in layer.iter().take(alternatives).enumerate() {
                for (c, code) in row.iter().take(criteria).enumerate() {
                    next.cells[e][a][c] = code.clone();
                }
            }
        }
        next
    }

    /// The layers in expert order.
    pub fn layers(&self) -> &[Vec<Vec<String>>] {
        &self.cells
    }
}
