//! The grid of label windows that makes up the handle population.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use userdata_foundation::{Error, Result};

/// Grid dimensions: rows × columns per layer, stacked `layers` deep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridInfo {
    /// Number of rows per layer.
    pub rows: usize,
    /// Number of columns per layer.
    pub columns: usize,
    /// Number of layers.
    pub layers: usize,
}

/// Position of one cell in a [`GridInfo`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInfo {
    /// Row within the layer.
    pub row: usize,
    /// Column within the layer.
    pub column: usize,
    /// Layer index.
    pub layer: usize,
}

impl GridInfo {
    /// Creates a grid.
    #[must_use]
    pub const fn new(rows: usize, columns: usize, layers: usize) -> Self {
        Self {
            rows,
            columns,
            layers,
        }
    }

    /// Returns the number of cells, or `None` on overflow.
    #[must_use]
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)?.checked_mul(self.layers)
    }

    /// Returns the number of cells.
    ///
    /// # Panics
    ///
    /// Panics if the count overflows `usize`; use
    /// [`GridInfo::checked_cell_count`] on unvalidated input.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.checked_cell_count().expect("grid cell count overflows usize")
    }

    /// Returns the cell at a linear index, filling each layer row by row.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<CellInfo> {
        let per_layer = self.rows.checked_mul(self.columns)?;
        if index >= self.checked_cell_count()? {
            return None;
        }
        let within = index % per_layer;
        Some(CellInfo {
            row: within / self.columns,
            column: within % self.columns,
            layer: index / per_layer,
        })
    }

    /// Iterates over every cell in index order.
    pub fn cells(&self) -> impl Iterator<Item = CellInfo> + '_ {
        (0..self.checked_cell_count().unwrap_or(0)).filter_map(move |i| self.cell_at(i))
    }
}

impl Default for GridInfo {
    fn default() -> Self {
        Self::new(10, 10, 10)
    }
}

impl fmt::Display for GridInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.rows, self.columns, self.layers)
    }
}

impl fmt::Display for CellInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{} c{} l{}", self.row, self.column, self.layer)
    }
}

impl FromStr for GridInfo {
    type Err = Error;

    /// Parses `"rows,columns,layers"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || Error::invalid_config(format!("incorrect grid \"{s}\": expected rows, columns and layers"));

        let mut tokens = s.split(',').map(|t| t.trim().parse::<usize>());
        let mut next = || tokens.next().and_then(std::result::Result::ok);
        let (Some(rows), Some(columns), Some(layers)) = (next(), next(), next()) else {
            return Err(invalid());
        };
        if tokens.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(rows, columns, layers))
    }
}
