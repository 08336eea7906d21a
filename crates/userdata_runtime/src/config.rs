//! Configuration for a benchmark session.

use userdata_foundation::{BackendKind, Error, Result};
use userdata_store::HostCapabilities;

use crate::grid::GridInfo;

/// Configuration for a benchmark session.
///
/// Controls which backend is measured, how many handles it is measured over,
/// and how many passes each measurement takes.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Backend under test.
    pub kind: BackendKind,

    /// Grid of label windows; one handle per cell.
    pub grid: GridInfo,

    /// Passes over every handle per measurement.
    pub samples: usize,

    /// Seed for the initial values.
    pub seed: u64,

    /// Primitives the host offers. Host-backed kinds need the matching one.
    pub capabilities: HostCapabilities,
}

impl BenchConfig {
    /// Passes per measurement unless configured otherwise.
    pub const DEFAULT_SAMPLES: usize = 100;

    /// Seed used unless configured otherwise.
    pub const DEFAULT_SEED: u64 = 4711;

    /// Exclusive upper bound of the initial values.
    pub const VALUE_RANGE: i32 = 4711;

    /// Creates a configuration for the given backend with default settings.
    #[must_use]
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            grid: GridInfo::default(),
            samples: Self::DEFAULT_SAMPLES,
            seed: Self::DEFAULT_SEED,
            capabilities: HostCapabilities::all(),
        }
    }

    /// Builder method to set the grid.
    #[must_use]
    pub fn with_grid(mut self, grid: GridInfo) -> Self {
        self.grid = grid;
        self
    }

    /// Builder method to set the sample count.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the host capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns the number of handles the grid produces.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is too large to count.
    pub fn handle_count(&self) -> Result<usize> {
        self.grid
            .checked_cell_count()
            .ok_or_else(|| Error::invalid_config(format!("grid {} is too large", self.grid)))
    }

    /// Checks that the configuration describes a runnable benchmark.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count is zero or the grid overflows.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::invalid_config("sample count must be at least 1"));
        }
        self.handle_count().map(|_| ())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(BackendKind::HashMap)
    }
}
