//! A benchmark session.
//!
//! [`App`] plays the windowing application: it creates a main window and one
//! label window per grid cell, gives every label a random value, binds the
//! values through the configured store, and measures on request.

use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use userdata_foundation::{Handle, Result, UserData};
use userdata_store::{HostWindows, Userdata, UserdataStore, WindowHost};

use crate::bench::{BenchReport, benchmark_userdata_access};
use crate::config::BenchConfig;
use crate::grid::GridInfo;

/// Text of the main window until the first measurement.
pub const MAIN_WINDOW_TEXT: &str = "Press 'g' to measure userdata access";

/// A session owning a host, its windows, their values, and a store.
///
/// The value array is allocated once and never resized, so the pointers the
/// store holds stay valid for the session's lifetime.
#[derive(Debug)]
pub struct App {
    config: BenchConfig,
    host: Rc<HostWindows>,
    main_window: Handle,
    labels: Vec<Handle>,
    data: Vec<Cell<i32>>,
    store: Userdata,
}

impl App {
    /// Builds the store, creates the windows, and binds a value to each label.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid or the backend
    /// needs a host primitive that is not available.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let count = config.handle_count()?;

        let host = Rc::new(HostWindows::with_capabilities(config.capabilities));
        let dyn_host: Rc<dyn WindowHost> = host.clone();
        let store = Userdata::with_capacity(config.kind, &dyn_host, count)?;

        let main_window = host.create_window(MAIN_WINDOW_TEXT);
        let labels = create_labels(&host, &config.grid);
        let data = create_data(labels.len(), config.seed);

        let mut app = Self {
            config,
            host,
            main_window,
            labels,
            data,
            store,
        };
        app.bind_userdata();

        info!(
            kind = %app.config.kind,
            handles = app.labels.len(),
            samples = app.config.samples,
            "session ready"
        );
        Ok(app)
    }

    fn bind_userdata(&mut self) {
        for (label, value) in self.labels.iter().zip(self.data.iter()) {
            self.store.set(*label, UserData::from_ref(value));
        }
        debug!(count = self.labels.len(), "bound userdata");
    }

    /// Runs one measurement with the configured sample count.
    ///
    /// The report is also written to the main window's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend lost or confused an association.
    pub fn benchmark(&mut self) -> Result<BenchReport> {
        // SAFETY: every label was bound to a cell of `self.data`, which lives
        // as long as `self` and is never reallocated.
        let report = unsafe {
            benchmark_userdata_access(
                &mut self.store,
                &self.labels,
                &self.data,
                self.config.samples,
            )
        }?;

        self.host.set_window_text(self.main_window, report.to_string());
        info!(
            kind = %report.kind,
            average_ns = report.average_ns,
            total_ns = report.total_ns,
            "{report}"
        );
        Ok(report)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &HostWindows {
        &self.host
    }

    /// Returns the main window.
    #[must_use]
    pub fn main_window(&self) -> Handle {
        self.main_window
    }

    /// Returns the label windows, in binding order.
    #[must_use]
    pub fn labels(&self) -> &[Handle] {
        &self.labels
    }

    /// Returns a copy of the current values, in label order.
    #[must_use]
    pub fn values(&self) -> Vec<i32> {
        self.data.iter().map(Cell::get).collect()
    }

    /// Returns the store.
    #[must_use]
    pub fn store(&self) -> &Userdata {
        &self.store
    }

    /// Destroys the main window. Label windows go with the session.
    pub fn quit(&mut self) {
        self.host.destroy_window(self.main_window);
        debug!("main window destroyed");
    }
}

fn create_labels(host: &HostWindows, grid: &GridInfo) -> Vec<Handle> {
    grid.cells().map(|cell| host.create_window(cell.to_string())).collect()
}

fn create_data(count: usize, seed: u64) -> Vec<Cell<i32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Cell::new(rng.gen_range(0..BenchConfig::VALUE_RANGE)))
        .collect()
}
