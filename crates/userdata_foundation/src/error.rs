//! Error types for the userdata system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! A `get` that finds nothing is not an error: stores return `None`.

use std::fmt;

use thiserror::Error;

use crate::handle::Handle;
use crate::kind::BackendKind;

/// Result type alias for userdata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for userdata operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates an unsupported backend error.
    #[must_use]
    pub fn unsupported(kind: BackendKind, capability: &'static str) -> Self {
        Self::new(ErrorKind::Unsupported { kind, capability })
    }

    /// Creates a missing userdata error.
    #[must_use]
    pub fn missing_userdata(handle: Handle) -> Self {
        Self::new(ErrorKind::MissingUserData(handle))
    }

    /// Creates a benchmark mismatch error.
    #[must_use]
    pub fn benchmark_mismatch(index: usize, expected: i64, actual: i64) -> Self {
        Self::new(ErrorKind::BenchmarkMismatch {
            index,
            expected,
            actual,
        })
    }

    /// Returns true for errors caused by bad input rather than a broken backend.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidBackend(_)
                | ErrorKind::InvalidConfig(_)
                | ErrorKind::Unsupported { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Backend selector is neither a valid index nor a known name.
    #[error("invalid backend \"{0}\": expected a backend index in [0, 7] or a backend name")]
    InvalidBackend(String),

    /// Malformed or out-of-range configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The host lacks the primitive a backend delegates to.
    #[error("backend {kind} is unavailable: host has no {capability}")]
    Unsupported {
        /// The requested backend.
        kind: BackendKind,
        /// The missing host capability.
        capability: &'static str,
    },

    /// A handle bound before the benchmark has no userdata.
    #[error("no userdata associated with {0:?}")]
    MissingUserData(Handle),

    /// Post-benchmark invariant check failed.
    #[error("benchmark data mismatch at index {index}: expected {expected}, got {actual}")]
    BenchmarkMismatch {
        /// Position of the first mismatching value.
        index: usize,
        /// Snapshot value plus sample count.
        expected: i64,
        /// Value found after the run.
        actual: i64,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Description of the backend under test.
    pub backend: Option<String>,
    /// Number of samples the run was configured with.
    pub samples: Option<usize>,
    /// Number of handles in the population.
    pub handles: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend description.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Sets the run dimensions.
    #[must_use]
    pub fn with_run(mut self, samples: usize, handles: usize) -> Self {
        self.samples = Some(samples);
        self.handles = Some(handles);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(backend) = &self.backend {
            write!(f, "in {backend}")?;
        }
        if let (Some(samples), Some(handles)) = (self.samples, self.handles) {
            if self.backend.is_some() {
                write!(f, " ")?;
            }
            write!(f, "({samples} samples x {handles} handles)")?;
        }
        Ok(())
    }
}
