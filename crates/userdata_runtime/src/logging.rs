//! Logging setup for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use userdata_foundation::{Error, ErrorKind, Result};

/// Parses a level name such as `warn` or `debug`.
///
/// # Errors
///
/// Returns an error if the name is not a tracing level.
pub fn parse_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| Error::invalid_config(format!("unknown log level \"{level}\"")))
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `level` when
/// `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Level, ansi: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(level, env.as_deref());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}

/// Builds the filter from `RUST_LOG` directives, or from `level` alone when
/// they are unset, blank or malformed.
fn env_filter(level: Level, directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}
