//! Benchmark harness, session, and CLI for userdata.
//!
//! This crate provides:
//! - [`benchmark_userdata_access`] - The timed, self-checking access loop
//! - [`App`] - A session owning a host, a grid of windows, their values, and a store
//! - [`BenchConfig`] and [`GridInfo`] - Run configuration
//! - [`Prompt`] - Interactive `g`/`q` driver over a line editor
//! - Logging setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod app;
pub mod bench;
pub mod config;
pub mod editor;
pub mod grid;
pub mod logging;
pub mod prompt;

pub use app::App;
pub use bench::{BenchReport, benchmark_userdata_access, time_samples};
pub use config::BenchConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use grid::{CellInfo, GridInfo};
pub use prompt::{Action, Prompt};
