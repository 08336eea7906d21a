//! userdata - Pluggable handle-to-userdata association stores
//!
//! This crate re-exports all layers of the userdata system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: userdata_runtime    — Benchmark harness, session, CLI
//! Layer 1: userdata_store      — Host window table, backends, factory
//! Layer 0: userdata_foundation — Core types (Handle, UserData, Error)
//! ```

pub use userdata_foundation as foundation;
pub use userdata_runtime as runtime;
pub use userdata_store as store;
