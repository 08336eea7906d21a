//! Integration tests for Layer 2: Runtime
//!
//! Tests for configuration, grid population, the benchmark harness, and
//! whole sessions.

mod bench;
