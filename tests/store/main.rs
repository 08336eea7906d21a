//! Integration tests for Layer 1: Store
//!
//! Tests for every backend through the factory, the host, and the
//! documented scenarios.

mod backends;
mod scenarios;
