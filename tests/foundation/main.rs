//! Integration tests for Layer 0: Foundation
//!
//! Tests for handles, backend selectors, atoms, userdata pointers, and errors.

mod atoms;
mod errors;
mod handles;
mod kinds;
