//! Core types for userdata.
//!
//! This crate provides:
//! - [`Handle`] - Opaque, totally ordered identifiers handed out by a host
//! - [`UserData`] - Non-owning, type-erased pointers to caller data
//! - [`BackendKind`] - The closed set of association strategies
//! - [`Error`] - Error types with context
//! - [`AtomTable`] - Interned integer aliases for property names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod handle;
pub mod intern;
pub mod kind;
pub mod userdata;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use handle::Handle;
pub use intern::{Atom, AtomTable};
pub use kind::BackendKind;
pub use userdata::UserData;
