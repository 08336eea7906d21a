//! Host window table, association backends, and the backend factory.
//!
//! This crate provides:
//! - [`WindowHost`] - The windowing-system collaborator, with [`HostWindows`]
//!   as an in-process implementation
//! - [`UserdataStore`] - The contract every backend satisfies
//! - Eight backends, from a direct-slot array to an unsorted vector
//! - [`Userdata`] - The closed set of backends, built by kind

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backend;
pub mod factory;
pub mod host;
pub mod store;

pub use backend::{
    DirectSlotArray, HashMapStore, NativeSlot, OrderedMapStore, PROPERTY_NAME, PropertyByAtom,
    PropertyByName, SortedVecStore, UnsortedVecStore,
};
pub use factory::Userdata;
pub use host::{HostCapabilities, HostWindows, WindowHost};
pub use store::UserdataStore;
