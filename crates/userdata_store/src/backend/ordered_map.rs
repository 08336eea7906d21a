//! Balanced ordered tree keyed by handle.

use std::collections::BTreeMap;

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::store::UserdataStore;

/// `BTreeMap<Handle, UserData>`.
///
/// O(log n) for both operations. Handles iterate in ascending order.
#[derive(Clone, Debug, Default)]
pub struct OrderedMapStore {
    data: BTreeMap<Handle, UserData>,
}

impl OrderedMapStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over associated handles in ascending order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.data.keys().copied()
    }
}

impl UserdataStore for OrderedMapStore {
    fn set(&mut self, handle: Handle, data: UserData) {
        self.data.insert(handle, data);
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.data.get(&handle).copied()
    }

    fn description(&self) -> &'static str {
        "BTreeMap"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::OrderedMap
    }
}
