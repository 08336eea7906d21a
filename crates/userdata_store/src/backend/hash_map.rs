//! Hash table keyed by handle.

use std::collections::HashMap;

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::store::UserdataStore;

/// `HashMap<Handle, UserData>`.
///
/// O(1) average for both operations; no ordering over handles.
#[derive(Clone, Debug, Default)]
pub struct HashMapStore {
    data: HashMap<Handle, UserData>,
}

impl HashMapStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` handles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
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
}

impl UserdataStore for HashMapStore {
    fn set(&mut self, handle: Handle, data: UserData) {
        self.data.insert(handle, data);
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.data.get(&handle).copied()
    }

    fn description(&self) -> &'static str {
        "HashMap"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::HashMap
    }
}
