//! Unordered pairs, linearly scanned.

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::store::UserdataStore;

/// `Vec<(Handle, UserData)>` in insertion order.
///
/// O(n) for both operations.
#[derive(Clone, Debug, Default)]
pub struct UnsortedVecStore {
    entries: Vec<(Handle, UserData)>,
}

impl UnsortedVecStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` handles.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UserdataStore for UnsortedVecStore {
    fn set(&mut self, handle: Handle, data: UserData) {
        match self.entries.iter_mut().find(|(h, _)| *h == handle) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((handle, data)),
        }
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.entries
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|&(_, data)| data)
    }

    fn description(&self) -> &'static str {
        "Vec, unsorted"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::UnsortedVec
    }
}
