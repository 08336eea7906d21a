//! Contiguous pairs kept sorted by handle.
//!
//! `set` finds the lower bound of the handle. An exact match is overwritten;
//! otherwise the pair is inserted there, which is also the upper bound since
//! no equal key exists. Duplicate handles are therefore never stored, and the
//! sequence stays strictly increasing.

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::store::UserdataStore;

/// `Vec<(Handle, UserData)>` sorted by handle, binary searched.
///
/// O(log n) lookup, O(n) insertion of a new handle.
#[derive(Clone, Debug, Default)]
pub struct SortedVecStore {
    entries: Vec<(Handle, UserData)>,
}

impl SortedVecStore {
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

    fn lower_bound(&self, handle: Handle) -> usize {
        self.entries.partition_point(|&(h, _)| h < handle)
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

    /// Iterates over stored handles in storage order, which is ascending.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entries.iter().map(|&(h, _)| h)
    }
}

impl UserdataStore for SortedVecStore {
    fn set(&mut self, handle: Handle, data: UserData) {
        let pos = self.lower_bound(handle);
        match self.entries.get_mut(pos) {
            Some(entry) if entry.0 == handle => entry.1 = data,
            _ => self.entries.insert(pos, (handle, data)),
        }
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        let pos = self.lower_bound(handle);
        self.entries
            .get(pos)
            .filter(|(h, _)| *h == handle)
            .map(|&(_, data)| data)
    }

    fn description(&self) -> &'static str {
        "Vec, sorted"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::SortedVec
    }
}
