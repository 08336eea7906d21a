//! Slots indexed by call order.
//!
//! This backend ignores handles entirely. `set` appends a slot; `get` walks
//! the slots with a cursor, wrapping at the end. It returns the right value
//! only when every pass calls `get` exactly once per handle, in the order
//! `set` was called. It marks the ceiling for direct indexing and is not a
//! general associative store.

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::store::UserdataStore;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
enum Phase {
    /// Nothing has been set yet.
    #[default]
    Empty,
    /// The last call was `set`; the next `get` starts a fresh pass.
    Setting,
    /// Walking the slots.
    Getting,
}

/// Call-order slot array.
#[derive(Clone, Debug, Default)]
pub struct DirectSlotArray {
    slots: Vec<UserData>,
    cursor: usize,
    phase: Phase,
}

impl DirectSlotArray {
    /// Creates an empty slot array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slot array with room for `capacity` slots.
    ///
    /// The hint only avoids reallocation; any value behaves the same.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slot the last `get` returned, if a pass is in progress.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        (self.phase == Phase::Getting).then_some(self.cursor)
    }
}

impl UserdataStore for DirectSlotArray {
    fn set(&mut self, _handle: Handle, data: UserData) {
        self.slots.push(data);
        self.phase = Phase::Setting;
    }

    fn get(&mut self, _handle: Handle) -> Option<UserData> {
        match self.phase {
            Phase::Empty => return None,
            Phase::Setting => {
                self.cursor = 0;
                self.phase = Phase::Getting;
            }
            Phase::Getting => {
                self.cursor += 1;
                if self.cursor >= self.slots.len() {
                    self.cursor = 0;
                }
            }
        }
        self.slots.get(self.cursor).copied()
    }

    fn description(&self) -> &'static str {
        "Baseline indexed array userdata"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::DirectSlot
    }
}
