//! The association contract every backend satisfies.

use userdata_foundation::{BackendKind, Handle, UserData};

/// Associates caller-owned data with opaque handles.
///
/// At most one value is associated with a handle at any time. Stores never
/// own, copy, or dereference the values they hold.
pub trait UserdataStore {
    /// Associates `data` with `handle`, replacing any previous value.
    fn set(&mut self, handle: Handle, data: UserData);

    /// Returns the value associated with `handle`, or `None`.
    ///
    /// Takes `&mut self` because some strategies advance internal state on
    /// every lookup. Must not allocate.
    fn get(&mut self, handle: Handle) -> Option<UserData>;

    /// Human-readable name of the storage strategy, for reports.
    fn description(&self) -> &'static str;

    /// The selector this strategy corresponds to.
    fn kind(&self) -> BackendKind;
}
