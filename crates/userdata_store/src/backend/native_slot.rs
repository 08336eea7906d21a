//! The host's own per-window userdata slot.

use std::rc::Rc;

use userdata_foundation::{BackendKind, Handle, UserData};

use crate::host::WindowHost;
use crate::store::UserdataStore;

/// Forwards to [`WindowHost::set_user_data`] and [`WindowHost::user_data`].
///
/// Every window already carries one pointer-sized slot, so there is nothing
/// to allocate or search. Setting a handle the host does not know is a no-op.
#[derive(Clone, Debug)]
pub struct NativeSlot {
    host: Rc<dyn WindowHost>,
}

impl NativeSlot {
    /// Creates a store over the host's userdata slots.
    #[must_use]
    pub fn new(host: Rc<dyn WindowHost>) -> Self {
        Self { host }
    }
}

impl UserdataStore for NativeSlot {
    fn set(&mut self, handle: Handle, data: UserData) {
        self.host.set_user_data(handle, Some(data));
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.host.user_data(handle)
    }

    fn description(&self) -> &'static str {
        "Host window userdata slot"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::NativeSlot
    }
}
