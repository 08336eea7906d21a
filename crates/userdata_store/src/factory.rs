//! Building a store from a [`BackendKind`].
//!
//! [`Userdata`] is the closed set of backends. Host-backed kinds are checked
//! against the host's capabilities here, so asking for a primitive the host
//! lacks is a configuration error at construction rather than a silent
//! failure later.

use std::rc::Rc;

use tracing::debug;

use userdata_foundation::{BackendKind, Error, Handle, Result, UserData};

use crate::backend::{
    DirectSlotArray, HashMapStore, NativeSlot, OrderedMapStore, PropertyByAtom, PropertyByName,
    SortedVecStore, UnsortedVecStore,
};
use crate::host::WindowHost;
use crate::store::UserdataStore;

/// One of the eight backends.
#[derive(Clone, Debug)]
pub enum Userdata {
    /// See [`DirectSlotArray`].
    DirectSlot(DirectSlotArray),
    /// See [`NativeSlot`].
    NativeSlot(NativeSlot),
    /// See [`PropertyByName`].
    PropertyByName(PropertyByName),
    /// See [`PropertyByAtom`].
    PropertyByAtom(PropertyByAtom),
    /// See [`HashMapStore`].
    HashMap(HashMapStore),
    /// See [`OrderedMapStore`].
    OrderedMap(OrderedMapStore),
    /// See [`SortedVecStore`].
    SortedVec(SortedVecStore),
    /// See [`UnsortedVecStore`].
    UnsortedVec(UnsortedVecStore),
}

macro_rules! dispatch {
    ($self:expr, $store:ident => $body:expr) => {
        match $self {
            Userdata::DirectSlot($store) => $body,
            Userdata::NativeSlot($store) => $body,
            Userdata::PropertyByName($store) => $body,
            Userdata::PropertyByAtom($store) => $body,
            Userdata::HashMap($store) => $body,
            Userdata::OrderedMap($store) => $body,
            Userdata::SortedVec($store) => $body,
            Userdata::UnsortedVec($store) => $body,
        }
    };
}

impl Userdata {
    /// Builds the backend for `kind` on top of `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Unsupported`](userdata_foundation::ErrorKind::Unsupported)
    /// if `kind` needs a primitive the host does not offer.
    pub fn new(kind: BackendKind, host: &Rc<dyn WindowHost>) -> Result<Self> {
        Self::build(kind, Some(host), 0)
    }

    /// Builds the backend for `kind`, reserving room for `capacity` handles.
    ///
    /// The hint only affects allocation. Host-backed kinds ignore it.
    ///
    /// # Errors
    ///
    /// See [`Userdata::new`].
    pub fn with_capacity(
        kind: BackendKind,
        host: &Rc<dyn WindowHost>,
        capacity: usize,
    ) -> Result<Self> {
        Self::build(kind, Some(host), capacity)
    }

    /// Builds an in-process backend that needs no host.
    ///
    /// # Errors
    ///
    /// Returns an error for host-backed kinds.
    pub fn in_process(kind: BackendKind) -> Result<Self> {
        Self::build(kind, None, 0)
    }

    fn build(kind: BackendKind, host: Option<&Rc<dyn WindowHost>>, capacity: usize) -> Result<Self> {
        let store = match kind {
            BackendKind::DirectSlot => Self::DirectSlot(DirectSlotArray::with_capacity(capacity)),
            BackendKind::NativeSlot => {
                let host = require(kind, host, |c| c.native_slot, "native userdata slot")?;
                Self::NativeSlot(NativeSlot::new(host))
            }
            BackendKind::PropertyByName => {
                let host = require(kind, host, |c| c.properties, "window property list")?;
                Self::PropertyByName(PropertyByName::new(host))
            }
            BackendKind::PropertyByAtom => {
                let host = require(
                    kind,
                    host,
                    |c| c.properties && c.atoms,
                    "window property list keyed by atom",
                )?;
                Self::PropertyByAtom(PropertyByAtom::new(host)?)
            }
            BackendKind::HashMap => Self::HashMap(HashMapStore::with_capacity(capacity)),
            BackendKind::OrderedMap => Self::OrderedMap(OrderedMapStore::new()),
            BackendKind::SortedVec => Self::SortedVec(SortedVecStore::with_capacity(capacity)),
            BackendKind::UnsortedVec => {
                Self::UnsortedVec(UnsortedVecStore::with_capacity(capacity))
            }
        };

        debug!(
            kind = %kind,
            capacity,
            description = store.description(),
            "constructed userdata store"
        );
        Ok(store)
    }

    /// Returns the number of associations held in-process.
    ///
    /// `None` for host-backed stores, which keep nothing themselves.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::DirectSlot(s) => Some(s.len()),
            Self::HashMap(s) => Some(s.len()),
            Self::OrderedMap(s) => Some(s.len()),
            Self::SortedVec(s) => Some(s.len()),
            Self::UnsortedVec(s) => Some(s.len()),
            Self::NativeSlot(_) | Self::PropertyByName(_) | Self::PropertyByAtom(_) => None,
        }
    }

    /// Returns true if an in-process store holds no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

fn require(
    kind: BackendKind,
    host: Option<&Rc<dyn WindowHost>>,
    available: impl FnOnce(crate::host::HostCapabilities) -> bool,
    capability: &'static str,
) -> Result<Rc<dyn WindowHost>> {
    match host {
        Some(host) if available(host.capabilities()) => Ok(Rc::clone(host)),
        Some(_) => Err(Error::unsupported(kind, capability)),
        None => Err(Error::unsupported(kind, "window host")),
    }
}

impl UserdataStore for Userdata {
    #[inline]
    fn set(&mut self, handle: Handle, data: UserData) {
        dispatch!(self, s => s.set(handle, data));
    }

    #[inline]
    fn get(&mut self, handle: Handle) -> Option<UserData> {
        dispatch!(self, s => s.get(handle))
    }

    fn description(&self) -> &'static str {
        dispatch!(self, s => s.description())
    }

    fn kind(&self) -> BackendKind {
        dispatch!(self, s => s.kind())
    }
}
