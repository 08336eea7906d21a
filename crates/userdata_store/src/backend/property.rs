//! Host window properties, keyed by name or by atom.
//!
//! Both stores keep one property per window. The name-keyed store compares
//! the property name on every call; the atom-keyed store interns the name
//! once on construction and compares integers afterwards.

use std::rc::Rc;

use userdata_foundation::{Atom, BackendKind, Handle, Result, UserData};

use crate::host::WindowHost;
use crate::store::UserdataStore;

/// Name of the property both stores use.
pub const PROPERTY_NAME: &str = "userdata";

/// Forwards to [`WindowHost::set_prop`] and [`WindowHost::prop`].
#[derive(Clone, Debug)]
pub struct PropertyByName {
    host: Rc<dyn WindowHost>,
}

impl PropertyByName {
    /// Creates a store over the host's named properties.
    #[must_use]
    pub fn new(host: Rc<dyn WindowHost>) -> Self {
        Self { host }
    }
}

impl UserdataStore for PropertyByName {
    fn set(&mut self, handle: Handle, data: UserData) {
        self.host.set_prop(handle, PROPERTY_NAME, data);
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.host.prop(handle, PROPERTY_NAME)
    }

    fn description(&self) -> &'static str {
        "Host window property, string id"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::PropertyByName
    }
}

/// Forwards to [`WindowHost::set_prop_atom`] and [`WindowHost::prop_atom`].
#[derive(Clone, Debug)]
pub struct PropertyByAtom {
    host: Rc<dyn WindowHost>,
    atom: Atom,
}

impl PropertyByAtom {
    /// Interns [`PROPERTY_NAME`] and creates a store keyed by the atom.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot intern the name.
    pub fn new(host: Rc<dyn WindowHost>) -> Result<Self> {
        let atom = host.add_atom(PROPERTY_NAME)?;
        Ok(Self { host, atom })
    }

    /// Returns the atom the property is keyed by.
    #[must_use]
    pub fn atom(&self) -> Atom {
        self.atom
    }
}

impl UserdataStore for PropertyByAtom {
    fn set(&mut self, handle: Handle, data: UserData) {
        self.host.set_prop_atom(handle, self.atom, data);
    }

    fn get(&mut self, handle: Handle) -> Option<UserData> {
        self.host.prop_atom(handle, self.atom)
    }

    fn description(&self) -> &'static str {
        "Host window property, atom id"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::PropertyByAtom
    }
}
