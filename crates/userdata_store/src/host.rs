//! The windowing-system collaborator.
//!
//! Host-backed stores never keep associations themselves: they forward to
//! per-window storage that a [`WindowHost`] already carries. Host calls take
//! `&self`, the way calls into a windowing system do, so implementations use
//! interior mutability.
//!
//! [`HostWindows`] is an in-process host. It keeps a window table indexed
//! directly by handle, one pointer-sized userdata slot per window, a small
//! property list per window, and a global atom table.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use std::cell::RefCell;
use std::fmt;

use userdata_foundation::{Atom, AtomTable, Handle, Result, UserData};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which per-window storage primitives a host offers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HostCapabilities {
    /// One pointer-sized userdata slot on every window.
    pub native_slot: bool,
    /// Named per-window properties.
    pub properties: bool,
    /// An atom table usable as property keys.
    pub atoms: bool,
}

impl HostCapabilities {
    /// Every primitive is available.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            native_slot: true,
            properties: true,
            atoms: true,
        }
    }

    /// No primitive is available.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            native_slot: false,
            properties: false,
            atoms: false,
        }
    }

    /// Builder method to set the native slot capability.
    #[must_use]
    pub const fn with_native_slot(mut self, available: bool) -> Self {
        self.native_slot = available;
        self
    }

    /// Builder method to set the property capability.
    #[must_use]
    pub const fn with_properties(mut self, available: bool) -> Self {
        self.properties = available;
        self
    }

    /// Builder method to set the atom capability.
    #[must_use]
    pub const fn with_atoms(mut self, available: bool) -> Self {
        self.atoms = available;
        self
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Per-window storage offered by a windowing system.
///
/// Calls on a handle the host does not know are harmless: setters report
/// `false` (or `None` for the previous slot value) and getters return `None`.
pub trait WindowHost: fmt::Debug {
    /// Returns the primitives this host offers.
    fn capabilities(&self) -> HostCapabilities;

    /// Returns true if the handle names a live window.
    fn is_window(&self, handle: Handle) -> bool;

    /// Stores a value in the window's userdata slot, returning the previous one.
    fn set_user_data(&self, handle: Handle, data: Option<UserData>) -> Option<UserData>;

    /// Reads the window's userdata slot.
    fn user_data(&self, handle: Handle) -> Option<UserData>;

    /// Sets a property keyed by name. Returns false if the window is unknown.
    fn set_prop(&self, handle: Handle, name: &str, data: UserData) -> bool;

    /// Reads a property keyed by name.
    fn prop(&self, handle: Handle, name: &str) -> Option<UserData>;

    /// Interns a property name.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no atom table or it is full.
    fn add_atom(&self, name: &str) -> Result<Atom>;

    /// Sets a property keyed by atom. Returns false if the window is unknown.
    fn set_prop_atom(&self, handle: Handle, atom: Atom, data: UserData) -> bool;

    /// Reads a property keyed by atom.
    fn prop_atom(&self, handle: Handle, atom: Atom) -> Option<UserData>;
}

/// Property list key. A named entry and an atom entry never alias.
#[derive(Clone, Debug)]
enum PropKey {
    Name(Box<str>),
    Atom(Atom),
}

impl PropKey {
    /// Names compare ignoring ASCII case, like atom names do.
    fn matches(&self, other: &PropKey) -> bool {
        match (self, other) {
            (Self::Name(a), Self::Name(b)) => a.eq_ignore_ascii_case(b),
            (Self::Atom(a), Self::Atom(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Window {
    text: String,
    alive: bool,
    user_data: Option<UserData>,
    props: Vec<(PropKey, UserData)>,
}

/// In-process window table.
///
/// Handles are `BASE + index * STRIDE`, so resolving one is a subtraction and
/// a bounds check. Destroyed windows keep their slot; their handles stay
/// invalid forever.
#[derive(Debug)]
pub struct HostWindows {
    capabilities: HostCapabilities,
    windows: RefCell<Vec<Window>>,
    atoms: RefCell<AtomTable>,
}

impl Default for HostWindows {
    fn default() -> Self {
        Self::new()
    }
}

impl HostWindows {
    /// Raw value of the first handle handed out.
    pub const HANDLE_BASE: u64 = 0x0001_0000;
    /// Distance between consecutive handles.
    pub const HANDLE_STRIDE: u64 = 2;

    /// Creates an empty host offering every primitive.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(HostCapabilities::all())
    }

    /// Creates an empty host offering only the given primitives.
    #[must_use]
    pub fn with_capabilities(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            windows: RefCell::new(Vec::new()),
            atoms: RefCell::new(AtomTable::new()),
        }
    }

    fn index_of(handle: Handle) -> Option<usize> {
        let offset = handle.raw().checked_sub(Self::HANDLE_BASE)?;
        (offset % Self::HANDLE_STRIDE == 0).then(|| (offset / Self::HANDLE_STRIDE) as usize)
    }

    fn with_window<R>(&self, handle: Handle, f: impl FnOnce(&Window) -> R) -> Option<R> {
        let windows = self.windows.borrow();
        let window = windows.get(Self::index_of(handle)?)?;
        window.alive.then(|| f(window))
    }

    fn with_window_mut<R>(&self, handle: Handle, f: impl FnOnce(&mut Window) -> R) -> Option<R> {
        let mut windows = self.windows.borrow_mut();
        let window = windows.get_mut(Self::index_of(handle)?)?;
        window.alive.then(|| f(window))
    }

    fn set_prop_key(&self, handle: Handle, key: PropKey, data: UserData) -> bool {
        self.with_window_mut(handle, |window| {
            match window.props.iter_mut().find(|(k, _)| k.matches(&key)) {
                Some(entry) => entry.1 = data,
                None => window.props.push((key, data)),
            }
        })
        .is_some()
    }

    /// Creates a window with the given text and returns its handle.
    pub fn create_window(&self, text: impl Into<String>) -> Handle {
        let mut windows = self.windows.borrow_mut();
        let index = windows.len() as u64;
        windows.push(Window {
            text: text.into(),
            alive: true,
            ..Window::default()
        });
        Handle::from_raw(Self::HANDLE_BASE + index * Self::HANDLE_STRIDE)
    }

    /// Destroys a window, dropping its slot and properties.
    ///
    /// Returns false if the handle was not a live window.
    pub fn destroy_window(&self, handle: Handle) -> bool {
        self.with_window_mut(handle, |window| {
            *window = Window::default();
        })
        .is_some()
    }

    /// Returns the window's text.
    #[must_use]
    pub fn window_text(&self, handle: Handle) -> Option<String> {
        self.with_window(handle, |window| window.text.clone())
    }

    /// Replaces the window's text. Returns false if the window is unknown.
    pub fn set_window_text(&self, handle: Handle, text: impl Into<String>) -> bool {
        let text = text.into();
        self.with_window_mut(handle, |window| window.text = text)
            .is_some()
    }

    /// Returns the number of live windows.
    #[must_use]
    pub fn window_count(&self) -> usize {
        self.windows.borrow().iter().filter(|w| w.alive).count()
    }

    /// Returns the number of properties set on a window.
    #[must_use]
    pub fn prop_count(&self, handle: Handle) -> Option<usize> {
        self.with_window(handle, |window| window.props.len())
    }
}

impl WindowHost for HostWindows {
    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn is_window(&self, handle: Handle) -> bool {
        self.with_window(handle, |_| ()).is_some()
    }

    fn set_user_data(&self, handle: Handle, data: Option<UserData>) -> Option<UserData> {
        if !self.capabilities.native_slot {
            return None;
        }
        self.with_window_mut(handle, |window| std::mem::replace(&mut window.user_data, data))
            .flatten()
    }

    fn user_data(&self, handle: Handle) -> Option<UserData> {
        if !self.capabilities.native_slot {
            return None;
        }
        self.with_window(handle, |window| window.user_data).flatten()
    }

    fn set_prop(&self, handle: Handle, name: &str, data: UserData) -> bool {
        self.capabilities.properties && self.set_prop_key(handle, PropKey::Name(name.into()), data)
    }

    fn prop(&self, handle: Handle, name: &str) -> Option<UserData> {
        if !self.capabilities.properties {
            return None;
        }
        self.with_window(handle, |window| {
            window.props.iter().find_map(|(key, data)| match key {
                PropKey::Name(n) if n.eq_ignore_ascii_case(name) => Some(*data),
                _ => None,
            })
        })
        .flatten()
    }

    fn add_atom(&self, name: &str) -> Result<Atom> {
        if !self.capabilities.atoms {
            return Err(userdata_foundation::Error::invalid_config(
                "host has no atom table",
            ));
        }
        self.atoms.borrow_mut().add(name)
    }

    fn set_prop_atom(&self, handle: Handle, atom: Atom, data: UserData) -> bool {
        self.capabilities.properties && self.set_prop_key(handle, PropKey::Atom(atom), data)
    }

    fn prop_atom(&self, handle: Handle, atom: Atom) -> Option<UserData> {
        if !self.capabilities.properties {
            return None;
        }
        self.with_window(handle, |window| {
            window
                .props
                .iter()
                .find_map(|(key, data)| matches!(key, PropKey::Atom(a) if *a == atom).then_some(*data))
        })
        .flatten()
    }
}
