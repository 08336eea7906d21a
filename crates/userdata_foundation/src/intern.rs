//! Atom interning for property names.
//!
//! Property names are interned once into small integer atoms so that hot
//! lookups compare integers instead of strings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// Interned property-name identifier.
///
/// String atoms live in `0xC000..=0xFFFF`, the range a host reserves for
/// atoms created from names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom(u16);

impl Atom {
    /// First value handed out for a string atom.
    pub const FIRST: u16 = 0xC000;

    /// Returns the raw atom value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the position of this atom in its table.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - Self::FIRST) as usize
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({:#06x})", self.0)
    }
}

/// Table mapping property names to atoms and back.
///
/// Names compare case-insensitively (ASCII); the spelling first added is
/// the one reported by [`AtomTable::name`]. Not thread-safe.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    /// Names in atom order.
    names: Vec<Arc<str>>,
    /// Map from folded name to atom.
    atoms: HashMap<Box<str>, Atom>,
}

impl AtomTable {
    /// Maximum number of string atoms a table can hold.
    pub const CAPACITY: usize = (u16::MAX - Atom::FIRST) as usize + 1;

    /// Creates an empty atom table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fold(name: &str) -> Box<str> {
        name.to_ascii_lowercase().into_boxed_str()
    }

    /// Interns a name, returning its atom.
    ///
    /// Adding a name that is already present returns the existing atom.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the table is full.
    pub fn add(&mut self, name: &str) -> Result<Atom> {
        if name.is_empty() {
            return Err(Error::invalid_config("atom name must not be empty"));
        }

        let key = Self::fold(name);
        if let Some(&atom) = self.atoms.get(&key) {
            return Ok(atom);
        }

        let offset = u16::try_from(self.names.len())
            .ok()
            .filter(|&n| usize::from(n) < Self::CAPACITY)
            .ok_or_else(|| Error::new(ErrorKind::Internal("atom table is full".to_string())))?;

        let atom = Atom(Atom::FIRST + offset);
        self.names.push(name.into());
        self.atoms.insert(key, atom);
        Ok(atom)
    }

    /// Looks up the atom for a name without interning it.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Atom> {
        self.atoms.get(&Self::fold(name)).copied()
    }

    /// Gets the name an atom was created from.
    #[must_use]
    pub fn name(&self, atom: Atom) -> Option<&str> {
        if atom.raw() < Atom::FIRST {
            return None;
        }
        self.names.get(atom.index()).map(AsRef::as_ref)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
