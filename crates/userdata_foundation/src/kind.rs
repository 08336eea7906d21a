//! Backend selectors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The closed set of association strategies.
///
/// The discriminant is the numeric index accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// Slots indexed by call order, not by handle.
    #[cfg_attr(feature = "serde", serde(rename = "baseline"))]
    DirectSlot = 0,
    /// The host's pointer-sized userdata slot on each window.
    #[cfg_attr(feature = "serde", serde(rename = "native-slot"))]
    NativeSlot = 1,
    /// A host window property keyed by name.
    #[cfg_attr(feature = "serde", serde(rename = "prop-string"))]
    PropertyByName = 2,
    /// A host window property keyed by an interned atom.
    #[cfg_attr(feature = "serde", serde(rename = "prop-atom"))]
    PropertyByAtom = 3,
    /// `std::collections::HashMap`.
    #[cfg_attr(feature = "serde", serde(rename = "hash-map"))]
    HashMap = 4,
    /// `std::collections::BTreeMap`.
    #[cfg_attr(feature = "serde", serde(rename = "btree-map"))]
    OrderedMap = 5,
    /// A vector kept sorted by handle, binary searched.
    #[cfg_attr(feature = "serde", serde(rename = "vec-sorted"))]
    SortedVec = 6,
    /// An unsorted vector, linearly scanned.
    #[cfg_attr(feature = "serde", serde(rename = "vec-unsorted"))]
    UnsortedVec = 7,
}

impl BackendKind {
    /// Every kind, in index order.
    pub const ALL: [BackendKind; 8] = [
        Self::DirectSlot,
        Self::NativeSlot,
        Self::PropertyByName,
        Self::PropertyByAtom,
        Self::HashMap,
        Self::OrderedMap,
        Self::SortedVec,
        Self::UnsortedVec,
    ];

    /// Returns the numeric index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a kind by numeric index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the command-line name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectSlot => "baseline",
            Self::NativeSlot => "native-slot",
            Self::PropertyByName => "prop-string",
            Self::PropertyByAtom => "prop-atom",
            Self::HashMap => "hash-map",
            Self::OrderedMap => "btree-map",
            Self::SortedVec => "vec-sorted",
            Self::UnsortedVec => "vec-unsorted",
        }
    }

    /// Returns true if this kind delegates storage to the host.
    #[must_use]
    pub const fn is_host_backed(self) -> bool {
        matches!(
            self,
            Self::NativeSlot | Self::PropertyByName | Self::PropertyByAtom
        )
    }

    /// Returns true if `get` on a never-set handle yields `None`.
    ///
    /// Only the direct-slot array breaks this: it ignores the handle.
    #[must_use]
    pub const fn is_associative(self) -> bool {
        !matches!(self, Self::DirectSlot)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    /// Parses either a numeric index in `[0, 7]` or a kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let by_index = s.parse::<usize>().ok().and_then(Self::from_index);
        let by_name = || Self::ALL.into_iter().find(|k| k.name() == s);

        by_index
            .or_else(by_name)
            .ok_or_else(|| Error::new(ErrorKind::InvalidBackend(s.to_string())))
    }
}
