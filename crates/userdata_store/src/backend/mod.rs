//! Backends implementing [`UserdataStore`](crate::UserdataStore).
//!
//! | Backend | set | get |
//! |---------|-----|-----|
//! | [`DirectSlotArray`] | O(1) append | O(1), call-order protocol |
//! | [`NativeSlot`] | O(1) | O(1) |
//! | [`PropertyByName`] | host property list, string compare | same |
//! | [`PropertyByAtom`] | host property list, integer compare | same |
//! | [`HashMapStore`] | O(1) average | O(1) average |
//! | [`OrderedMapStore`] | O(log n) | O(log n) |
//! | [`SortedVecStore`] | O(n) shift | O(log n) |
//! | [`UnsortedVecStore`] | O(n) scan | O(n) scan |

mod direct_slot;
mod hash_map;
mod native_slot;
mod ordered_map;
mod property;
mod sorted_vec;
mod unsorted_vec;

pub use direct_slot::DirectSlotArray;
pub use hash_map::HashMapStore;
pub use native_slot::NativeSlot;
pub use ordered_map::OrderedMapStore;
pub use property::{PROPERTY_NAME, PropertyByAtom, PropertyByName};
pub use sorted_vec::SortedVecStore;
pub use unsorted_vec::UnsortedVecStore;
