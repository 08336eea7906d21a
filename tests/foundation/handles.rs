//! Integration tests for handles and userdata pointers

use std::cell::Cell;
use std::collections::{BTreeSet, HashSet};

use userdata_foundation::{Handle, UserData};

// =============================================================================
// Handles
// =============================================================================

#[test]
fn null_handle_is_default() {
    assert_eq!(Handle::default(), Handle::NULL);
    assert!(Handle::NULL.is_null());
    assert!(!Handle::from_raw(0x1_0000).is_null());
}

#[test]
fn handles_order_by_raw_value() {
    let set: BTreeSet<Handle> = [7_u64, 3, 5, 3].into_iter().map(Handle::from).collect();
    let raws: Vec<u64> = set.into_iter().map(Handle::raw).collect();

    assert_eq!(raws, vec![3, 5, 7]);
}

#[test]
fn handles_hash_by_raw_value() {
    let set: HashSet<Handle> = [1_u64, 2, 1].into_iter().map(Handle::from_raw).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn handle_formatting() {
    let h = Handle::from_raw(0x1_0002);
    assert_eq!(format!("{h:?}"), "Handle(0x10002)");
    assert_eq!(h.to_string(), "0x00010002");
    assert_eq!(format!("{:?}", Handle::NULL), "Handle(null)");
}

// =============================================================================
// Userdata Pointers
// =============================================================================

#[test]
fn userdata_is_pointer_sized() {
    assert_eq!(size_of::<UserData>(), size_of::<usize>());
    assert_eq!(size_of::<Option<UserData>>(), size_of::<usize>());
}

#[test]
fn null_pointer_is_rejected() {
    assert!(UserData::from_raw(std::ptr::null_mut()).is_none());
}

#[test]
fn distinct_values_have_distinct_pointers() {
    let values = [Cell::new(1), Cell::new(2)];
    let a = UserData::from_ref(&values[0]);
    let b = UserData::from_ref(&values[1]);

    assert_ne!(a, b);
    assert_eq!(a, UserData::from_ref(&values[0]));
}

#[test]
fn mutation_through_pointer_is_visible() {
    let value = Cell::new(41);
    let ptr = UserData::from_ref(&value);

    // SAFETY: `value` is live and only shared.
    let cell = unsafe { ptr.as_ref::<Cell<i32>>() };
    cell.set(cell.get() + 1);

    assert_eq!(value.get(), 42);
}
