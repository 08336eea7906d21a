//! Documented end-to-end scenarios

use userdata_foundation::{Handle, UserData};
use userdata_store::{DirectSlotArray, HashMapStore, SortedVecStore, UserdataStore};

fn h(raw: u64) -> Handle {
    Handle::from_raw(raw)
}

#[test]
fn hash_map_scenario() {
    let values = [10, 20, 30, 99];
    let p: Vec<_> = values.iter().map(UserData::from_ref).collect();
    let mut store = HashMapStore::new();

    store.set(h(1), p[0]);
    store.set(h(2), p[1]);
    store.set(h(3), p[2]);
    assert_eq!(store.get(h(2)), Some(p[1]));
    assert_eq!(store.get(h(4)), None);

    store.set(h(2), p[3]);
    assert_eq!(store.get(h(2)), Some(p[3]));
    assert_eq!(store.len(), 3);
}

#[test]
fn sorted_vec_scenario() {
    let values = [5, 3, 4];
    let mut store = SortedVecStore::new();

    for (raw, value) in [5, 3, 4].into_iter().zip(&values) {
        store.set(h(raw), UserData::from_ref(value));
    }

    let order: Vec<u64> = store.handles().map(Handle::raw).collect();
    assert_eq!(order, vec![3, 4, 5]);
    assert_eq!(store.get(h(4)), Some(UserData::from_ref(&values[2])));
}

#[test]
fn direct_slot_wraps_around() {
    let values = [1, 2, 3];
    let p: Vec<_> = values.iter().map(UserData::from_ref).collect();
    let mut store = DirectSlotArray::new();

    for (raw, ptr) in (1..=3).zip(&p) {
        store.set(h(raw), *ptr);
    }

    let seen: Vec<_> = (1..=4).map(|raw| store.get(h(raw))).collect();
    assert_eq!(seen, vec![Some(p[0]), Some(p[1]), Some(p[2]), Some(p[0])]);
}

#[test]
fn direct_slot_ignores_the_handle() {
    let values = [1, 2];
    let p: Vec<_> = values.iter().map(UserData::from_ref).collect();
    let mut store = DirectSlotArray::new();
    store.set(h(1), p[0]);
    store.set(h(2), p[1]);

    assert_eq!(store.get(h(999)), Some(p[0]));
    assert_eq!(store.cursor(), Some(0));
}
