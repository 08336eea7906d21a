//! Store contract across all eight backends

use std::rc::Rc;

use proptest::prelude::*;
use userdata_foundation::{BackendKind, ErrorKind, Handle, UserData};
use userdata_store::{HostCapabilities, HostWindows, Userdata, UserdataStore, WindowHost};

/// A host with `n` windows and a store of `kind` over it.
fn fixture(kind: BackendKind, n: usize) -> (Rc<HostWindows>, Userdata, Vec<Handle>) {
    let host = Rc::new(HostWindows::new());
    let handles = (0..n).map(|i| host.create_window(format!("w{i}"))).collect();
    let dyn_host: Rc<dyn WindowHost> = host.clone();
    let store = Userdata::new(kind, &dyn_host).unwrap();
    (host, store, handles)
}

fn ptrs(values: &[i32]) -> Vec<UserData> {
    values.iter().map(UserData::from_ref).collect()
}

// =============================================================================
// Set Then Get
// =============================================================================

#[test]
fn set_then_get_returns_same_pointer() {
    let values = [10, 20, 30, 40];
    let ptrs = ptrs(&values);

    for kind in BackendKind::ALL {
        let (_host, mut store, handles) = fixture(kind, values.len());
        for (h, p) in handles.iter().zip(&ptrs) {
            store.set(*h, *p);
        }

        for (h, p) in handles.iter().zip(&ptrs) {
            assert_eq!(store.get(*h), Some(*p), "{kind}");
        }
    }
}

#[test]
fn repeated_passes_stay_correct() {
    let values = [1, 2, 3];
    let ptrs = ptrs(&values);

    for kind in BackendKind::ALL {
        let (_host, mut store, handles) = fixture(kind, values.len());
        for (h, p) in handles.iter().zip(&ptrs) {
            store.set(*h, *p);
        }

        for _ in 0..5 {
            for (h, p) in handles.iter().zip(&ptrs) {
                assert_eq!(store.get(*h), Some(*p), "{kind}");
            }
        }
    }
}

// =============================================================================
// Not Found
// =============================================================================

#[test]
fn unbound_handle_is_none() {
    let values = [7];
    let ptrs = ptrs(&values);

    for kind in BackendKind::ALL.into_iter().filter(|k| k.is_associative()) {
        let (_host, mut store, handles) = fixture(kind, 2);
        assert_eq!(store.get(handles[0]), None, "{kind} empty");

        store.set(handles[0], ptrs[0]);
        assert_eq!(store.get(handles[1]), None, "{kind}");
    }
}

#[test]
fn empty_direct_slot_is_none() {
    let (_host, mut store, handles) = fixture(BackendKind::DirectSlot, 1);
    assert_eq!(store.get(handles[0]), None);
}

// =============================================================================
// Overwrite
// =============================================================================

#[test]
fn latest_set_wins_without_duplicates() {
    let values = [1, 2];
    let ptrs = ptrs(&values);

    for kind in BackendKind::ALL.into_iter().filter(|k| k.is_associative()) {
        let (host, mut store, handles) = fixture(kind, 2);
        store.set(handles[0], ptrs[0]);
        store.set(handles[1], ptrs[0]);
        store.set(handles[0], ptrs[1]);

        assert_eq!(store.get(handles[0]), Some(ptrs[1]), "{kind}");
        assert_eq!(store.get(handles[1]), Some(ptrs[0]), "{kind}");

        match store.len() {
            Some(len) => assert_eq!(len, 2, "{kind}"),
            None if kind == BackendKind::NativeSlot => {}
            None => assert_eq!(host.prop_count(handles[0]), Some(1), "{kind}"),
        }
    }
}

// =============================================================================
// Factory
// =============================================================================

#[test]
fn descriptions_are_distinct() {
    let mut seen = Vec::new();
    for kind in BackendKind::ALL {
        let (_host, store, _) = fixture(kind, 0);
        assert_eq!(store.kind(), kind);
        assert!(!seen.contains(&store.description()), "{kind}");
        seen.push(store.description());
    }
}

#[test]
fn host_kinds_need_host_capabilities() {
    let host: Rc<dyn WindowHost> =
        Rc::new(HostWindows::with_capabilities(HostCapabilities::none()));

    for kind in BackendKind::ALL {
        let result = Userdata::new(kind, &host);
        if kind.is_host_backed() {
            let err = result.unwrap_err();
            assert!(err.is_configuration(), "{kind}");
            assert!(matches!(err.kind, ErrorKind::Unsupported { kind: k, .. } if k == kind));
        } else {
            assert!(result.is_ok(), "{kind}");
        }
    }
}

#[test]
fn atoms_alone_do_not_enable_atom_properties() {
    let host: Rc<dyn WindowHost> = Rc::new(HostWindows::with_capabilities(
        HostCapabilities::none().with_atoms(true),
    ));
    assert!(Userdata::new(BackendKind::PropertyByAtom, &host).is_err());
}

#[test]
fn in_process_rejects_host_kinds() {
    for kind in BackendKind::ALL {
        assert_eq!(Userdata::in_process(kind).is_ok(), !kind.is_host_backed(), "{kind}");
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn get_returns_last_set_for_every_associative_kind(
        ops in prop::collection::vec((0usize..16, 0usize..4), 1..80)
    ) {
        let values = [0, 1, 2, 3];
        let ptrs = ptrs(&values);

        for kind in BackendKind::ALL.into_iter().filter(|k| k.is_associative()) {
            let (_host, mut store, handles) = fixture(kind, 16);
            let mut expected = [None; 16];

            for &(h, v) in &ops {
                store.set(handles[h], ptrs[v]);
                expected[h] = Some(ptrs[v]);
            }

            for (h, want) in expected.iter().enumerate() {
                prop_assert_eq!(store.get(handles[h]), *want, "{}", kind);
            }
        }
    }
}
