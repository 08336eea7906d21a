//! Integration tests for the benchmark harness

use std::cell::Cell;
use std::rc::Rc;

use userdata_foundation::{BackendKind, ErrorKind, Handle, UserData};
use userdata_runtime::benchmark_userdata_access;
use userdata_store::{HostWindows, Userdata, UserdataStore, WindowHost};

fn bound_store(
    kind: BackendKind,
    host: &Rc<HostWindows>,
    data: &[Cell<i32>],
) -> (Userdata, Vec<Handle>) {
    let dyn_host: Rc<dyn WindowHost> = host.clone();
    let mut store = Userdata::new(kind, &dyn_host).unwrap();
    let handles: Vec<_> = (0..data.len())
        .map(|i| host.create_window(format!("label {i}")))
        .collect();
    for (h, v) in handles.iter().zip(data) {
        store.set(*h, UserData::from_ref(v));
    }
    (store, handles)
}

#[test]
fn every_kind_adds_exactly_the_sample_count() {
    for kind in BackendKind::ALL {
        let host = Rc::new(HostWindows::new());
        let data: Vec<_> = (0..20).map(|i| Cell::new(i * 3)).collect();
        let (mut store, handles) = bound_store(kind, &host, &data);

        // SAFETY: every handle is bound to a cell in `data`.
        let report = unsafe { benchmark_userdata_access(&mut store, &handles, &data, 25) }
            .unwrap_or_else(|e| panic!("{kind}: {e}"));

        for (i, cell) in data.iter().enumerate() {
            assert_eq!(cell.get(), i as i32 * 3 + 25, "{kind}");
        }
        assert_eq!(report.kind, kind);
        assert_eq!(report.description, store.description());
        assert!(report.to_string().starts_with("average call time: "));
        assert!(report.to_string().ends_with(&format!("ns ({})", store.description())));
    }
}

#[test]
fn swapped_binding_is_detected() {
    let host = Rc::new(HostWindows::new());
    let data: Vec<_> = (0..3).map(Cell::new).collect();
    let (mut store, handles) = bound_store(BackendKind::OrderedMap, &host, &data);
    store.set(handles[1], UserData::from_ref(&data[0]));

    // SAFETY: every handle is bound to a cell in `data`.
    let err = unsafe { benchmark_userdata_access(&mut store, &handles, &data, 4) }.unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::BenchmarkMismatch { index: 0, expected: 4, actual: 8 }
    ));
    assert!(!err.is_configuration());
}

#[test]
fn destroyed_window_loses_its_userdata() {
    let host = Rc::new(HostWindows::new());
    let data: Vec<_> = (0..3).map(Cell::new).collect();
    let (mut store, handles) = bound_store(BackendKind::NativeSlot, &host, &data);
    host.destroy_window(handles[2]);

    // SAFETY: the remaining handles are bound to cells in `data`.
    let err = unsafe { benchmark_userdata_access(&mut store, &handles, &data, 1) }.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::MissingUserData(h) if h == handles[2]));
}

#[test]
fn mismatched_lengths_are_rejected() {
    let host = Rc::new(HostWindows::new());
    let data: Vec<_> = (0..3).map(Cell::new).collect();
    let (mut store, handles) = bound_store(BackendKind::HashMap, &host, &data);

    // SAFETY: nothing is dereferenced before the length check.
    let err = unsafe { benchmark_userdata_access(&mut store, &handles[..2], &data, 1) }
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn every_kind_passes_when_values_wrap() {
    for kind in BackendKind::ALL {
        let host = Rc::new(HostWindows::new());
        let data: Vec<_> = (0..4).map(|i| Cell::new(i32::MAX - i)).collect();
        let (mut store, handles) = bound_store(kind, &host, &data);

        // SAFETY: every handle is bound to a cell in `data`.
        unsafe { benchmark_userdata_access(&mut store, &handles, &data, 2) }
            .unwrap_or_else(|e| panic!("{kind}: {e}"));

        let values: Vec<_> = data.iter().map(Cell::get).collect();
        assert_eq!(
            values,
            vec![i32::MIN + 1, i32::MIN, i32::MAX, i32::MAX - 1],
            "{kind}"
        );
    }
}
