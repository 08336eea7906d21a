//! Integration tests for backend selectors

use userdata_foundation::{BackendKind, ErrorKind};

#[test]
fn every_index_parses() {
    for i in 0..8 {
        let kind: BackendKind = i.to_string().parse().unwrap();
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn names_and_indices_agree() {
    for kind in BackendKind::ALL {
        let by_name: BackendKind = kind.name().parse().unwrap();
        let by_index: BackendKind = kind.index().to_string().parse().unwrap();
        assert_eq!(by_name, by_index);
    }
}

#[test]
fn out_of_range_index_is_a_configuration_error() {
    let err = "8".parse::<BackendKind>().unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(err.kind, ErrorKind::InvalidBackend(ref s) if s == "8"));
    assert!(
        err.to_string()
            .contains("expected a backend index in [0, 7] or a backend name")
    );
}

#[test]
fn unknown_name_is_rejected() {
    assert!("hashmap".parse::<BackendKind>().is_err());
    assert!("HASH-MAP".parse::<BackendKind>().is_err());
}

#[test]
fn display_is_the_name() {
    assert_eq!(BackendKind::SortedVec.to_string(), "vec-sorted");
    assert_eq!(BackendKind::DirectSlot.to_string(), "baseline");
}
