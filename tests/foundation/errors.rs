//! Integration tests for error construction and classification

use userdata_foundation::{BackendKind, Error, ErrorContext, ErrorKind, Handle};

#[test]
fn configuration_errors() {
    assert!(Error::invalid_config("bad").is_configuration());
    assert!(Error::unsupported(BackendKind::NativeSlot, "native userdata slot").is_configuration());
    assert!(Error::new(ErrorKind::InvalidBackend("9".into())).is_configuration());
}

#[test]
fn defects_are_not_configuration_errors() {
    assert!(!Error::missing_userdata(Handle::from_raw(2)).is_configuration());
    assert!(!Error::benchmark_mismatch(0, 10, 11).is_configuration());
    assert!(!Error::new(ErrorKind::Internal("x".into())).is_configuration());
}

#[test]
fn unsupported_message_names_kind_and_capability() {
    let err = Error::unsupported(BackendKind::PropertyByAtom, "atom table");
    assert_eq!(
        err.to_string(),
        "backend prop-atom is unavailable: host has no atom table"
    );
}

#[test]
fn mismatch_message() {
    let err = Error::benchmark_mismatch(3, 107, 106);
    assert_eq!(
        err.to_string(),
        "benchmark data mismatch at index 3: expected 107, got 106"
    );
}

#[test]
fn context_is_attached() {
    let err = Error::benchmark_mismatch(0, 1, 2)
        .with_context(ErrorContext::new().with_backend("HashMap").with_run(100, 1000));

    let context = err.context.unwrap();
    assert_eq!(context.to_string(), "in HashMap (100 samples x 1000 handles)");
}
