//! Integration tests for the atom table

use userdata_foundation::{Atom, AtomTable};

#[test]
fn first_atom_starts_at_the_atom_range() {
    let mut table = AtomTable::new();
    let atom = table.add("userdata").unwrap();

    assert_eq!(atom.raw(), Atom::FIRST);
    assert_eq!(atom.index(), 0);
}

#[test]
fn adding_twice_returns_same_atom() {
    let mut table = AtomTable::new();
    let a = table.add("userdata").unwrap();
    let b = table.add("userdata").unwrap();

    assert_eq!(a, b);
    assert_eq!(table.len(), 1);
}

#[test]
fn lookups_ignore_ascii_case() {
    let mut table = AtomTable::new();
    let atom = table.add("UserData").unwrap();

    assert_eq!(table.find("userdata"), Some(atom));
    assert_eq!(table.add("USERDATA").unwrap(), atom);
    assert_eq!(table.name(atom), Some("UserData"));
}

#[test]
fn distinct_names_get_distinct_atoms() {
    let mut table = AtomTable::new();
    let a = table.add("alpha").unwrap();
    let b = table.add("beta").unwrap();

    assert_ne!(a, b);
    assert_eq!(table.find("gamma"), None);
}

#[test]
fn empty_name_is_rejected() {
    let mut table = AtomTable::new();
    assert!(table.add("").unwrap_err().is_configuration());
    assert!(table.is_empty());
}
