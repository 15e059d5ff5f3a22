//! Integration tests for roster boundary validation.

#![allow(missing_docs)]

use anyhow::Result;
use santa_core::{Participant, Roster, RosterError};

fn entry(name: &str, phone: Option<&str>) -> Participant {
    Participant::new(name, phone.map(ToString::to_string))
}

#[test]
fn test_accepts_valid_entries_and_preserves_order() -> Result<()> {
    let roster = Roster::from_entries(vec![
        entry("Alice", Some("+48123456789")),
        entry("Bob", None),
        entry("Charlie", Some("+48987654321")),
    ])?;
    let names: Vec<&str> = roster.entries().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    assert_eq!(roster.len(), 3);
    Ok(())
}

#[test]
fn test_rejects_blank_names() {
    assert_eq!(
        Roster::from_entries(vec![entry("   ", None)]),
        Err(RosterError::EmptyName)
    );
}

#[test]
fn test_rejects_duplicate_names() {
    assert_eq!(
        Roster::from_entries(vec![entry("Alice", None), entry("Alice", None)]),
        Err(RosterError::DuplicateName {
            name: "Alice".to_string()
        })
    );
}

#[test]
fn test_trims_names_before_identity_checks() {
    // "Alice" and " Alice " are the same person.
    assert_eq!(
        Roster::from_entries(vec![entry("Alice", None), entry(" Alice ", None)]),
        Err(RosterError::DuplicateName {
            name: "Alice".to_string()
        })
    );
}

#[test]
fn test_rejects_malformed_phones() {
    // Missing prefix, wrong prefix, too few digits, too many digits.
    for phone in ["123456789", "+49123456789", "+4812345678", "+481234567890"] {
        assert_eq!(
            Roster::from_entries(vec![entry("Alice", Some(phone))]),
            Err(RosterError::InvalidPhone {
                phone: phone.to_string()
            }),
            "expected rejection for {phone}"
        );
    }
}

#[test]
fn test_rejects_non_digit_local_part() {
    assert_eq!(
        Roster::from_entries(vec![entry("Alice", Some("+4812345678a"))]),
        Err(RosterError::InvalidPhone {
            phone: "+4812345678a".to_string()
        })
    );
}

#[test]
fn test_empty_phone_counts_as_absent() -> Result<()> {
    let roster = Roster::from_entries(vec![entry("Alice", Some("")), entry("Bob", Some("  "))])?;
    assert!(roster.entries().iter().all(|p| p.phone.is_none()));
    Ok(())
}

#[test]
fn test_phone_is_trimmed_then_validated() -> Result<()> {
    let roster = Roster::from_entries(vec![entry("Alice", Some(" +48123456789 "))])?;
    assert_eq!(roster.entries()[0].phone.as_deref(), Some("+48123456789"));
    Ok(())
}
