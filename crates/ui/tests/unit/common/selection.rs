//! # Selection Tests
//!
//! This module contains unit tests for the selection value type: bound
//! handling, width arithmetic, containment, and display formatting.

use dbgview_core::Selection;
use pretty_assertions::assert_eq;

#[test]
fn test_selection_carries_bounds_unchanged() {
    let sel = Selection::new(0x1000, 0x2000);
    assert_eq!(sel.start, 0x1000);
    assert_eq!(sel.end, 0x2000);
}

#[test]
fn test_selection_size_inclusive() {
    let sel = Selection::new(0x1000, 0x1FFF);
    assert_eq!(sel.size(), 0x1000);
}

#[test]
fn test_selection_single_address_size() {
    let sel = Selection::new(0x400000, 0x400000);
    assert_eq!(sel.size(), 1);
    assert!(!sel.is_empty());
}

#[test]
fn test_selection_backwards_range_is_representable() {
    // The type never normalizes; a backwards range keeps its bounds.
    let sel = Selection::new(0xFFFF_FFFF, 0x0);
    assert_eq!(sel.start, 0xFFFF_FFFF);
    assert_eq!(sel.end, 0x0);
    assert_eq!(sel.size(), 0);
    assert!(sel.is_empty());
}

#[test]
fn test_selection_full_range_size_saturates() {
    let sel = Selection::new(0, u64::MAX);
    assert_eq!(sel.size(), u64::MAX);
}

#[test]
fn test_selection_contains_bounds_and_interior() {
    let sel = Selection::new(0x1000, 0x2000);
    assert!(sel.contains(0x1000));
    assert!(sel.contains(0x1800));
    assert!(sel.contains(0x2000));
    assert!(!sel.contains(0xFFF));
    assert!(!sel.contains(0x2001));
}

#[test]
fn test_selection_backwards_range_contains_nothing() {
    let sel = Selection::new(0x2000, 0x1000);
    assert!(!sel.contains(0x1800));
}

#[test]
fn test_selection_default_is_empty_at_zero() {
    let sel = Selection::default();
    assert_eq!(sel, Selection::new(0, 0));
    assert_eq!(sel.size(), 1);
}

#[test]
fn test_selection_display_hex() {
    let sel = Selection::new(0x1000, 0x2000);
    assert_eq!(format!("{}", sel), "0x1000..=0x2000");
}

#[test]
fn test_selection_from_tuple() {
    let sel: Selection = (0x7FFE_0000, 0x7FFE_0FFF).into();
    assert_eq!(sel, Selection::new(0x7FFE_0000, 0x7FFE_0FFF));
}

#[test]
fn test_selection_json_shape() {
    let sel = Selection::new(0x1000, 0x2000);
    let json = serde_json::to_string(&sel).unwrap();
    assert_eq!(json, r#"{"start":4096,"end":8192}"#);
}
