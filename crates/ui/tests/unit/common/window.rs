//! # Window Identifier Tests
//!
//! This module contains unit tests for the window-type enumerator: wire
//! discriminants, round-tripping, iteration order, and display names.

use dbgview_core::WindowType;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_window_wire_ids_are_stable() {
    // These cross the FFI boundary verbatim; a renumbering is a wire break.
    assert_eq!(WindowType::Disassembly.id(), 0);
    assert_eq!(WindowType::Dump.id(), 1);
    assert_eq!(WindowType::Stack.id(), 2);
    assert_eq!(WindowType::Graph.id(), 3);
    assert_eq!(WindowType::MemoryMap.id(), 4);
    assert_eq!(WindowType::SymbolModule.id(), 5);
}

#[rstest]
#[case(WindowType::Disassembly)]
#[case(WindowType::Dump)]
#[case(WindowType::Stack)]
#[case(WindowType::Graph)]
#[case(WindowType::MemoryMap)]
#[case(WindowType::SymbolModule)]
fn test_window_id_round_trips(#[case] window: WindowType) {
    assert_eq!(WindowType::from_id(window.id()), Some(window));
}

#[test]
fn test_window_unknown_id_rejected() {
    assert_eq!(WindowType::from_id(6), None);
    assert_eq!(WindowType::from_id(u32::MAX), None);
}

#[test]
fn test_window_all_covers_each_panel_once_in_wire_order() {
    assert_eq!(WindowType::ALL.len(), 6);
    for (idx, window) in WindowType::ALL.iter().enumerate() {
        assert_eq!(window.id() as usize, idx);
    }
}

#[test]
fn test_window_display_names() {
    assert_eq!(WindowType::MemoryMap.to_string(), "memory map");
    assert_eq!(WindowType::SymbolModule.to_string(), "symbol/module");
    assert_eq!(WindowType::Disassembly.to_string(), "disassembly");
}
