//! # Sibling Facade and Bound View Tests
//!
//! This module contains unit tests for the disassembly, dump, and stack
//! facades and for the generic bound view they share: each must pin its own
//! window constant and forward values verbatim.

use crate::common::mocks::{Call, RecordingHost};
use dbgview_core::views::{Disassembly, Dump, Stack, View};
use dbgview_core::{Selection, WindowType};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(WindowType::Disassembly)]
#[case(WindowType::Dump)]
#[case(WindowType::Stack)]
#[case(WindowType::Graph)]
#[case(WindowType::MemoryMap)]
#[case(WindowType::SymbolModule)]
fn test_bound_view_targets_only_its_window(#[case] window: WindowType) {
    let host = RecordingHost::new();
    let view = View::new(&host, window);

    assert_eq!(view.window(), window);
    let _ = view.selection();
    let _ = view.set_selection(Selection::new(0x100, 0x200));
    view.update().unwrap();

    for seen in host.windows_seen() {
        assert_eq!(seen, window);
    }
}

#[test]
fn test_sibling_window_constants() {
    assert_eq!(
        Disassembly::<RecordingHost>::WINDOW,
        WindowType::Disassembly
    );
    assert_eq!(Dump::<RecordingHost>::WINDOW, WindowType::Dump);
    assert_eq!(Stack::<RecordingHost>::WINDOW, WindowType::Stack);
}

#[test]
fn test_disassembly_forwards_to_its_own_window() {
    let host = RecordingHost::new();
    let dis = Disassembly::new(&host);
    let sel = Selection::new(0x400000, 0x400010);

    assert!(dis.set_selection(sel).unwrap());
    dis.update().unwrap();

    assert_eq!(
        host.calls(),
        vec![
            Call::SetSelection(WindowType::Disassembly, sel),
            Call::Update(WindowType::Disassembly),
        ]
    );
}

#[test]
fn test_dump_and_stack_reply_pass_through() {
    let reported = Selection::new(0x7FF0_0000, 0x7FF0_00FF);
    let host = RecordingHost::new().replying_selection(Ok(reported));

    assert_eq!(Dump::new(&host).selection().unwrap(), reported);
    assert_eq!(Stack::new(&host).selection().unwrap(), reported);
    assert_eq!(
        host.calls(),
        vec![
            Call::Selection(WindowType::Dump),
            Call::Selection(WindowType::Stack),
        ]
    );
}

#[test]
fn test_facades_share_one_host_by_reference() {
    let host = RecordingHost::new();
    let dis = Disassembly::new(&host);
    let dump = Dump::new(&host);

    dis.update().unwrap();
    dump.update().unwrap();

    assert_eq!(
        host.calls(),
        vec![
            Call::Update(WindowType::Disassembly),
            Call::Update(WindowType::Dump),
        ]
    );
}
