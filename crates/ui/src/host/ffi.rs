//! FFI-backed host bound to the debugger plugin SDK.
//!
//! This module binds `UiHost` directly to the debugger's C plugin interface,
//! for builds of this crate that are loaded inside the debugger process. It
//! provides:
//! 1. **Raw declarations:** The SDK's selection get/set and window refresh
//!    entry points, taken as-is.
//! 2. **`FfiHost`:** A zero-state adapter translating between `Selection` and
//!    the SDK's C range struct.
//!
//! The SDK reports selection calls as plain success/failure; a failed read
//! maps to [`HostError::WindowUnavailable`] since the SDK only fails when the
//! requested panel cannot answer.

use crate::common::{HostError, HostResult, Selection, WindowType};
use crate::host::traits::UiHost;

/// The SDK's C layout for a selection range.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
struct RawSelection {
    start: u64,
    end: u64,
}

// Entry point names are fixed by the SDK.
#[allow(non_snake_case)]
unsafe extern "C" {
    fn GuiSelectionGet(window: u32, selection: *mut RawSelection) -> bool;
    fn GuiSelectionSet(window: u32, selection: *const RawSelection) -> bool;
    fn GuiUpdateWindow(window: u32);
}

/// `UiHost` implementation calling straight into the debugger UI process.
///
/// Stateless: all state lives on the native side. Only meaningful when the
/// containing library has been loaded by the debugger; calls made elsewhere
/// will fail to resolve at load time, not at call time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfiHost;

impl FfiHost {
    /// Creates the FFI host.
    ///
    /// # Returns
    ///
    /// A zero-sized handle onto the in-process plugin SDK.
    pub const fn new() -> Self {
        Self
    }
}

impl UiHost for FfiHost {
    fn selection(&self, window: WindowType) -> HostResult<Selection> {
        let mut raw = RawSelection { start: 0, end: 0 };
        // SAFETY: `raw` is a valid, writable `RawSelection` for the duration
        // of the call, and the SDK writes it only on success.
        let ok = unsafe { GuiSelectionGet(window.id(), &mut raw) };
        if ok {
            Ok(Selection::new(raw.start, raw.end))
        } else {
            Err(HostError::WindowUnavailable(window))
        }
    }

    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool> {
        let raw = RawSelection {
            start: selection.start,
            end: selection.end,
        };
        // SAFETY: `raw` is a valid `RawSelection` for the duration of the
        // call; the SDK reads it and takes no ownership.
        Ok(unsafe { GuiSelectionSet(window.id(), &raw) })
    }

    fn update(&self, window: WindowType) -> HostResult<()> {
        // SAFETY: takes a plain window identifier, no pointers involved.
        unsafe { GuiUpdateWindow(window.id()) };
        Ok(())
    }
}
