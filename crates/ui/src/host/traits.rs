//! Boundary trait for the native UI subsystem.
//!
//! This module defines the `UiHost` trait implemented by anything standing in
//! for the debugger's UI layer. It provides:
//! 1. **Primitives:** Selection get/set and a redraw request, each keyed by a
//!    window type.
//! 2. **Whole-UI refresh:** A defaulted `update_all` iterating every panel.
//! 3. **Sharing:** Blanket impls for references, boxes, and `Arc` so several
//!    facades can drive one host.
//!
//! All implementors must be `Send + Sync`: scripting layers call in from
//! arbitrary threads, so stateful hosts use interior mutability. Callers
//! should still treat every call as potentially blocking on a single shared
//! UI subsystem.

use std::sync::Arc;

use crate::common::{HostResult, Selection, WindowType};

/// The native UI boundary: selection state and redraw for one window per call.
///
/// Selections cross this boundary opaquely. Implementations report failures
/// through [`HostError`](crate::common::HostError); the facade layer above
/// never inspects, repairs, or retries.
pub trait UiHost: Send + Sync {
    /// Returns the current selection of the given window.
    fn selection(&self, window: WindowType) -> HostResult<Selection>;

    /// Replaces the given window's selection.
    ///
    /// Returns the host's accept flag: `Ok(false)` means the host declined
    /// the range (e.g. out of bounds for the view) without treating the call
    /// itself as a failure.
    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool>;

    /// Requests a redraw of the given window. Fire-and-forget: completion of
    /// the repaint is not acknowledged.
    fn update(&self, window: WindowType) -> HostResult<()>;

    /// Requests a redraw of every panel.
    fn update_all(&self) -> HostResult<()> {
        for window in WindowType::ALL {
            self.update(window)?;
        }
        Ok(())
    }
}

impl<H: UiHost + ?Sized> UiHost for &H {
    fn selection(&self, window: WindowType) -> HostResult<Selection> {
        (**self).selection(window)
    }

    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool> {
        (**self).set_selection(window, selection)
    }

    fn update(&self, window: WindowType) -> HostResult<()> {
        (**self).update(window)
    }

    fn update_all(&self) -> HostResult<()> {
        (**self).update_all()
    }
}

impl<H: UiHost + ?Sized> UiHost for Box<H> {
    fn selection(&self, window: WindowType) -> HostResult<Selection> {
        (**self).selection(window)
    }

    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool> {
        (**self).set_selection(window, selection)
    }

    fn update(&self, window: WindowType) -> HostResult<()> {
        (**self).update(window)
    }

    fn update_all(&self) -> HostResult<()> {
        (**self).update_all()
    }
}

impl<H: UiHost + ?Sized> UiHost for Arc<H> {
    fn selection(&self, window: WindowType) -> HostResult<Selection> {
        (**self).selection(window)
    }

    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool> {
        (**self).set_selection(window, selection)
    }

    fn update(&self, window: WindowType) -> HostResult<()> {
        (**self).update(window)
    }

    fn update_all(&self) -> HostResult<()> {
        (**self).update_all()
    }
}
