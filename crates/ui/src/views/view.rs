//! Host binding for one window.
//!
//! This module implements the forwarding core shared by every typed facade:
//! a host handle paired with a fixed `WindowType`, relaying the boundary's
//! three operations without inspecting their payloads.

use crate::common::{HostResult, Selection, WindowType};
use crate::host::UiHost;

/// A native window bound to a host.
///
/// Carries no state beyond the host handle and the window identity; the
/// typed facades embed one of these with their window pinned at construction.
#[derive(Clone, Copy, Debug)]
pub struct View<H> {
    host: H,
    window: WindowType,
}

impl<H: UiHost> View<H> {
    /// Binds a host to one window.
    ///
    /// # Arguments
    ///
    /// * `host` - The native boundary to forward to.
    /// * `window` - The panel every operation of this view targets.
    ///
    /// # Returns
    ///
    /// A view forwarding exclusively to `window`.
    pub const fn new(host: H, window: WindowType) -> Self {
        Self { host, window }
    }

    /// Returns the window this view is bound to.
    pub const fn window(&self) -> WindowType {
        self.window
    }

    /// Returns the current selection reported by the host, untransformed.
    ///
    /// # Errors
    ///
    /// Whatever the host reports, unchanged.
    pub fn selection(&self) -> HostResult<Selection> {
        self.host.selection(self.window)
    }

    /// Forwards a selection to the host, unchanged.
    ///
    /// # Arguments
    ///
    /// * `selection` - The range to apply; not validated here.
    ///
    /// # Returns
    ///
    /// The host's accept flag, verbatim.
    ///
    /// # Errors
    ///
    /// Whatever the host reports, unchanged.
    pub fn set_selection(&self, selection: Selection) -> HostResult<bool> {
        self.host.set_selection(self.window, selection)
    }

    /// Requests a redraw of the bound window. Fire-and-forget.
    ///
    /// # Errors
    ///
    /// Whatever the host reports, unchanged.
    pub fn update(&self) -> HostResult<()> {
        self.host.update(self.window)
    }
}
