//! Memory-map view facade.
//!
//! The typed entry point for the panel showing the process's memory regions
//! and pages. It provides:
//! 1. **Fixed identity:** Every call targets [`WindowType::MemoryMap`]; the
//!    raw window identifier never reaches callers.
//! 2. **Forwarding:** Selection get/set and redraw relayed to the injected
//!    host with no transformation, validation, or error translation.

use crate::common::{HostResult, Selection, WindowType};
use crate::host::UiHost;
use crate::views::view::View;

/// Facade over the native memory-map window.
///
/// Stateless apart from the injected host; each operation is an independent
/// synchronous round-trip to the boundary with no ordering requirement
/// between calls.
#[derive(Clone, Copy, Debug)]
pub struct MemoryMap<H> {
    view: View<H>,
}

impl<H: UiHost> MemoryMap<H> {
    /// The window every operation of this facade targets.
    pub const WINDOW: WindowType = WindowType::MemoryMap;

    /// Creates the facade over the given host.
    ///
    /// # Arguments
    ///
    /// * `host` - The native boundary to forward to.
    ///
    /// # Returns
    ///
    /// A facade bound to the memory-map window.
    pub const fn new(host: H) -> Self {
        Self {
            view: View::new(host, Self::WINDOW),
        }
    }

    /// Returns the selected range from the memory map.
    ///
    /// # Returns
    ///
    /// The host's current selection for this window, untransformed.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn selection(&self) -> HostResult<Selection> {
        self.view.selection()
    }

    /// Applies a selection to the memory map.
    ///
    /// The range is assumed well-formed by the caller; no validation happens
    /// here.
    ///
    /// # Arguments
    ///
    /// * `selection` - The range to select.
    ///
    /// # Returns
    ///
    /// `true` if the host accepted and applied the range, `false` if it
    /// declined it.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn set_selection(&self, selection: Selection) -> HostResult<bool> {
        self.view.set_selection(selection)
    }

    /// Requests a redraw of the memory map. Completion is not acknowledged.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn update(&self) -> HostResult<()> {
        self.view.update()
    }
}
