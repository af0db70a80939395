//! Dump view facade.

use crate::common::{HostResult, Selection, WindowType};
use crate::host::UiHost;
use crate::views::view::View;

/// Facade over the native data-dump window; same three-operation surface as
/// [`MemoryMap`](crate::views::MemoryMap), bound to its own window constant.
#[derive(Clone, Copy, Debug)]
pub struct Dump<H> {
    view: View<H>,
}

impl<H: UiHost> Dump<H> {
    /// The window every operation of this facade targets.
    pub const WINDOW: WindowType = WindowType::Dump;

    /// Creates the facade over the given host.
    pub const fn new(host: H) -> Self {
        Self {
            view: View::new(host, Self::WINDOW),
        }
    }

    /// Returns the selected range from the dump view.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn selection(&self) -> HostResult<Selection> {
        self.view.selection()
    }

    /// Applies a selection; returns the host's accept flag verbatim.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn set_selection(&self, selection: Selection) -> HostResult<bool> {
        self.view.set_selection(selection)
    }

    /// Requests a redraw of the dump view.
    ///
    /// # Errors
    ///
    /// Propagates the host's error unchanged.
    pub fn update(&self) -> HostResult<()> {
        self.view.update()
    }
}
