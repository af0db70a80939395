//! Native UI boundary.
//!
//! This module abstracts the external UI subsystem that actually renders
//! windows and tracks selection state. It provides:
//! 1. **Trait:** `UiHost`, the three primitive operations keyed by window type.
//! 2. **Headless host:** An in-process stand-in for tests and scripting
//!    without an attached debugger.
//! 3. **FFI host:** A binding to the debugger plugin SDK for in-process use
//!    (feature `native-gui`).

#[cfg(feature = "native-gui")]
/// FFI-backed host bound to the debugger plugin SDK.
pub mod ffi;

/// Headless in-process host (selection table plus redraw counters).
pub mod headless;

/// The `UiHost` boundary trait.
pub mod traits;

pub use headless::HeadlessHost;
pub use traits::UiHost;
