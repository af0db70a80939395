//! Debugger UI facade library.
//!
//! This crate exposes the selection and redraw surface of a native debugger UI
//! to scripting and tooling. It provides the following:
//! 1. **Value types:** `Selection` address ranges, `WindowType` panel identifiers,
//!    and the boundary error type.
//! 2. **Boundary:** The `UiHost` trait modelling the native UI subsystem, with a
//!    headless in-process implementation and an optional FFI-backed one.
//! 3. **Views:** Per-window facades (`MemoryMap`, `Disassembly`, `Dump`, `Stack`)
//!    that bind a host to one fixed window and forward its three operations.

/// Common types (selections, window identifiers, boundary errors).
pub mod common;
/// Native UI boundary (trait, headless host, FFI host).
pub mod host;
/// Per-window facades bound to a fixed window type.
pub mod views;

/// Selected address range of a debugger view; exchanged opaquely with the host.
pub use crate::common::Selection;
/// Identifier for a native UI panel; fixed per facade.
pub use crate::common::WindowType;
/// Error type owned by the native boundary; facades propagate it unchanged.
pub use crate::common::{HostError, HostResult};
/// The native boundary trait; implement it to attach a real or test UI.
pub use crate::host::UiHost;
/// The memory-map facade; construct with `MemoryMap::new(host)`.
pub use crate::views::MemoryMap;
