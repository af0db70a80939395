//! Per-window facades.
//!
//! This module provides the typed entry points scripting code uses to drive
//! one specific native panel. It includes:
//! 1. **Bound view:** `View`, a host handle fixed to one window, implementing
//!    the three forwarding operations once.
//! 2. **Typed facades:** `MemoryMap`, `Disassembly`, `Dump`, and `Stack`, each
//!    pinning the window constant at the type level so callers never handle a
//!    raw window identifier.
//!
//! Facades are stateless beyond the injected host and the window constant;
//! every operation is a single synchronous round-trip to the boundary.

/// Disassembly view facade.
pub mod disassembly;

/// Dump view facade.
pub mod dump;

/// Memory-map view facade.
pub mod memory_map;

/// Stack view facade.
pub mod stack;

/// Generic host-plus-window binding.
pub mod view;

pub use disassembly::Disassembly;
pub use dump::Dump;
pub use memory_map::MemoryMap;
pub use stack::Stack;
pub use view::View;
