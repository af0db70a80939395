//! Common types shared across the debugger UI facade.
//!
//! This module provides the fundamental value types exchanged with the native
//! boundary. It includes:
//! 1. **Selections:** The inclusive address range a view reports as selected.
//! 2. **Window identifiers:** The enumerator naming which native panel an
//!    operation targets.
//! 3. **Error handling:** The boundary-owned error type and result alias.

/// Boundary error type and result alias.
pub mod error;

/// Selected address range representation.
pub mod selection;

/// Native UI panel identifiers.
pub mod window;

pub use error::{HostError, HostResult};
pub use selection::Selection;
pub use window::WindowType;
