//! Boundary error definitions.
//!
//! This module defines the error type owned by the native UI boundary. It
//! provides:
//! 1. **Failure taxonomy:** The ways a host call can fail, as the boundary
//!    itself reports them.
//! 2. **Pass-through:** The facade layer never wraps, translates, or retries
//!    these; a host error surfaces to the caller exactly as produced.

use thiserror::Error;

use super::window::WindowType;

/// Error reported by the native UI boundary.
///
/// Produced only by `UiHost` implementations. The view facades propagate
/// these unchanged with `?`; any mapping to a scripting exception happens at
/// the outermost binding layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// No native UI is attached.
    ///
    /// Raised when the host runs outside a debugger process, or after a
    /// session has been closed.
    #[error("no native UI is attached")]
    Detached,

    /// The target panel does not exist or is not selectable right now.
    #[error("window {0} is unavailable")]
    WindowUnavailable(WindowType),

    /// Raw status code surfaced by the native layer, forwarded verbatim.
    #[error("native UI call failed with status {0}")]
    Native(i32),
}

/// Result alias for native boundary calls.
pub type HostResult<T> = Result<T, HostError>;
