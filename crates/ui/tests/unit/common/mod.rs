//! Common value type tests.
//!
//! This module contains unit tests for the fundamental facade data
//! structures: selections, window identifiers, and the boundary error type.

/// Unit tests for the boundary error type and its display output.
pub mod error;

/// Unit tests for selection construction, width, and containment.
pub mod selection;

/// Unit tests for window identifiers and wire round-tripping.
pub mod window;
