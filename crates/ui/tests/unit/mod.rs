//! Unit tests for the UI facade layer.

/// Unit tests for the shared value types (selections, windows, errors).
pub mod common;


/// Unit tests for the per-window facades.
pub mod views;
