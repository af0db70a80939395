//! Utility functions exposed to Python.
//!
//! Provides version and logging helpers for the `dbgview` module.

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the facade version string (e.g., for scripting or diagnostics).
///
/// # Returns
///
/// A version string such as `"0.3.1"`.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initialises tracing output for the facade layer.
///
/// Respects `RUST_LOG` (e.g. `RUST_LOG=dbgview_core=trace` to see every
/// boundary call). Calling more than once is harmless; later calls are
/// ignored.
#[pyfunction]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
