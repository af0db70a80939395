//! Python bindings for the debugger UI facade.
//!
//! This crate exposes the UI facade surface to Python via PyO3. It provides:
//! 1. **Session:** `PyUi` owning a headless host; entry point for scripts.
//! 2. **Views:** `PyView` per-window facade objects (memory map, disassembly,
//!    dump, stack) sharing the session's host.
//! 3. **Selections:** `PySelection` value objects crossing the Python boundary.
//! 4. **Utilities:** Version string and tracing initialisation.

use pyo3::prelude::*;

/// Selection value binding (`PySelection`).
pub mod selection;
/// UI session binding (`PyUi`).
pub mod session;
/// Utility functions (version, logging).
pub mod utils;
/// Per-window view binding (`PyView`).
pub mod view;

/// Registers all UI facade classes and functions onto the given Python module.
///
/// Called from the `#[pymodule]` entry point to expose `PyUi`, `PyView`,
/// `PySelection`, and the utility functions.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_ui_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<session::PyUi>()?;
    m.add_class::<view::PyView>()?;
    m.add_class::<selection::PySelection>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn dbgview(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_ui_module(m)?;
    Ok(())
}
