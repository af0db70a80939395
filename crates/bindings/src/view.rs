//! Per-window view Python binding.
//!
//! Exposes one bound view to Python. The window identity is fixed when the
//! session hands the object out; `get_selection`, `set_selection`, and
//! `update` forward to the session's host unchanged. Host errors map to
//! `RuntimeError` here, at the outermost layer only.

use std::sync::Arc;

use dbgview_core::host::HeadlessHost;
use dbgview_core::views::View;
use dbgview_core::{HostError, WindowType};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::selection::PySelection;

fn host_err(e: HostError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

/// Python-exposed view: wraps a core `View` bound to one window of the
/// session's host.
#[pyclass(name = "View")]
#[derive(Debug)]
pub struct PyView {
    inner: View<Arc<HeadlessHost>>,
}

impl PyView {
    /// Binds a view onto the session's host for the given window.
    pub(crate) fn bound(host: &Arc<HeadlessHost>, window: WindowType) -> Self {
        Self {
            inner: View::new(Arc::clone(host), window),
        }
    }
}

#[pymethods]
impl PyView {
    /// Returns the human-readable name of the bound window.
    #[getter]
    fn window(&self) -> String {
        self.inner.window().to_string()
    }

    /// Returns the raw window identifier used on the wire to the host.
    #[getter]
    fn window_id(&self) -> u32 {
        self.inner.window().id()
    }

    /// Returns the window's current selection, untransformed.
    ///
    /// # Errors
    ///
    /// Raises `RuntimeError` if the host reports a failure.
    fn get_selection(&self) -> PyResult<PySelection> {
        self.inner.selection().map(Into::into).map_err(host_err)
    }

    /// Applies a selection; returns the host's accept flag verbatim.
    ///
    /// # Errors
    ///
    /// Raises `RuntimeError` if the host reports a failure.
    fn set_selection(&self, selection: &PySelection) -> PyResult<bool> {
        self.inner.set_selection(selection.inner).map_err(host_err)
    }

    /// Requests a redraw of the bound window.
    ///
    /// # Errors
    ///
    /// Raises `RuntimeError` if the host reports a failure.
    fn update(&self) -> PyResult<()> {
        self.inner.update().map_err(host_err)
    }
}
