//! UI session Python binding.
//!
//! Exposes the scripting entry point: a session owning a headless host, from
//! which per-window view objects are created. Scripts running inside a
//! debugger process use the `native-gui` plugin build instead; the Python
//! package always runs headless.

use std::sync::Arc;

use dbgview_core::host::HeadlessHost;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::view::PyView;
use dbgview_core::{UiHost, WindowType};

/// Python-exposed UI session: owns the host shared by every view object
/// created from it.
#[pyclass(name = "Ui")]
#[derive(Debug)]
pub struct PyUi {
    host: Arc<HeadlessHost>,
}

#[pymethods]
impl PyUi {
    /// Creates a headless session with every window's selection at the default.
    #[new]
    fn new() -> Self {
        Self {
            host: Arc::new(HeadlessHost::new()),
        }
    }

    /// Returns the memory-map view bound to this session.
    fn memory_map(&self) -> PyView {
        PyView::bound(&self.host, WindowType::MemoryMap)
    }

    /// Returns the disassembly view bound to this session.
    fn disassembly(&self) -> PyView {
        PyView::bound(&self.host, WindowType::Disassembly)
    }

    /// Returns the dump view bound to this session.
    fn dump(&self) -> PyView {
        PyView::bound(&self.host, WindowType::Dump)
    }

    /// Returns the stack view bound to this session.
    fn stack(&self) -> PyView {
        PyView::bound(&self.host, WindowType::Stack)
    }

    /// Requests a redraw of every panel.
    ///
    /// # Errors
    ///
    /// Returns a `PyRuntimeError` if the host reports a failure.
    fn update_all(&self) -> PyResult<()> {
        self.host
            .update_all()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Makes the host decline backwards ranges, as the real UI does.
    fn reject_backwards(&self, reject: bool) {
        self.host.reject_backwards(reject);
    }

    /// Detaches the session; subsequent view calls raise `RuntimeError`.
    fn detach(&self) {
        self.host.detach();
    }

    /// Returns the per-window redraw counters as a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns a `PyRuntimeError` if serialization fails.
    fn counters_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.host.counters())
            .map_err(|e| PyRuntimeError::new_err(format!("counter serialization failed: {e}")))
    }
}
