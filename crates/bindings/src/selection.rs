//! Selection Python binding.
//!
//! Exposes the core `Selection` to Python as an immutable value object:
//! construct with `(start, end)`, read the bounds and width, and serialize
//! to JSON for scripting diagnostics.

use dbgview_core::Selection;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-exposed selection: an inclusive address range, carried opaquely.
#[pyclass(name = "Selection", eq, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PySelection {
    pub inner: Selection,
}

#[pymethods]
impl PySelection {
    /// Creates a selection from raw bounds; no validation is performed.
    #[new]
    fn new(start: u64, end: u64) -> Self {
        Self {
            inner: Selection::new(start, end),
        }
    }

    #[getter]
    fn start(&self) -> u64 {
        self.inner.start
    }

    #[getter]
    fn end(&self) -> u64 {
        self.inner.end
    }

    #[getter]
    fn size(&self) -> u64 {
        self.inner.size()
    }

    /// Returns `True` when the range covers no addresses.
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `True` when `addr` falls within the range.
    fn contains(&self, addr: u64) -> bool {
        self.inner.contains(addr)
    }

    /// Serializes the selection to a JSON object string (`start`, `end`).
    ///
    /// # Errors
    ///
    /// Returns a `PyValueError` if serialization fails.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| PyValueError::new_err(format!("selection serialization failed: {e}")))
    }

    fn __repr__(&self) -> String {
        format!("Selection({:#x}, {:#x})", self.inner.start, self.inner.end)
    }
}

impl From<Selection> for PySelection {
    fn from(inner: Selection) -> Self {
        Self { inner }
    }
}
