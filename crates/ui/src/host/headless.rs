//! Headless in-process host.
//!
//! This module provides a `UiHost` implementation that needs no debugger
//! process. It is a call tracker, not a renderer:
//! 1. **Selection table:** One current `Selection` per window, starting at the
//!    default (address zero).
//! 2. **Redraw counters:** `update` increments a per-window counter instead of
//!    repainting anything.
//! 3. **Policies:** Optional rejection of backwards ranges, mirroring how the
//!    real UI declines an out-of-range request, and an explicit detach switch
//!    for driving teardown paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::trace;

use crate::common::{HostError, HostResult, Selection, WindowType};
use crate::host::traits::UiHost;

const WINDOW_COUNT: usize = WindowType::ALL.len();

/// Snapshot of redraw activity per window.
///
/// Exported as JSON through the scripting bindings for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RedrawCounts {
    /// Redraws requested for the disassembly view.
    pub disassembly: u64,
    /// Redraws requested for the dump view.
    pub dump: u64,
    /// Redraws requested for the stack view.
    pub stack: u64,
    /// Redraws requested for the graph view.
    pub graph: u64,
    /// Redraws requested for the memory-map view.
    pub memory_map: u64,
    /// Redraws requested for the symbol/module view.
    pub symbol_module: u64,
}

impl RedrawCounts {
    /// Returns the redraw count recorded for one window.
    ///
    /// # Arguments
    ///
    /// * `window` - The panel to query.
    ///
    /// # Returns
    ///
    /// The number of `update` calls seen for that panel.
    pub const fn get(&self, window: WindowType) -> u64 {
        match window {
            WindowType::Disassembly => self.disassembly,
            WindowType::Dump => self.dump,
            WindowType::Stack => self.stack,
            WindowType::Graph => self.graph,
            WindowType::MemoryMap => self.memory_map,
            WindowType::SymbolModule => self.symbol_module,
        }
    }

    fn bump(&mut self, window: WindowType) {
        match window {
            WindowType::Disassembly => self.disassembly += 1,
            WindowType::Dump => self.dump += 1,
            WindowType::Stack => self.stack += 1,
            WindowType::Graph => self.graph += 1,
            WindowType::MemoryMap => self.memory_map += 1,
            WindowType::SymbolModule => self.symbol_module += 1,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    selections: [Selection; WINDOW_COUNT],
    counts: RedrawCounts,
}

/// A `UiHost` with no UI behind it.
///
/// Used by tests, examples, and scripting sessions running outside a debugger
/// process. Thread-safe via interior mutability; every boundary call is traced.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    state: Mutex<State>,
    reject_backwards: AtomicBool,
    detached: AtomicBool,
}

impl HeadlessHost {
    /// Creates a headless host with every window's selection at the default.
    ///
    /// # Returns
    ///
    /// A host that accepts every selection and counts redraws.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `set_selection` decline ranges whose end precedes their start.
    ///
    /// The real UI answers such requests with a `false` accept flag rather
    /// than an error; enabling this reproduces that answer.
    ///
    /// # Arguments
    ///
    /// * `reject` - Whether backwards ranges should be declined.
    pub fn reject_backwards(&self, reject: bool) {
        self.reject_backwards.store(reject, Ordering::Relaxed);
    }

    /// Detaches the host: every subsequent call fails with
    /// [`HostError::Detached`].
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Relaxed);
    }

    /// Returns the redraw counters recorded so far.
    ///
    /// # Returns
    ///
    /// A snapshot of per-window `update` counts.
    pub fn counters(&self) -> RedrawCounts {
        self.lock().counts
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_attached(&self) -> HostResult<()> {
        if self.detached.load(Ordering::Relaxed) {
            Err(HostError::Detached)
        } else {
            Ok(())
        }
    }
}

impl UiHost for HeadlessHost {
    fn selection(&self, window: WindowType) -> HostResult<Selection> {
        self.check_attached()?;
        let sel = self.lock().selections[window.id() as usize];
        trace!(window = %window, %sel, "selection read");
        Ok(sel)
    }

    fn set_selection(&self, window: WindowType, selection: Selection) -> HostResult<bool> {
        self.check_attached()?;
        if self.reject_backwards.load(Ordering::Relaxed) && selection.end < selection.start {
            trace!(window = %window, %selection, "selection declined");
            return Ok(false);
        }
        self.lock().selections[window.id() as usize] = selection;
        trace!(window = %window, %selection, "selection applied");
        Ok(true)
    }

    fn update(&self, window: WindowType) -> HostResult<()> {
        self.check_attached()?;
        self.lock().counts.bump(window);
        trace!(window = %window, "redraw requested");
        Ok(())
    }
}
