//! Native UI panel identifiers.
//!
//! This module defines the enumerator naming which native window an operation
//! targets. It provides:
//! 1. **Identity:** One variant per selectable panel, with the raw
//!    discriminants the native boundary expects on the wire.
//! 2. **Iteration:** A constant slice of all panels for whole-UI operations
//!    such as a global redraw.
//! 3. **Conversion:** Raw-identifier round-tripping for FFI and scripting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a selectable native UI panel.
///
/// The discriminants match the native boundary's window enumeration and must
/// not be reordered; they cross the FFI boundary verbatim.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowType {
    /// The disassembly view.
    Disassembly = 0,
    /// The data dump view.
    Dump = 1,
    /// The call-stack view.
    Stack = 2,
    /// The control-flow graph view.
    Graph = 3,
    /// The memory-map view (process memory regions and pages).
    MemoryMap = 4,
    /// The symbol/module view.
    SymbolModule = 5,
}

impl WindowType {
    /// Every selectable panel, in wire-identifier order.
    pub const ALL: [Self; 6] = [
        Self::Disassembly,
        Self::Dump,
        Self::Stack,
        Self::Graph,
        Self::MemoryMap,
        Self::SymbolModule,
    ];

    /// Returns the raw identifier the native boundary expects.
    ///
    /// # Returns
    ///
    /// The wire discriminant for this panel.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Looks up a panel from its raw wire identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The wire discriminant.
    ///
    /// # Returns
    ///
    /// The matching panel, or `None` for an unknown identifier.
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Disassembly),
            1 => Some(Self::Dump),
            2 => Some(Self::Stack),
            3 => Some(Self::Graph),
            4 => Some(Self::MemoryMap),
            5 => Some(Self::SymbolModule),
            _ => None,
        }
    }

    /// Returns the human-readable panel name.
    ///
    /// # Returns
    ///
    /// A short static name such as `"memory map"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disassembly => "disassembly",
            Self::Dump => "dump",
            Self::Stack => "stack",
            Self::Graph => "graph",
            Self::MemoryMap => "memory map",
            Self::SymbolModule => "symbol/module",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
