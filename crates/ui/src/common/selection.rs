//! Selected address range of a debugger view.
//!
//! This module defines the `Selection` value exchanged with the native UI
//! boundary. It provides:
//! 1. **Representation:** Inclusive 64-bit start/end bounds as reported by the host.
//! 2. **Opacity:** The facade layer never normalizes or validates a selection;
//!    whatever the host (or a caller) produced travels through unchanged.
//! 3. **Inspection helpers:** Width, emptiness, and containment queries for
//!    scripting convenience.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inclusive address range selected in a debugger view.
///
/// Both bounds are raw 64-bit addresses as the native UI reports them. The
/// type performs no validation: a backwards range such as
/// `Selection::new(0xFFFF_FFFF, 0x0)` is representable and is passed to the
/// host exactly as constructed. Whether such a range is acceptable is the
/// host's decision, surfaced through the boolean result of a set operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// First selected address.
    pub start: u64,
    /// Last selected address (inclusive).
    pub end: u64,
}

impl Selection {
    /// Creates a selection from raw bounds, without normalization.
    ///
    /// # Arguments
    ///
    /// * `start` - First selected address.
    /// * `end` - Last selected address (inclusive).
    ///
    /// # Returns
    ///
    /// A new `Selection` carrying the bounds exactly as given.
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns the number of addresses covered by the selection.
    ///
    /// For an ordered range this is `end - start + 1`. A backwards range
    /// (`end < start`) reports zero rather than wrapping; the bounds
    /// themselves are left untouched.
    ///
    /// # Returns
    ///
    /// The selection width in addresses, saturating at `u64::MAX`.
    #[inline]
    pub const fn size(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// Returns `true` when the selection covers no addresses.
    ///
    /// # Returns
    ///
    /// `true` for backwards ranges, `false` otherwise. A single-address
    /// selection (`start == end`) is not empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` when `addr` falls within the selected range.
    ///
    /// # Arguments
    ///
    /// * `addr` - The address to test.
    ///
    /// # Returns
    ///
    /// `true` if `start <= addr <= end`; always `false` for backwards ranges.
    #[inline]
    pub const fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}..={:#x}", self.start, self.end)
    }
}

impl From<(u64, u64)> for Selection {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}
