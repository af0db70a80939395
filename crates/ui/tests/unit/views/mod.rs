//! Per-window facade tests.
//!
//! This module contains unit tests verifying delegation fidelity: facades
//! forward arguments unchanged, pin the window identifier, and return
//! boundary answers verbatim.

/// Unit tests for the sibling facades and the generic bound view.
pub mod facades;
