//! # Boundary Error Tests
//!
//! This module contains unit tests for the host error type and its
//! display output.

use dbgview_core::{HostError, WindowType};

#[test]
fn test_error_detached_display() {
    let err = HostError::Detached;
    assert_eq!(format!("{}", err), "no native UI is attached");
}

#[test]
fn test_error_window_unavailable_display() {
    let err = HostError::WindowUnavailable(WindowType::MemoryMap);
    assert_eq!(format!("{}", err), "window memory map is unavailable");
}

#[test]
fn test_error_native_status_display() {
    let err = HostError::Native(-3);
    assert_eq!(format!("{}", err), "native UI call failed with status -3");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&HostError::Detached);
}
