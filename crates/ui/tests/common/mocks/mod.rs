//! Mock implementations of the native UI boundary.


pub use host::{Call, MockHost, RecordingHost, SyncHost};
