//! Testing utilities
//!
//! Test doubles for the service seams, usable from unit and integration tests.

pub mod observer;

pub use observer::{ObservedEvent, RecordingObserver};
