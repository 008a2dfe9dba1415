//! Common test utilities and helpers

#![allow(dead_code)]

use awesome_tool::testing::RecordingObserver;
use awesome_tool::{AwesomeService, AwesomeServiceAsync, Config};
use std::sync::Arc;
use std::time::Duration;

/// Sync service wired to a recording observer
pub fn recorded_sync(config: Config) -> (AwesomeService, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::new());
    let service = AwesomeService::with_observer(config, observer.clone());
    (service, observer)
}

/// Async service wired to a recording observer with a short delay
pub fn recorded_async(config: Config) -> (AwesomeServiceAsync, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::new());
    let service = AwesomeServiceAsync::with_observer(config, observer.clone())
        .with_delay(Duration::from_millis(10));
    (service, observer)
}
