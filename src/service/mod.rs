//! Processing services: validate, memoize, transform and batch.
//!
//! [`AwesomeService`] is the single-owner synchronous variant.
//! [`AwesomeServiceAsync`] takes `&self` everywhere, fans batches out
//! concurrently and shares one computation between concurrent requests
//! for the same input.

use serde::{Deserialize, Serialize};

pub mod async_service;
pub mod observer;
pub mod sync;

pub use async_service::AwesomeServiceAsync;
pub use observer::{NoopObserver, ProcessObserver, TracingObserver};
pub use sync::AwesomeService;

/// Cache namespace of the synchronous service
pub const SYNC_NAMESPACE: &str = "awesome_tool";

/// Cache namespace of the asynchronous service
pub const ASYNC_NAMESPACE: &str = "awesome_tool_async";

/// Read-only snapshot of a service's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub service_name: String,
    pub cache_size: usize,
    pub database: String,
    pub debug_mode: bool,
}

/// Cache keys use the raw input so that distinct inputs never collide.
pub(crate) fn namespaced_key(namespace: &str, input: &str) -> String {
    format!("{namespace}_{input}")
}
