//! Observability hooks for the processing services.
//!
//! Services report what they do through a [`ProcessObserver`] they own
//! instead of logging through a global. [`TracingObserver`] is the
//! production implementation.

use crate::config::Config;
use crate::error::ProcessError;
use tracing::{debug, error, info};

/// Callbacks fired by the processing services. Every method defaults to a no-op.
pub trait ProcessObserver: Send + Sync {
    /// A service instance was constructed
    fn service_started(&self, _service: &str, _config: &Config) {}

    /// A request was served from the cache without recomputation
    fn cache_hit(&self, _service: &str, _input: &str) {}

    /// A new result was computed and stored
    fn computed(&self, _service: &str, _input: &str) {}

    /// A batch of `_len` items is about to be processed
    fn batch_started(&self, _service: &str, _len: usize) {}

    /// An item inside a batch failed and was replaced by an error record
    fn item_failed(&self, _service: &str, _input: &str, _error: &ProcessError) {}

    /// The cache was emptied, dropping `_evicted` entries
    fn cache_cleared(&self, _service: &str, _evicted: usize) {}
}

/// Forwards service events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProcessObserver for TracingObserver {
    fn service_started(&self, service: &str, config: &Config) {
        info!(
            service_name = config.service_name(),
            "{} initialized with database: {}",
            service,
            config.database_name()
        );
    }

    fn cache_hit(&self, service: &str, input: &str) {
        debug!("{} returning cached result for: {}", service, input);
    }

    fn computed(&self, service: &str, input: &str) {
        info!("{} processing: {}", service, input);
    }

    fn batch_started(&self, service: &str, len: usize) {
        info!("{} batch processing {} items", service, len);
    }

    fn item_failed(&self, service: &str, input: &str, error: &ProcessError) {
        error!(
            reason = %error.reason(),
            "Error processing item {:?} in {}: {}",
            input,
            service,
            error
        );
    }

    fn cache_cleared(&self, service: &str, evicted: usize) {
        info!("Clearing {} cache ({} entries)", service, evicted);
    }
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProcessObserver for NoopObserver {}
