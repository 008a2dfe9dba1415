use crate::config::Config;
use crate::error::ProcessError;
use crate::service::ProcessObserver;
use std::sync::{Mutex, PoisonError};

/// An event captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    Started { database: String },
    CacheHit { input: String },
    Computed { input: String },
    BatchStarted { len: usize },
    ItemFailed { input: String, message: String },
    CacheCleared { evicted: usize },
}

/// Observer that records every callback in order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ObservedEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded events matching `predicate`
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&ObservedEvent) -> bool,
    {
        self.events().iter().filter(|event| predicate(event)).count()
    }

    /// Inputs that triggered a fresh computation, in order
    pub fn computed_inputs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ObservedEvent::Computed { input } => Some(input),
                _ => None,
            })
            .collect()
    }
}

impl ProcessObserver for RecordingObserver {
    fn service_started(&self, _service: &str, config: &Config) {
        self.push(ObservedEvent::Started {
            database: config.database_name().to_string(),
        });
    }

    fn cache_hit(&self, _service: &str, input: &str) {
        self.push(ObservedEvent::CacheHit {
            input: input.to_string(),
        });
    }

    fn computed(&self, _service: &str, input: &str) {
        self.push(ObservedEvent::Computed {
            input: input.to_string(),
        });
    }

    fn batch_started(&self, _service: &str, len: usize) {
        self.push(ObservedEvent::BatchStarted { len });
    }

    fn item_failed(&self, _service: &str, input: &str, error: &ProcessError) {
        self.push(ObservedEvent::ItemFailed {
            input: input.to_string(),
            message: error.to_string(),
        });
    }

    fn cache_cleared(&self, _service: &str, evicted: usize) {
        self.push(ObservedEvent::CacheCleared { evicted });
    }
}
