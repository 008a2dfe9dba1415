use super::{namespaced_key, ProcessObserver, ServiceStats, TracingObserver, ASYNC_NAMESPACE};
use crate::config::{Config, SERVICE_NAME};
use crate::error::{ProcessError, Result};
use crate::record::{Mode, ResultRecord, SuccessRecord};
use crate::validation::check_input;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::OnceCell;

/// Nominal delay standing in for real asynchronous work on a cache miss
pub const DEFAULT_PROCESS_DELAY: Duration = Duration::from_millis(100);

/// A cache entry reserved before the first suspension point. Concurrent
/// requests for the same input await the same cell.
type Slot = Arc<OnceCell<Arc<SuccessRecord>>>;

/// Asynchronous processing service.
///
/// All methods take `&self`, so an instance can be shared behind an `Arc`.
/// Cache hits return without suspending; misses sleep for the configured
/// delay before computing.
pub struct AwesomeServiceAsync {
    config: Config,
    delay: Duration,
    cache: Mutex<HashMap<String, Slot>>,
    observer: Arc<dyn ProcessObserver>,
}

impl Default for AwesomeServiceAsync {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AwesomeServiceAsync {
    pub const NAME: &'static str = "AwesomeServiceAsync";

    pub fn new(config: Config) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: Config, observer: Arc<dyn ProcessObserver>) -> Self {
        observer.service_started(Self::NAME, &config);
        Self {
            config,
            delay: DEFAULT_PROCESS_DELAY,
            cache: Mutex::new(HashMap::new()),
            observer,
        }
    }

    /// Replace the simulated processing delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate `input`, then return its memoized result or compute one.
    pub async fn process(&self, input: &str) -> Result<Arc<SuccessRecord>> {
        check_input(input).map_err(|reason| ProcessError::invalid_input(Self::NAME, reason))?;

        // Reserve the slot while holding the lock; nothing below may yield
        // until the guard is gone.
        let slot = {
            let mut cache = self.lock_cache();
            Arc::clone(cache.entry(namespaced_key(ASYNC_NAMESPACE, input)).or_default())
        };

        if let Some(record) = slot.get() {
            self.observer.cache_hit(Self::NAME, input);
            return Ok(Arc::clone(record));
        }

        let record = slot
            .get_or_init(|| async {
                tokio::time::sleep(self.delay).await;
                self.observer.computed(Self::NAME, input);
                Arc::new(SuccessRecord::compute(
                    input,
                    self.config.database_name(),
                    Some(Mode::Async),
                ))
            })
            .await;

        Ok(Arc::clone(record))
    }

    /// Process every item concurrently and collect outcomes in input order.
    /// A failing item never affects its siblings.
    pub async fn batch_process<S: AsRef<str>>(&self, items: &[S]) -> Vec<ResultRecord> {
        self.observer.batch_started(Self::NAME, items.len());

        let outcomes = join_all(items.iter().map(|item| self.process(item.as_ref()))).await;

        items
            .iter()
            .zip(outcomes)
            .map(|(item, outcome)| match outcome {
                Ok(record) => ResultRecord::Success(record),
                Err(err) => {
                    self.observer.item_failed(Self::NAME, item.as_ref(), &err);
                    ResultRecord::Error {
                        message: err.to_string(),
                    }
                }
            })
            .collect()
    }

    /// Empty the cache. Computations already in flight still complete for
    /// their callers but are not stored.
    pub fn clear_cache(&self) {
        let mut cache = self.lock_cache();
        let evicted = cache.values().filter(|slot| slot.initialized()).count();
        self.observer.cache_cleared(Self::NAME, evicted);
        cache.clear();
    }

    /// Number of completed cache entries
    pub fn cache_size(&self) -> usize {
        self.lock_cache()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn get_stats(&self) -> ServiceStats {
        ServiceStats {
            service_name: SERVICE_NAME.to_string(),
            cache_size: self.cache_size(),
            database: self.config.database_name().to_string(),
            debug_mode: self.config.debug_mode(),
        }
    }
}
