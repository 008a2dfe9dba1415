use super::{namespaced_key, ProcessObserver, ServiceStats, TracingObserver, SYNC_NAMESPACE};
use crate::config::{Config, SERVICE_NAME};
use crate::error::{ProcessError, Result};
use crate::record::{ResultRecord, SuccessRecord};
use crate::validation::check_input;
use std::collections::HashMap;
use std::sync::Arc;

/// Synchronous processing service.
///
/// Owns its memoization map; every successful result is stored under the
/// raw input and handed back unchanged on later calls until
/// [`clear_cache`](Self::clear_cache).
///
/// ```
/// use awesome_tool::{AwesomeService, Config};
///
/// let mut service = AwesomeService::new(Config::default());
/// let record = service.process("hello world").unwrap();
/// assert_eq!(record.data, "HELLO WORLD");
/// ```
pub struct AwesomeService {
    config: Config,
    cache: HashMap<String, Arc<SuccessRecord>>,
    observer: Arc<dyn ProcessObserver>,
}

impl Default for AwesomeService {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AwesomeService {
    pub const NAME: &'static str = "AwesomeService";

    pub fn new(config: Config) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: Config, observer: Arc<dyn ProcessObserver>) -> Self {
        observer.service_started(Self::NAME, &config);
        Self {
            config,
            cache: HashMap::new(),
            observer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `input`, then return its memoized result or compute and store one.
    pub fn process(&mut self, input: &str) -> Result<Arc<SuccessRecord>> {
        check_input(input).map_err(|reason| ProcessError::invalid_input(Self::NAME, reason))?;

        let key = namespaced_key(SYNC_NAMESPACE, input);
        if let Some(record) = self.cache.get(&key) {
            self.observer.cache_hit(Self::NAME, input);
            return Ok(Arc::clone(record));
        }

        self.observer.computed(Self::NAME, input);
        let record = Arc::new(SuccessRecord::compute(
            input,
            self.config.database_name(),
            None,
        ));
        self.cache.insert(key, Arc::clone(&record));

        Ok(record)
    }

    /// Process each item in order. Invalid items become error records in place.
    pub fn batch_process<S: AsRef<str>>(&mut self, items: &[S]) -> Vec<ResultRecord> {
        self.observer.batch_started(Self::NAME, items.len());

        items
            .iter()
            .map(|item| match self.process(item.as_ref()) {
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

    pub fn clear_cache(&mut self) {
        self.observer.cache_cleared(Self::NAME, self.cache.len());
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn get_stats(&self) -> ServiceStats {
        ServiceStats {
            service_name: SERVICE_NAME.to_string(),
            cache_size: self.cache.len(),
            database: self.config.database_name().to_string(),
            debug_mode: self.config.debug_mode(),
        }
    }
}
