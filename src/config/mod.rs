use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::ConfigLoader;

/// Name reported in record metadata and service statistics
pub const SERVICE_NAME: &str = "awesome_tool";

/// Database label used when none is configured
pub const DEFAULT_DATABASE_NAME: &str = "awesome_db";

/// Service configuration.
///
/// Values are fixed once built; use [`Config::builder`] or
/// [`ConfigLoader`] to produce a configured instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    service_name: String,
    database_name: String,
    debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            debug_mode: false,
        }
    }
}

impl Config {
    /// Build a configuration where every field is optional
    pub fn new(
        service_name: Option<String>,
        database_name: Option<String>,
        debug_mode: Option<bool>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            service_name: service_name.unwrap_or(defaults.service_name),
            database_name: database_name.unwrap_or(defaults.database_name),
            debug_mode: debug_mode.unwrap_or(defaults.debug_mode),
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Database label; no connection is ever made to it
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}

/// Builder for [`Config`]
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    service_name: Option<String>,
    database_name: Option<String>,
    debug_mode: Option<bool>,
}

impl ConfigBuilder {
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = Some(enabled);
        self
    }

    pub fn build(self) -> Config {
        Config::new(self.service_name, self.database_name, self.debug_mode)
    }
}

impl From<Config> for ConfigBuilder {
    fn from(config: Config) -> Self {
        Self {
            service_name: Some(config.service_name),
            database_name: Some(config.database_name),
            debug_mode: Some(config.debug_mode),
        }
    }
}
