//! Layered configuration loading: defaults, then an optional TOML file,
//! then `AWESOME_TOOL_*` environment overrides.

use super::{Config, ConfigBuilder};
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

pub const ENV_SERVICE_NAME: &str = "AWESOME_TOOL_SERVICE_NAME";
pub const ENV_DATABASE_NAME: &str = "AWESOME_TOOL_DATABASE_NAME";
pub const ENV_DEBUG: &str = "AWESOME_TOOL_DEBUG";

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct ConfigLoader {
    env: EnvLookup,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading overrides from the process environment
    pub fn new() -> Self {
        Self {
            env: Box::new(|var| std::env::var(var).ok()),
        }
    }

    /// Loader with a custom environment lookup, for tests
    pub fn with_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            env: Box::new(lookup),
        }
    }

    /// Load configuration, reading `path` first when given
    pub async fn load(&self, path: Option<&Path>) -> Result<Config, ConfigError> {
        let base = match path {
            Some(path) => self.load_file(path).await?,
            None => Config::default(),
        };
        self.merge_env_vars(base)
    }

    async fn load_file(&self, path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    fn merge_env_vars(&self, config: Config) -> Result<Config, ConfigError> {
        let mut builder = ConfigBuilder::from(config);

        if let Some(name) = (self.env)(ENV_SERVICE_NAME) {
            builder = builder.service_name(name);
        }

        if let Some(name) = (self.env)(ENV_DATABASE_NAME) {
            builder = builder.database_name(name);
        }

        if let Some(value) = (self.env)(ENV_DEBUG) {
            let enabled = parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_DEBUG.to_string(),
                value: value.clone(),
            })?;
            builder = builder.debug_mode(enabled);
        }

        Ok(builder.build())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
