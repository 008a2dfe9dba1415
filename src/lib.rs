//! # awesome_tool
//!
//! Validate, memoize and transform text items, one at a time or in batches.
//!
//! ## Usage
//!
//! ```bash
//! awesome-tool [demo]
//! awesome-tool process [--async] [--pretty] [--json] <ITEMS>...
//! awesome-tool validate <INPUT>
//! ```
//!
//! ## Modules
//!
//! - `config` - Service configuration and layered loading (TOML file, environment)
//! - `error` - Error types for processing and configuration
//! - `format` - Rendering of records and stats, string sanitizing, cache keys
//! - `record` - Success/error records produced by the services
//! - `service` - Synchronous and asynchronous processing services
//! - `validation` - Input validation
//! - `testing` - Test doubles for the service observer seam
pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod service;
pub mod validation;

pub mod testing;

pub use config::Config;
pub use error::{ConfigError, ProcessError};
pub use format::{format_record, make_cache_key, sanitize};
pub use record::{ResultRecord, SuccessRecord};
pub use service::{AwesomeService, AwesomeServiceAsync, ServiceStats};
pub use validation::validate_input;
