//! Processing outcomes.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Crate version stamped into every success record
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which service variant produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Async,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Async => write!(f, "async"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub service: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    pub database: String,
}

impl Metadata {
    /// Key/value pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("service", self.service.clone()),
            ("version", self.version.clone()),
        ];
        if let Some(mode) = self.mode {
            entries.push(("mode", mode.to_string()));
        }
        entries.push(("database", self.database.clone()));
        entries
    }
}

/// A memoized successful result.
///
/// `data` is always the uppercase form of the validated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRecord {
    pub data: String,
    pub metadata: Metadata,
}

impl SuccessRecord {
    pub(crate) fn compute(input: &str, database: &str, mode: Option<Mode>) -> Self {
        Self {
            data: input.to_uppercase(),
            metadata: Metadata {
                service: crate::config::SERVICE_NAME.to_string(),
                version: SERVICE_VERSION.to_string(),
                mode,
                database: database.to_string(),
            },
        }
    }
}

/// Outcome of processing one item.
///
/// Serializes as a `status`-tagged map. Error records carry `"data": null`
/// next to the `error` message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultRecord {
    Success(Arc<SuccessRecord>),
    Error {
        #[serde(rename = "error")]
        message: String,
    },
}

impl ResultRecord {
    pub fn status(&self) -> &'static str {
        match self {
            ResultRecord::Success(_) => "success",
            ResultRecord::Error { .. } => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultRecord::Success(_))
    }

    /// Processed data, absent for error records
    pub fn data(&self) -> Option<&str> {
        match self {
            ResultRecord::Success(record) => Some(&record.data),
            ResultRecord::Error { .. } => None,
        }
    }

    pub fn as_success(&self) -> Option<&Arc<SuccessRecord>> {
        match self {
            ResultRecord::Success(record) => Some(record),
            ResultRecord::Error { .. } => None,
        }
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("status", self.status())?;
        match self {
            ResultRecord::Success(record) => {
                map.serialize_entry("data", &record.data)?;
                map.serialize_entry("metadata", &record.metadata)?;
            }
            ResultRecord::Error { message } => {
                map.serialize_entry("data", &Option::<String>::None)?;
                map.serialize_entry("error", message)?;
            }
        }
        map.end()
    }
}

impl From<Arc<SuccessRecord>> for ResultRecord {
    fn from(record: Arc<SuccessRecord>) -> Self {
        ResultRecord::Success(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compute_uppercases_input() {
        let record = SuccessRecord::compute("hello world", "awesome_db", None);
        assert_eq!(record.data, "HELLO WORLD");
        assert_eq!(record.metadata.service, "awesome_tool");
        assert_eq!(record.metadata.database, "awesome_db");
        assert_eq!(record.metadata.mode, None);
    }

    #[test]
    fn test_metadata_entries_order() {
        let record = SuccessRecord::compute("x", "db", Some(Mode::Async));
        let keys: Vec<_> = record.metadata.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["service", "version", "mode", "database"]);
    }

    #[test]
    fn test_success_serializes_with_status_tag() {
        let record = ResultRecord::from(Arc::new(SuccessRecord::compute("ok", "db", None)));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], "OK");
        assert_eq!(value["metadata"]["database"], "db");
        assert!(value["metadata"].get("mode").is_none());
    }

    #[test]
    fn test_error_serializes_with_error_field() {
        let record = ResultRecord::Error {
            message: "Invalid input data provided to AwesomeService".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "error",
                "data": null,
                "error": "Invalid input data provided to AwesomeService"
            })
        );
    }

    #[test]
    fn test_records_read_back_from_json() {
        let error = ResultRecord::Error {
            message: "bad".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(serde_json::from_str::<ResultRecord>(&json).unwrap(), error);

        let success = ResultRecord::from(Arc::new(SuccessRecord::compute("ok", "db", None)));
        let json = serde_json::to_string(&success).unwrap();
        assert_eq!(serde_json::from_str::<ResultRecord>(&json).unwrap(), success);
    }

    #[test]
    fn test_accessors() {
        let error = ResultRecord::Error {
            message: "bad".to_string(),
        };
        assert_eq!(error.status(), "error");
        assert_eq!(error.data(), None);
        assert!(!error.is_success());
        assert!(error.as_success().is_none());
    }
}
