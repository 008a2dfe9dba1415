//! Human-readable rendering of records and statistics, plus string helpers
//! for deriving cache keys.

use crate::record::ResultRecord;
use crate::service::ServiceStats;
use crate::validation::{is_allowed_char, is_whitespace};

/// Label used in rendered output
pub const RESULT_LABEL: &str = "AwesomeService";

/// Longest sanitized data portion kept by [`make_cache_key`]
pub const CACHE_KEY_DATA_CHARS: usize = 50;

const BORDER_WIDTH: usize = 50;
const MISSING_DATA: &str = "N/A";

/// Render a record as a bordered block (`pretty`) or a single line
pub fn format_record(record: &ResultRecord, pretty: bool) -> String {
    let data = record.data().unwrap_or(MISSING_DATA);

    if !pretty {
        return format!("{RESULT_LABEL} result: {} - {}", record.status(), data);
    }

    let border = "=".repeat(BORDER_WIDTH);
    let mut lines = vec![
        border.clone(),
        format!("{RESULT_LABEL} Result"),
        border.clone(),
        format!("Status: {}", record.status()),
        format!("Data: {data}"),
    ];

    match record {
        ResultRecord::Success(success) => {
            lines.push("Metadata:".to_string());
            for (key, value) in success.metadata.entries() {
                lines.push(format!("  {key}: {value}"));
            }
        }
        ResultRecord::Error { message } => {
            lines.push(format!("Error: {message}"));
        }
    }

    lines.push(border);
    lines.join("\n")
}

/// Render service statistics as indented `key: value` lines
pub fn format_stats(stats: &ServiceStats) -> String {
    [
        format!("  service_name: {}", stats.service_name),
        format!("  cache_size: {}", stats.cache_size),
        format!("  database: {}", stats.database),
        format!("  debug_mode: {}", stats.debug_mode),
    ]
    .join("\n")
}

/// Strip characters outside ASCII letters, digits and whitespace, then
/// collapse whitespace runs to single spaces.
pub fn sanitize(text: &str) -> String {
    let kept: String = text.chars().filter(|ch| is_allowed_char(*ch)).collect();

    kept.split(is_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `prefix_<sanitized data>`, keeping at most [`CACHE_KEY_DATA_CHARS`] of the data
pub fn make_cache_key(prefix: &str, data: &str) -> String {
    let sanitized: String = sanitize(data).chars().take(CACHE_KEY_DATA_CHARS).collect();
    format!("{prefix}_{sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Mode, SuccessRecord};
    use std::sync::Arc;

    fn success(input: &str, mode: Option<Mode>) -> ResultRecord {
        ResultRecord::from(Arc::new(SuccessRecord::compute(input, "awesome_db", mode)))
    }

    #[test]
    fn test_format_compact() {
        let output = format_record(&success("test data", None), false);
        assert_eq!(output, "AwesomeService result: success - TEST DATA");
    }

    #[test]
    fn test_format_compact_error_uses_placeholder() {
        let record = ResultRecord::Error {
            message: "boom".to_string(),
        };
        assert_eq!(
            format_record(&record, false),
            "AwesomeService result: error - N/A"
        );
    }

    #[test]
    fn test_format_pretty_includes_metadata() {
        let output = format_record(&success("test data", Some(Mode::Async)), true);

        assert!(output.contains("AwesomeService Result"));
        assert!(output.contains("Status: success"));
        assert!(output.contains("Data: TEST DATA"));
        assert!(output.contains("  service: awesome_tool"));
        assert!(output.contains("  mode: async"));
        assert!(output.starts_with(&"=".repeat(50)));
        assert!(output.ends_with(&"=".repeat(50)));
    }

    #[test]
    fn test_format_pretty_error() {
        let record = ResultRecord::Error {
            message: "Invalid input data provided to AwesomeService".to_string(),
        };
        let output = format_record(&record, true);

        assert!(output.contains("Status: error"));
        assert!(output.contains("Data: N/A"));
        assert!(output.contains("Error: Invalid input data provided to AwesomeService"));
        assert!(!output.contains("Metadata:"));
    }

    #[test]
    fn test_sanitize_removes_special_chars() {
        assert_eq!(sanitize("test@#$data"), "testdata");
    }

    #[test]
    fn test_sanitize_normalizes_whitespace() {
        assert_eq!(sanitize("a   b   c"), "a b c");
        assert_eq!(sanitize("test   multiple   spaces"), "test multiple spaces");
        assert_eq!(sanitize("  \tpadded\n "), "padded");
    }

    #[test]
    fn test_sanitize_splits_on_separator_and_unicode_whitespace() {
        assert_eq!(sanitize("a\u{1c}\u{1d}b"), "a b");
        assert_eq!(sanitize("a\u{1f}\u{a0}b"), "a b");
        assert_eq!(sanitize("wide\u{3000}space"), "wide space");
    }

    #[test]
    fn test_sanitize_drops_zero_width_space() {
        assert_eq!(sanitize("zero\u{200b}width"), "zerowidth");
    }

    #[test]
    fn test_sanitize_preserves_alphanumeric() {
        assert_eq!(sanitize("test123 data456"), "test123 data456");
    }

    #[test]
    fn test_make_cache_key_basic() {
        let key = make_cache_key("awesome_tool", "test data");
        assert_eq!(key, "awesome_tool_test data");
    }

    #[test]
    fn test_make_cache_key_truncates_long_data() {
        let key = make_cache_key("awesome_tool", &"a".repeat(100));
        assert!(key.len() <= 50 + "awesome_tool_".len());
        assert_eq!(key, format!("awesome_tool_{}", "a".repeat(50)));
    }

    #[test]
    fn test_format_stats_lines() {
        let stats = ServiceStats {
            service_name: "awesome_tool".to_string(),
            cache_size: 2,
            database: "awesome_db".to_string(),
            debug_mode: true,
        };
        assert_eq!(
            format_stats(&stats),
            "  service_name: awesome_tool\n  cache_size: 2\n  database: awesome_db\n  debug_mode: true"
        );
    }
}
