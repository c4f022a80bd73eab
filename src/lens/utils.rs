//! Shared output helpers for lens results
//!
//! Formatting lives here so every command renders records the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default maximum length for free-text values in tables
pub const DEFAULT_NAME_MAX_LEN: usize = 20;

/// Output format shared by all commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty table with rounded borders (default)
    #[default]
    Table,
    /// Markdown table
    Markdown,
    /// Compact JSON array
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// One JSON object per line
    JsonLine,
    /// Bare values, one record per line, fields separated by `|`
    Plain,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPretty | Self::JsonLine)
    }

    pub fn all_names() -> &'static [&'static str] {
        &[
            "table",
            "markdown",
            "json",
            "json-pretty",
            "json-line",
            "plain",
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
            Self::JsonLine => "json-line",
            Self::Plain => "plain",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "pretty" => Ok(Self::Table),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "json-pretty" | "jsonpretty" => Ok(Self::JsonPretty),
            "json-line" | "jsonline" | "jsonl" | "ndjson" => Ok(Self::JsonLine),
            "plain" | "text" | "psv" => Ok(Self::Plain),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// Render records as JSON according to a JSON variant of `format`
///
/// Non-JSON formats fall back to compact JSON.
pub fn format_json<T: Serialize>(
    records: &[T],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::JsonPretty => serde_json::to_string_pretty(records),
        OutputFormat::JsonLine => {
            let mut lines = Vec::with_capacity(records.len());
            for r in records {
                lines.push(serde_json::to_string(r)?);
            }
            Ok(lines.join("\n"))
        }
        _ => serde_json::to_string(records),
    }
}

/// Render records in the requested format
///
/// `plain` is called once per record to produce the `Plain` line.
#[cfg(feature = "display")]
pub fn format_records<T, F>(
    records: &[T],
    format: OutputFormat,
    plain: F,
) -> Result<String, serde_json::Error>
where
    T: Serialize + tabled::Tabled,
    F: Fn(&T) -> String,
{
    use tabled::settings::Style;
    use tabled::Table;

    let out = match format {
        OutputFormat::Table => Table::new(records).with(Style::rounded()).to_string(),
        OutputFormat::Markdown => Table::new(records).with(Style::markdown()).to_string(),
        OutputFormat::Json | OutputFormat::JsonPretty | OutputFormat::JsonLine => {
            format_json(records, format)?
        }
        OutputFormat::Plain => records.iter().map(plain).collect::<Vec<_>>().join("\n"),
    };
    Ok(out)
}

/// Truncate a string to `max_len` characters, ending in "..." when cut
///
/// ```
/// use viewdb::lens::utils::truncate_name;
///
/// assert_eq!(truncate_name("Short", 20), "Short");
/// assert_eq!(truncate_name("This is a very long name", 20), "This is a very lo...");
/// ```
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 20), "Short");
        assert_eq!(truncate_name("", 20), "");
        assert_eq!(
            truncate_name("12345678901234567890", 20),
            "12345678901234567890"
        );
        assert_eq!(truncate_name("Hello", 3), "...");
    }

    #[test]
    fn test_truncate_name_counts_chars() {
        assert_eq!(truncate_name("信件数据库表名称很长很长", 10), "信件数据库表名...");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("json-pretty").unwrap(),
            OutputFormat::JsonPretty
        );
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::JsonLine
        );
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Plain);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for name in OutputFormat::all_names() {
            let format = OutputFormat::from_str(name).unwrap();
            assert_eq!(format.to_string(), *name);
        }
    }

    #[test]
    fn test_format_json_pretty() {
        let out = format_json(&[1, 2], OutputFormat::JsonPretty).unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]");
        let out = format_json(&[1, 2], OutputFormat::JsonLine).unwrap();
        assert_eq!(out, "1\n2");
    }

    #[cfg(feature = "display")]
    mod rendering {
        use super::super::*;
        use crate::lens::catalog::TableEntry;

        fn entries() -> Vec<TableEntry> {
            vec![
                TableEntry::from("letters".to_string()),
                TableEntry::from("recipients".to_string()),
            ]
        }

        #[test]
        fn test_format_plain() {
            let out = format_records(&entries(), OutputFormat::Plain, |e| e.name.clone()).unwrap();
            assert_eq!(out, "letters\nrecipients");
        }

        #[test]
        fn test_format_json_variants() {
            let out = format_records(&entries(), OutputFormat::Json, |e| e.name.clone()).unwrap();
            assert_eq!(out, r#"[{"name":"letters"},{"name":"recipients"}]"#);

            let out =
                format_records(&entries(), OutputFormat::JsonLine, |e| e.name.clone()).unwrap();
            assert_eq!(out, "{\"name\":\"letters\"}\n{\"name\":\"recipients\"}");
        }

        #[test]
        fn test_format_markdown_has_header() {
            let out =
                format_records(&entries(), OutputFormat::Markdown, |e| e.name.clone()).unwrap();
            assert!(out.lines().next().unwrap_or_default().contains("name"));
            assert!(out.contains("recipients"));
        }

        #[test]
        fn test_format_empty_json() {
            let empty: Vec<TableEntry> = Vec::new();
            let out = format_records(&empty, OutputFormat::Json, |e| e.name.clone()).unwrap();
            assert_eq!(out, "[]");
        }
    }
}
