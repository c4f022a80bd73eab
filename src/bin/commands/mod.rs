pub mod columns;
pub mod config;
pub mod info;
pub mod tables;

use viewdb::OutputFormat;

/// Print a single serializable value in a JSON variant of `format`
///
/// Returns `false` when `format` is not JSON so the caller can fall back to
/// its own text rendering.
pub(crate) fn print_json<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Json | OutputFormat::JsonLine => {
            println!("{}", serde_json::to_string(value)?);
            Ok(true)
        }
        OutputFormat::JsonPretty => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
        _ => Ok(false),
    }
}
