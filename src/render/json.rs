//! JSON rendering for exported content.

use crate::error::{Error, Result};
use crate::model::ExportedContent;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert exported content to JSON.
///
/// Keys come out as `paragraphs` then `tables`. Non-ASCII text is written
/// as-is, and there is no trailing newline.
pub fn to_json(content: &ExportedContent, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(content),
        JsonFormat::Compact => serde_json::to_string(content),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
