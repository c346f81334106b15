//! Rendering module for converting extracted content to output formats.

mod json;
mod report;
mod text;

pub use json::{to_json, JsonFormat};
pub use report::{char_length, snippet, PdfReport, DEFAULT_SNIPPET_LEN};
pub use text::{to_text, BANNER_WIDTH};
