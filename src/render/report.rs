//! Console report for extracted PDF text.

use std::fmt;

/// Number of characters shown in a snippet unless told otherwise.
pub const DEFAULT_SNIPPET_LEN: usize = 500;

/// Length of `text` in characters (Unicode scalar values).
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// The first `max_chars` characters of `text`.
pub fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Length and leading snippet of extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfReport {
    /// Total length in characters
    pub length: usize,

    /// Leading part of the text
    pub snippet: String,
}

impl PdfReport {
    /// Build a report from the full extracted text.
    pub fn new(text: &str, snippet_len: usize) -> Self {
        Self {
            length: char_length(text),
            snippet: snippet(text, snippet_len).to_string(),
        }
    }
}

impl fmt::Display for PdfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extracted Length: {}", self.length)?;
        write!(f, "Content Snippet: {}", self.snippet)
    }
}
