//! Document-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A parsed word-processing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Number of body paragraphs, blank ones included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of top-level tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Concatenated text of the paragraph's runs
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if the paragraph holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
