//! Exported paragraph and table content.

use super::Document;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Paragraphs and tables of a document, reduced to plain strings.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedContent {
    /// Non-blank body paragraphs, untrimmed
    pub paragraphs: Vec<String>,

    /// Tables as rows of trimmed cell texts
    pub tables: Vec<Vec<Vec<String>>>,
}

impl ExportedContent {
    /// Reduce a parsed document to exportable content.
    ///
    /// Whitespace-only paragraphs are dropped; every cell is trimmed on its
    /// own.
    pub fn from_document(doc: &Document) -> Self {
        let paragraphs = doc
            .paragraphs
            .iter()
            .filter(|p| !p.is_blank())
            .map(|p| p.text.clone())
            .collect();

        let tables = doc
            .tables
            .iter()
            .map(|table| {
                table
                    .grid_texts()
                    .into_iter()
                    .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect())
                    .collect()
            })
            .collect();

        Self { paragraphs, tables }
    }

    /// Parse content from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Other(format!("Invalid content JSON: {}", e)))
    }

    /// Read content back from a JSON file written by the exporter.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check if there is nothing to export.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

impl From<&Document> for ExportedContent {
    fn from(doc: &Document) -> Self {
        Self::from_document(doc)
    }
}
