//! DOCX export pipeline: parse once, write JSON and text.

use crate::error::Result;
use crate::model::ExportedContent;
use crate::parser::DocxParser;
use crate::render::{to_json, to_text, JsonFormat};
use std::fs;
use std::path::PathBuf;

/// Default input document.
pub const DEFAULT_INPUT: &str = "HRM.docx";

/// Default JSON output file.
pub const DEFAULT_JSON_OUTPUT: &str = "hrm_content.json";

/// Default text output file.
pub const DEFAULT_TEXT_OUTPUT: &str = "hrm_content.txt";

/// Input and output locations of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// DOCX document to read
    pub input: PathBuf,

    /// JSON file to write
    pub json: PathBuf,

    /// Text file to write
    pub text: PathBuf,
}

impl ExportPaths {
    /// Create paths for the given input with the default output names.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Set the JSON output path.
    pub fn with_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.json = path.into();
        self
    }

    /// Set the text output path.
    pub fn with_text(mut self, path: impl Into<PathBuf>) -> Self {
        self.text = path.into();
        self
    }
}

impl Default for ExportPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            json: PathBuf::from(DEFAULT_JSON_OUTPUT),
            text: PathBuf::from(DEFAULT_TEXT_OUTPUT),
        }
    }
}

/// Exports a DOCX document's paragraphs and tables.
///
/// Both output files are overwritten. A failure while writing may leave
/// the first file written and the second missing or stale.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter {
    paths: ExportPaths,
    json_format: JsonFormat,
}

impl DocxExporter {
    /// Create an exporter for the given paths.
    pub fn new(paths: ExportPaths) -> Self {
        Self {
            paths,
            json_format: JsonFormat::default(),
        }
    }

    /// Set the JSON output format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// The paths this exporter reads and writes.
    pub fn paths(&self) -> &ExportPaths {
        &self.paths
    }

    /// Parse the input and write both output files.
    pub fn run(&self) -> Result<ExportedContent> {
        let document = DocxParser::open(&self.paths.input)?.parse()?;
        let content = ExportedContent::from_document(&document);

        fs::write(&self.paths.json, to_json(&content, self.json_format)?)?;
        log::debug!("Wrote {}", self.paths.json.display());

        fs::write(&self.paths.text, to_text(&content))?;
        log::debug!("Wrote {}", self.paths.text.display());

        Ok(content)
    }
}
