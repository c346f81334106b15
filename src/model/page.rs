//! PDF page types.

use serde::{Deserialize, Serialize};

/// Extracted text of a PDF, page by page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfDocument {
    /// PDF version from the file header (e.g., "1.7")
    pub version: String,

    /// Pages in document order
    pub pages: Vec<PdfPage>,
}

impl PdfDocument {
    /// Create an empty document for the given PDF version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            pages: Vec::new(),
        }
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PdfPage) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PdfPage> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Concatenated text: every page followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(&page.text);
            text.push('\n');
        }
        text
    }
}

/// A single PDF page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, empty when nothing could be extracted
    pub text: String,
}

impl PdfPage {
    /// Create a page with its extracted text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}
