//! # docpeek
//!
//! Quick text extraction from PDF and DOCX documents.
//!
//! Two independent workflows live here:
//!
//! - **DOCX export**: read a document's body paragraphs and tables and write
//!   them as pretty JSON plus a banner-delimited text report.
//! - **PDF snippet**: find a PDF (an explicit path, or the newest `.pdf` in an
//!   upload directory), extract the text of every page and report its length
//!   and leading snippet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docpeek::{export_docx, ExportPaths};
//!
//! fn main() -> docpeek::Result<()> {
//!     let content = export_docx(&ExportPaths::default())?;
//!     println!("{} paragraphs", content.paragraphs.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `pdf` (default): PDF text extraction through `lopdf`. Without it,
//!   opening a PDF fails with [`Error::PdfUnsupported`].

pub mod detect;
pub mod error;
pub mod export;
pub mod locate;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, DocumentFormat};
pub use error::{Error, Result};
pub use export::{DocxExporter, ExportPaths};
pub use locate::{latest_pdf, resolve_pdf};
pub use model::{
    Document, ExportedContent, Paragraph, PdfDocument, PdfPage, Table, TableCell, TableRow,
};
pub use parser::{pdf_supported, DocxParser, ErrorMode, ParseOptions, PdfParser};
pub use render::{JsonFormat, PdfReport};

use std::path::Path;

/// Parse a DOCX file and return its paragraphs and tables.
///
/// # Example
///
/// ```no_run
/// use docpeek::parse_docx;
///
/// let doc = parse_docx("HRM.docx").unwrap();
/// println!("Tables: {}", doc.table_count());
/// ```
pub fn parse_docx<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_docx_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a PDF file and return the text of each page.
pub fn parse_pdf<P: AsRef<Path>>(path: P) -> Result<PdfDocument> {
    PdfParser::open(path)?.parse()
}

/// Parse a PDF file with custom options.
pub fn parse_pdf_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<PdfDocument> {
    PdfParser::open_with_options(path, options)?.parse()
}

/// Extract plain text from a PDF file, each page followed by a newline.
///
/// # Example
///
/// ```no_run
/// use docpeek::extract_pdf_text;
///
/// let text = extract_pdf_text("cv.pdf").unwrap();
/// println!("{}", text.chars().count());
/// ```
pub fn extract_pdf_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(parse_pdf(path)?.text())
}

/// Export a DOCX document to JSON and text files.
pub fn export_docx(paths: &ExportPaths) -> Result<ExportedContent> {
    DocxExporter::new(paths.clone()).run()
}
