//! Document format detection from magic bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detected document format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF with its header version (e.g., "1.7")
    Pdf {
        /// PDF version
        version: String,
    },
    /// Office Open XML word-processing package (ZIP container)
    Docx,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf { version } => write!(f, "PDF {}", version),
            DocumentFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// ZIP local file header, the first bytes of every DOCX.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect the document format from a file path.
///
/// Only the first 16 bytes are read. Files shorter than that are still
/// classified from whatever header bytes they have.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(16);
    file.take(16).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the document format from the leading bytes of a file.
///
/// # Returns
/// * `Ok(DocumentFormat)` for a PDF header or a ZIP container
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocumentFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Docx);
    }

    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(DocumentFormat::Pdf { version })
}

/// Check a "d.d" version string.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(DocumentFormat::Pdf { .. }))
}

/// Check if bytes start like a DOCX (ZIP) package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(DocumentFormat::Docx))
}
