//! Error types for docpeek library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docpeek operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF or DOCX.
    #[error("Unknown file format: not a PDF or DOCX document")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The DOCX package is missing a part or has an unexpected layout.
    #[error("DOCX parsing error: {0}")]
    DocxParse(String),

    /// Malformed XML inside a DOCX package.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The DOCX container (ZIP archive) could not be read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Neither the preferred file nor any candidate in the fallback directory exists.
    #[error("No PDF file found in {}", .0.display())]
    NoPdfFound(PathBuf),

    /// The crate was built without PDF support.
    #[error("PDF support is not available in this build")]
    PdfUnsupported,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
