//! Document parsing module.

mod backend;
mod docx_parser;
mod options;
mod pdf_parser;

#[cfg(feature = "pdf")]
pub use backend::LopdfBackend;
pub use backend::PdfBackend;
pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::{pdf_supported, PdfParser};
