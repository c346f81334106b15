//! Document model types.
//!
//! The model is a plain read-only view of what the parsers found: body
//! paragraphs and tables for DOCX, extracted page text for PDF. It is kept
//! independent of the parsing libraries so the export logic never sees
//! `quick_xml` or `lopdf` types.

mod content;
mod document;
mod page;
mod table;

pub use content::ExportedContent;
pub use document::{Document, Paragraph};
pub use page::{PdfDocument, PdfPage};
pub use table::{Table, TableCell, TableRow, VerticalMerge};
