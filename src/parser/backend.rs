//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the few PDF operations the parser
//! needs, isolating the concrete PDF library (lopdf) from the rest of the
//! crate. Builds without the `pdf` feature have no backend at all.

use crate::error::Result;

/// Abstract interface for PDF document access.
pub trait PdfBackend {
    /// PDF version string (e.g., "1.7").
    fn version(&self) -> String;

    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extract the text of a single page.
    fn page_text(&self, page_num: u32) -> Result<String>;
}

#[cfg(feature = "pdf")]
pub use self::lopdf_backend::LopdfBackend;

#[cfg(feature = "pdf")]
mod lopdf_backend {
    use super::PdfBackend;
    use crate::error::{Error, Result};
    use lopdf::Document as LopdfDocument;
    use std::path::Path;

    /// Concrete [`PdfBackend`] backed by `lopdf::Document`.
    pub struct LopdfBackend {
        doc: LopdfDocument,
    }

    impl LopdfBackend {
        /// Load from a file path.
        pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let doc = LopdfDocument::load(path)?;
            Ok(Self { doc })
        }

        /// Load from an in-memory byte slice.
        pub fn load_bytes(data: &[u8]) -> Result<Self> {
            let doc = LopdfDocument::load_mem(data)?;
            Ok(Self { doc })
        }
    }

    impl PdfBackend for LopdfBackend {
        fn version(&self) -> String {
            self.doc.version.to_string()
        }

        fn page_numbers(&self) -> Vec<u32> {
            self.doc.get_pages().into_keys().collect()
        }

        fn page_text(&self, page_num: u32) -> Result<String> {
            self.doc
                .extract_text(&[page_num])
                .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
        }
    }
}
