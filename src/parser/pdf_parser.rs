//! PDF text extraction.

use std::io::Read;
use std::path::Path;

use crate::detect::{detect_format_from_path, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::{PdfDocument, PdfPage};

use super::backend::PdfBackend;
use super::options::{ErrorMode, ParseOptions};

/// PDF document parser.
pub struct PdfParser {
    backend: Box<dyn PdfBackend>,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        if !matches!(detect_format_from_path(path)?, DocumentFormat::Pdf { .. }) {
            return Err(Error::UnknownFormat);
        }

        let backend = load_file(path)?;
        Ok(Self::with_backend(backend, options))
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        if !crate::detect::is_pdf_bytes(data) {
            return Err(Error::UnknownFormat);
        }

        let backend = load_bytes(data)?;
        Ok(Self::with_backend(backend, options))
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Use an already loaded backend.
    pub fn with_backend(backend: impl PdfBackend + 'static, options: ParseOptions) -> Self {
        Self {
            backend: Box::new(backend),
            options,
        }
    }

    /// Extract the text of every page.
    pub fn parse(&self) -> Result<PdfDocument> {
        let mut document = PdfDocument::new(self.backend.version());
        let page_numbers = self.backend.page_numbers();
        log::debug!("Extracting text from {} pages", page_numbers.len());

        for page_num in page_numbers {
            let text = match self.backend.page_text(page_num) {
                Ok(text) => text,
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
            };
            document.add_page(PdfPage::new(page_num, text));
        }

        Ok(document)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.backend.page_numbers().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.backend.version()
    }
}

/// Whether this build can read PDF files.
pub const fn pdf_supported() -> bool {
    cfg!(feature = "pdf")
}

#[cfg(feature = "pdf")]
fn load_file(path: &Path) -> Result<super::LopdfBackend> {
    super::LopdfBackend::load_file(path)
}

#[cfg(feature = "pdf")]
fn load_bytes(data: &[u8]) -> Result<super::LopdfBackend> {
    super::LopdfBackend::load_bytes(data)
}

#[cfg(not(feature = "pdf"))]
fn load_file(_path: &Path) -> Result<NoBackend> {
    Err(Error::PdfUnsupported)
}

#[cfg(not(feature = "pdf"))]
fn load_bytes(_data: &[u8]) -> Result<NoBackend> {
    Err(Error::PdfUnsupported)
}

/// Stand-in type for builds without a PDF library; never constructed.
#[cfg(not(feature = "pdf"))]
enum NoBackend {}

#[cfg(not(feature = "pdf"))]
impl PdfBackend for NoBackend {
    fn version(&self) -> String {
        match *self {}
    }

    fn page_numbers(&self) -> Vec<u32> {
        match *self {}
    }

    fn page_text(&self, _page_num: u32) -> Result<String> {
        match *self {}
    }
}
