//! DOCX document parser.
//!
//! DOCX files are ZIP archives holding WordprocessingML parts; the body
//! lives in `word/document.xml`. Only what a reader sees as body text is
//! collected: paragraphs directly under `w:body`, and tables whose cells hold
//! paragraphs of their own. Text inside drawings, text boxes and equations
//! is ignored, and so are runs wrapped in anything other than the paragraph
//! itself or a hyperlink.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::detect::{detect_format_from_path, is_docx_bytes, DocumentFormat};
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Table, TableCell, TableRow, VerticalMerge};

/// Archive path of the main document part.
const DOCUMENT_PART: &str = "word/document.xml";

/// Elements whose content never belongs to paragraph text.
const SKIPPED: &[&[u8]] = &[
    b"drawing",
    b"pict",
    b"object",
    b"AlternateContent",
    b"txbxContent",
    b"oMath",
    b"oMathPara",
];

/// DOCX document parser.
pub struct DocxParser {
    document_xml: String,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if detect_format_from_path(path)? != DocumentFormat::Docx {
            return Err(Error::UnknownFormat);
        }

        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !is_docx_bytes(data) {
            return Err(Error::UnknownFormat);
        }

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut document_xml = String::new();
        match archive.by_name(DOCUMENT_PART) {
            Ok(mut part) => {
                part.read_to_string(&mut document_xml)?;
            }
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::DocxParse(format!("missing {}", DOCUMENT_PART)));
            }
            Err(e) => return Err(e.into()),
        }

        log::debug!(
            "Read {} ({} bytes) from {} archive entries",
            DOCUMENT_PART,
            document_xml.len(),
            archive.len()
        );

        Ok(Self { document_xml })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse the document body into paragraphs and tables.
    pub fn parse(&self) -> Result<Document> {
        let mut reader = Reader::from_str(&self.document_xml);
        let mut body = BodyReader::default();

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => body.start(e),
                Event::Empty(ref e) => {
                    body.start(e);
                    body.end(e.local_name().as_ref());
                }
                Event::End(ref e) => body.end(e.local_name().as_ref()),
                Event::Text(ref t) => body.text(&t.unescape()?),
                Event::Eof => break,
                _ => {}
            }
        }

        let document = body.document;
        log::debug!(
            "Parsed {} paragraphs and {} tables",
            document.paragraph_count(),
            document.table_count()
        );
        Ok(document)
    }
}

/// A table under construction.
struct TableBuilder {
    table: Table,
    top_level: bool,
    row: Option<TableRow>,
    cell: Option<TableCell>,
}

/// Event-driven collector for `w:body` content.
#[derive(Default)]
struct BodyReader {
    document: Document,
    /// Local names of the currently open elements
    stack: Vec<Vec<u8>>,
    tables: Vec<TableBuilder>,
    paragraph: Option<String>,
    skip_depth: usize,
}

impl BodyReader {
    fn start(&mut self, e: &BytesStart) {
        let name = e.local_name().as_ref().to_vec();
        let parent = self.stack.last().cloned().unwrap_or_default();

        if self.skip_depth > 0 || SKIPPED.contains(&name.as_slice()) {
            if SKIPPED.contains(&name.as_slice()) {
                self.skip_depth += 1;
            }
            self.stack.push(name);
            return;
        }

        match (name.as_slice(), parent.as_slice()) {
            (b"p", b"body" | b"tc") => self.paragraph = Some(String::new()),
            (b"tbl", _) => self.tables.push(TableBuilder {
                table: Table::new(),
                top_level: parent == b"body",
                row: None,
                cell: None,
            }),
            (b"tr", b"tbl") => {
                if let Some(builder) = self.tables.last_mut() {
                    builder.row = Some(TableRow::default());
                }
            }
            (b"tc", b"tr") => {
                if let Some(builder) = self.tables.last_mut() {
                    builder.cell = Some(TableCell::empty());
                }
            }
            (b"gridSpan", b"tcPr") => {
                if let Some(cell) = self.current_cell() {
                    cell.grid_span = attribute(e, b"val")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(1);
                }
            }
            (b"vMerge", b"tcPr") => {
                let merge = match attribute(e, b"val").as_deref() {
                    Some("restart") => VerticalMerge::Restart,
                    _ => VerticalMerge::Continue,
                };
                if let Some(cell) = self.current_cell() {
                    cell.vertical_merge = Some(merge);
                }
            }
            (b"tab" | b"ptab", b"r") => self.push_run_text(self.stack.len() - 1, "\t"),
            (b"br", b"r") => {
                // page and column breaks carry no text
                if matches!(attribute(e, b"type").as_deref(), None | Some("textWrapping")) {
                    self.push_run_text(self.stack.len() - 1, "\n");
                }
            }
            (b"cr", b"r") => self.push_run_text(self.stack.len() - 1, "\n"),
            (b"noBreakHyphen", b"r") => self.push_run_text(self.stack.len() - 1, "-"),
            _ => {}
        }

        self.stack.push(name);
    }

    fn end(&mut self, name: &[u8]) {
        self.stack.pop();

        if self.skip_depth > 0 {
            if SKIPPED.contains(&name) {
                self.skip_depth -= 1;
            }
            return;
        }

        let parent = self.stack.last().cloned().unwrap_or_default();
        match (name, parent.as_slice()) {
            (b"p", b"body") => {
                if let Some(text) = self.paragraph.take() {
                    self.document.add_paragraph(Paragraph::with_text(text));
                }
            }
            (b"p", b"tc") => {
                if let Some(text) = self.paragraph.take() {
                    if let Some(cell) = self.current_cell() {
                        cell.paragraphs.push(text);
                    }
                }
            }
            (b"tc", b"tr") => {
                if let Some(builder) = self.tables.last_mut() {
                    if let (Some(cell), Some(row)) = (builder.cell.take(), builder.row.as_mut()) {
                        row.cells.push(cell);
                    }
                }
            }
            (b"tr", b"tbl") => {
                if let Some(builder) = self.tables.last_mut() {
                    if let Some(row) = builder.row.take() {
                        builder.table.add_row(row);
                    }
                }
            }
            (b"tbl", _) => {
                if let Some(builder) = self.tables.pop() {
                    if builder.top_level {
                        self.document.add_table(builder.table);
                    }
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.skip_depth > 0 {
            return;
        }
        // only w:t directly inside a run is visible text
        if let [.., r, t] = self.stack.as_slice() {
            if r == b"r" && t == b"t" {
                self.push_run_text(self.stack.len() - 2, text);
            }
        }
    }

    /// Append text produced by the run open at `run` in the element stack.
    ///
    /// Only runs placed directly in the paragraph or in one of its hyperlinks
    /// count. Runs wrapped in tracked changes, smart tags, simple fields or
    /// content controls are left out.
    fn push_run_text(&mut self, run: usize, text: &str) {
        let visible = match &self.stack[..run] {
            [.., p] if p == b"p" => true,
            [.., p, link] => p == b"p" && link == b"hyperlink",
            _ => false,
        };
        if !visible {
            return;
        }
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }

    fn current_cell(&mut self) -> Option<&mut TableCell> {
        self.tables.last_mut().and_then(|b| b.cell.as_mut())
    }
}

/// Value of the attribute with the given local name.
fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}
