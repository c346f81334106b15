//! Integration tests for DOCX parsing and export.

mod common;

use std::fs;
use std::io::Cursor;

use docpeek::{
    export_docx, parse_docx, DocxExporter, DocxParser, Error, ExportPaths, ExportedContent,
    JsonFormat,
};

fn sample_body() -> String {
    [
        common::paragraph("A"),
        common::paragraph("  "),
        common::paragraph("B"),
        common::table(&[&["x", " y "], &["z", ""]]),
    ]
    .concat()
}

fn paths_in(dir: &std::path::Path) -> ExportPaths {
    ExportPaths::new(dir.join("HRM.docx"))
        .with_json(dir.join("hrm_content.json"))
        .with_text(dir.join("hrm_content.txt"))
}

#[test]
fn test_export_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx(&sample_body())).unwrap();

    let content = export_docx(&paths).unwrap();

    assert_eq!(content.paragraphs, vec!["A", "B"]);
    assert_eq!(content.tables, vec![vec![vec!["x", "y"], vec!["z", ""]]]);

    let rule = "=".repeat(80);
    let text = fs::read_to_string(&paths.text).unwrap();
    assert_eq!(
        text,
        format!(
            "{rule}\nPARAGRAPHS:\n{rule}\nA\nB\n\n{rule}\nTABLES:\n{rule}\n\n--- Table 1 ---\nx | y\nz | \n"
        )
    );
}

#[test]
fn test_json_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx(&sample_body())).unwrap();

    let content = export_docx(&paths).unwrap();
    let reread = ExportedContent::from_json_file(&paths.json).unwrap();

    assert_eq!(reread, content);
}

#[test]
fn test_export_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx(&sample_body())).unwrap();

    export_docx(&paths).unwrap();
    let first_json = fs::read(&paths.json).unwrap();
    let first_text = fs::read(&paths.text).unwrap();

    export_docx(&paths).unwrap();
    assert_eq!(fs::read(&paths.json).unwrap(), first_json);
    assert_eq!(fs::read(&paths.text).unwrap(), first_text);
}

#[test]
fn test_export_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx(&common::paragraph("fresh"))).unwrap();
    fs::write(&paths.json, "stale stale stale stale stale stale").unwrap();
    fs::write(&paths.text, "stale").unwrap();

    export_docx(&paths).unwrap();

    let json = fs::read_to_string(&paths.json).unwrap();
    assert!(!json.contains("stale"));
    assert!(fs::read_to_string(&paths.text).unwrap().contains("fresh\n"));
}

#[test]
fn test_empty_document_keeps_both_banners() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx("")).unwrap();

    let content = export_docx(&paths).unwrap();
    assert!(content.is_empty());

    let text = fs::read_to_string(&paths.text).unwrap();
    let paragraphs_at = text.find("PARAGRAPHS:").unwrap();
    let tables_at = text.find("TABLES:").unwrap();
    assert!(paragraphs_at < tables_at);
    assert_eq!(text.matches(&"=".repeat(80)).count(), 4);

    let json = fs::read_to_string(&paths.json).unwrap();
    assert_eq!(json, "{\n  \"paragraphs\": [],\n  \"tables\": []\n}");
}

#[test]
fn test_non_ascii_written_literally() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    let body = [
        common::paragraph("Quy trình tuyển dụng"),
        common::table(&[&["Họ tên", "Phòng ban"]]),
    ]
    .concat();
    fs::write(&paths.input, common::docx(&body)).unwrap();

    export_docx(&paths).unwrap();

    let json = fs::read_to_string(&paths.json).unwrap();
    assert!(json.contains("\"Quy trình tuyển dụng\""));
    assert!(!json.contains("\\u"));
    let text = fs::read_to_string(&paths.text).unwrap();
    assert!(text.contains("Họ tên | Phòng ban\n"));
}

#[test]
fn test_compact_json() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::write(&paths.input, common::docx(&sample_body())).unwrap();

    DocxExporter::new(paths.clone())
        .with_json_format(JsonFormat::Compact)
        .run()
        .unwrap();

    let json = fs::read_to_string(&paths.json).unwrap();
    assert_eq!(
        json,
        r#"{"paragraphs":["A","B"],"tables":[[["x","y"],["z",""]]]}"#
    );
}

#[test]
fn test_tables_numbered_from_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_tables.docx");
    let body = [common::table(&[&["first"]]), common::table(&[&["second"]])].concat();
    fs::write(&path, common::docx(&body)).unwrap();

    let doc = parse_docx(&path).unwrap();
    assert_eq!(doc.table_count(), 2);

    let content = ExportedContent::from_document(&doc);
    let text = docpeek::render::to_text(&content);
    assert!(text.contains("\n--- Table 1 ---\nfirst\n"));
    assert!(text.contains("\n--- Table 2 ---\nsecond\n"));
}

#[test]
fn test_parse_from_reader() {
    let data = common::docx(&common::paragraph("from a reader"));
    let doc = DocxParser::from_reader(Cursor::new(data))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(doc.paragraphs[0].text, "from a reader");
}

#[test]
fn test_missing_document_part() {
    let data = common::package(&[("word/styles.xml", "<w:styles/>")]);
    let result = DocxParser::from_bytes(&data);
    assert!(matches!(result, Err(Error::DocxParse(_))));
}

#[test]
fn test_pdf_input_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_docx.docx");
    fs::write(&path, b"%PDF-1.4\n%%EOF\n").unwrap();

    assert!(matches!(parse_docx(&path), Err(Error::UnknownFormat)));
}
