//! Plain text rendering for exported content.

use crate::model::ExportedContent;

/// Width of the `=` banner lines.
pub const BANNER_WIDTH: usize = 80;

/// Render content as a banner-delimited text report.
///
/// Both the `PARAGRAPHS:` and `TABLES:` sections are always present, even
/// when empty. Tables are numbered from 1 and rows are joined with ` | `.
pub fn to_text(content: &ExportedContent) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    push_banner(&mut out, &rule, "PARAGRAPHS:");
    for paragraph in &content.paragraphs {
        out.push_str(paragraph);
        out.push('\n');
    }

    out.push('\n');
    push_banner(&mut out, &rule, "TABLES:");
    for (i, table) in content.tables.iter().enumerate() {
        out.push_str(&format!("\n--- Table {} ---\n", i + 1));
        for row in table {
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
    }

    out
}

fn push_banner(out: &mut String, rule: &str, title: &str) {
    out.push_str(rule);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(rule);
    out.push('\n');
}
