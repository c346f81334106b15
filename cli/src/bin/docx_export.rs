//! docx-export - write a DOCX document's paragraphs and tables to JSON and text

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use docpeek::export::{DEFAULT_INPUT, DEFAULT_JSON_OUTPUT, DEFAULT_TEXT_OUTPUT};
use docpeek::{DocxExporter, ExportPaths, JsonFormat};

#[derive(Parser)]
#[command(name = "docx-export")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export DOCX paragraphs and tables to JSON and text", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// JSON output file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_JSON_OUTPUT)]
    json: PathBuf,

    /// Text output file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEXT_OUTPUT)]
    text: PathBuf,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let paths = ExportPaths::new(cli.input)
        .with_json(cli.json)
        .with_text(cli.text);
    let exporter = DocxExporter::new(paths).with_json_format(format);

    match exporter.run() {
        Ok(content) => {
            log::info!(
                "Exported {} paragraphs and {} tables",
                content.paragraphs.len(),
                content.tables.len()
            );
            let paths = exporter.paths();
            println!(
                "{} {} and {}",
                "Content exported to".green(),
                paths.json.display(),
                paths.text.display()
            );
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
