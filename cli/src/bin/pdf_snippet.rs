//! pdf-snippet - report the extracted text length and opening snippet of a PDF

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colored::Colorize;

use docpeek::locate::{DEFAULT_PDF_PATH, DEFAULT_UPLOAD_DIR};
use docpeek::render::{char_length, DEFAULT_SNIPPET_LEN};
use docpeek::{resolve_pdf, Error, PdfReport};

#[derive(Parser)]
#[command(name = "pdf-snippet")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Print the extracted text length and a snippet of a PDF", long_about = None)]
struct Cli {
    /// PDF file to inspect
    #[arg(value_name = "FILE", default_value = DEFAULT_PDF_PATH)]
    input: PathBuf,

    /// Directory searched for the newest PDF when FILE does not exist
    #[arg(long, value_name = "DIR", default_value = DEFAULT_UPLOAD_DIR)]
    dir: PathBuf,

    /// Number of characters in the snippet
    #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_SNIPPET_LEN)]
    snippet_len: usize,

    /// Print the whole extracted text instead of a snippet
    #[arg(long)]
    full: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if !docpeek::pdf_supported() {
        println!("PDF support not installed");
        return;
    }

    let path = match resolve_pdf(&cli.input, &cli.dir) {
        Ok(path) => path,
        Err(Error::NoPdfFound(dir)) => {
            log::debug!("No PDF candidates in {}", dir.display());
            println!("{}", "No PDF file found".yellow());
            process::exit(1);
        }
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    println!("Checking file: {}", path.display());

    // Extraction failures are reported, not propagated: the exit code stays 0.
    if let Err(e) = cmd_snippet(&path, cli.snippet_len, cli.full) {
        print_error(&e);
    }
}

fn cmd_snippet(path: &Path, snippet_len: usize, full: bool) -> docpeek::Result<()> {
    let text = docpeek::extract_pdf_text(path)?;

    if full {
        println!("Extracted Length: {}", char_length(&text));
        println!("--- START EXTRACTED TEXT ---");
        println!("{}", text);
        println!("--- END EXTRACTED TEXT ---");
    } else {
        println!("{}", PdfReport::new(&text, snippet_len));
    }

    Ok(())
}

fn print_error(e: &Error) {
    println!("Error: {}", e);
}
