//! Locating the PDF to inspect.
//!
//! The preferred path wins when it exists. Otherwise the most recently
//! modified `.pdf` entry of a fallback directory is used. Entries are matched
//! by name only, so a directory called `x.pdf` is still a candidate and fails
//! later when it is read.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Preferred PDF when no path is given.
pub const DEFAULT_PDF_PATH: &str = "uploads/cv/cv-1768286932175-923162675.pdf";

/// Directory scanned when the preferred PDF does not exist.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/cv";

/// Resolve the PDF to read.
///
/// # Returns
/// * the preferred path if it exists
/// * otherwise the latest `.pdf` file in `fallback_dir`
/// * `Err(Error::NoPdfFound)` if the directory holds no `.pdf` entry
/// * `Err(Error::Io)` if `fallback_dir` cannot be listed, including when it
///   does not exist
pub fn resolve_pdf<P: AsRef<Path>, D: AsRef<Path>>(
    preferred: P,
    fallback_dir: D,
) -> Result<PathBuf> {
    let preferred = preferred.as_ref();
    if preferred.exists() {
        return Ok(preferred.to_path_buf());
    }

    let fallback_dir = fallback_dir.as_ref();
    log::debug!(
        "{} does not exist, scanning {}",
        preferred.display(),
        fallback_dir.display()
    );

    latest_pdf(fallback_dir)?.ok_or_else(|| Error::NoPdfFound(fallback_dir.to_path_buf()))
}

/// The most recently modified entry in `dir` whose name ends with `.pdf`.
///
/// The suffix match is case-sensitive. Equal modification times are broken
/// by the smaller path so the choice does not depend on directory order.
/// `Ok(None)` means the directory exists but has no candidate.
pub fn latest_pdf<P: AsRef<Path>>(dir: P) -> Result<Option<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("{}: '{}'", e, dir.display()),
        ))
    })?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().ends_with(".pdf") {
            continue;
        }

        let path = entry.path();
        let modified = fs::metadata(&path)?.modified()?;
        let newer = match &latest {
            None => true,
            Some((best_time, best_path)) => {
                modified > *best_time || (modified == *best_time && path < *best_path)
            }
        };
        if newer {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(modified, path)| {
        let modified: DateTime<Local> = modified.into();
        log::debug!(
            "Selected {} (modified {})",
            path.display(),
            modified.to_rfc3339()
        );
        path
    }))
}
