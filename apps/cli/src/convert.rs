//! Optional PDF conversion by driving LibreOffice headless.
//!
//! The converter is a black box: we hand it the saved document, let it write
//! `<stem>.pdf` next to it, and surface its stderr on failure.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::errors::AppError;

/// Converts a saved document to PDF and returns the PDF path.
pub fn docx_to_pdf(document: &Path, soffice_bin: &str) -> Result<PathBuf, AppError> {
    let pdf_path = pdf_output_path(document)?;
    let outdir = document.parent().filter(|p| !p.as_os_str().is_empty());
    let outdir = outdir.unwrap_or_else(|| Path::new("."));

    debug!("Invoking {soffice_bin} on {}", document.display());
    let output = Command::new(soffice_bin)
        .arg("--headless")
        .arg("--convert-to")
        .arg("pdf")
        .arg("--outdir")
        .arg(outdir)
        .arg(document)
        .output()
        .map_err(|err| AppError::Convert(format!("failed to launch {soffice_bin}: {err}")))?;

    if !output.status.success() {
        return Err(AppError::Convert(format!(
            "{soffice_bin} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    if !pdf_path.exists() {
        return Err(AppError::Convert(format!(
            "converter reported success but {} was not created",
            pdf_path.display()
        )));
    }

    Ok(pdf_path)
}

/// Derives the converter's output path: same directory, same stem, `.pdf`.
fn pdf_output_path(document: &Path) -> Result<PathBuf, AppError> {
    if document.file_stem().is_none() {
        return Err(AppError::Convert(format!(
            "document path {} has no file stem",
            document.display()
        )));
    }
    Ok(document.with_extension("pdf"))
}
