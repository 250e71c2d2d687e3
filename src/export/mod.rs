// src/export/mod.rs

mod csv;
pub mod fs_utils;
mod json;
mod pdf;
mod pdf_export;

pub use fs_utils::output_path;
pub use pdf::PdfManager;

use crate::core::report::ReportDocument;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `doc` to `path` in the requested format.
pub fn write_report(
    doc: &ReportDocument,
    path: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs_utils::ensure_dir(dir)?;
    }
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Pdf => pdf_export::export_pdf(doc, path),
        ExportFormat::Csv => csv::export_csv(doc, path),
        ExportFormat::Json => json::export_json(doc, path),
    }
}
