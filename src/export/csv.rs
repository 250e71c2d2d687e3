// src/export/csv.rs

use crate::core::report::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::WriterBuilder;
use std::path::Path;

/// Semicolon separated export: each header line on its own row (padded to
/// four columns), then the column titles, event rows and total row.
pub(crate) fn export_csv(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for header in &doc.header_lines {
        wtr.write_record([header.text.as_str(), "", "", ""])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for row in &doc.rows {
        wtr.write_record(row.cells())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
