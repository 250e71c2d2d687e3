// src/export/json.rs

use crate::core::report::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::report::ReportRow;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    headers: Vec<&'a str>,
    columns: Option<&'a ReportRow>,
    rows: &'a [ReportRow],
    total: Option<&'a ReportRow>,
    hours_total: f64,
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let report = JsonReport {
        headers: doc.header_lines.iter().map(|h| h.text.as_str()).collect(),
        columns: doc.header_row(),
        rows: doc.event_rows(),
        total: doc.total_row(),
        hours_total: doc.hours_total,
    };

    let json_data = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
