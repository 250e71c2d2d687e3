use chrono::Datelike;

/// `DD-MM-YYYY`, the date format used throughout the report.
pub fn format_dmy<D: Datelike>(d: &D) -> String {
    format!("{:02}-{:02}-{:04}", d.day(), d.month(), d.year())
}
