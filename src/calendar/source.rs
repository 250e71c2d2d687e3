use crate::core::range::TimeRange;
use crate::errors::{AppError, AppResult};
use crate::models::event::CalendarListing;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can list the events of one calendar inside a time range.
///
/// Recurring events must come back expanded into single instances, ordered
/// by start time.
pub trait EventSource {
    fn fetch(&self, calendar_id: &str, range: &TimeRange) -> AppResult<CalendarListing>;
}

/// Reads a stored calendar response (same JSON shape the service returns).
///
/// The file is taken as-is: no range filtering, since the stored response
/// already reflects the query that produced it.
pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl EventSource for FileEventSource {
    fn fetch(&self, _calendar_id: &str, _range: &TimeRange) -> AppResult<CalendarListing> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::CalendarApi(format!("invalid events file {}: {e}", self.path.display()))
        })
    }
}
