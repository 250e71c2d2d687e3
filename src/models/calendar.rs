use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A named calendar and the identifier the calendar service knows it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub name: String,
    pub id: String,
}

impl CalendarEntry {
    pub fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
        }
    }
}

/// Ordered name → id mapping of the calendars a report can be built from.
///
/// Order matters: it is the order shown to the user and the one indices
/// refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarMap {
    entries: Vec<CalendarEntry>,
}

impl CalendarMap {
    pub fn new(entries: Vec<CalendarEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn by_index(&self, index: usize) -> AppResult<&CalendarEntry> {
        self.entries.get(index).ok_or_else(|| {
            AppError::InvalidCalendarIndex(format!(
                "{index} (choose 0..{})",
                self.entries.len().saturating_sub(1)
            ))
        })
    }

    pub fn by_name(&self, name: &str) -> AppResult<&CalendarEntry> {
        self.entries
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| AppError::UnknownCalendar(name.to_string()))
    }

    /// Resolve a user selection: a numeric index, or else a calendar name.
    pub fn resolve(&self, selector: &str) -> AppResult<&CalendarEntry> {
        let s = selector.trim();
        if s.is_empty() {
            return Err(AppError::InvalidCalendarIndex("empty selection".into()));
        }

        match s.parse::<usize>() {
            Ok(idx) => self.by_index(idx),
            Err(_) if s.starts_with('-') || s.chars().all(|c| c.is_ascii_digit()) => {
                Err(AppError::InvalidCalendarIndex(s.to_string()))
            }
            Err(_) => self.by_name(s),
        }
    }

    /// Names that appear more than once (case-insensitive).
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut dups = Vec::new();
        for c in &self.entries {
            let key = c.name.to_lowercase();
            if seen.contains(&key) {
                if !dups.contains(&c.name) {
                    dups.push(c.name.clone());
                }
            } else {
                seen.push(key);
            }
        }
        dups
    }
}

/// Positional lookup returning the `(name, id)` pair for the chosen index.
pub fn resolve_calendar(index: usize, calendars: &CalendarMap) -> AppResult<(String, String)> {
    let c = calendars.by_index(index)?;
    Ok((c.name.clone(), c.id.clone()))
}
