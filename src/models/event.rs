use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Start or end of a calendar event, as the calendar service returns it.
///
/// Timed events carry `dateTime` (RFC3339 with offset), all-day events only
/// carry `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "timeZone", default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    pub fn at(date_time: &str) -> Self {
        Self {
            date_time: Some(date_time.to_string()),
            ..Default::default()
        }
    }
}

/// One event of the calendar listing (a single instance, recurring events
/// are already expanded by the query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub summary: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

impl RawEvent {
    pub fn new(summary: &str, start: &str, end: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            start: EventTime::at(start),
            end: EventTime::at(end),
        }
    }

    /// Title used for filtering and diagnostics; untitled events count as "".
    pub fn title(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn start_instant(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_instant(self.title(), "start", &self.start)
    }

    pub fn end_instant(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_instant(self.title(), "end", &self.end)
    }
}

fn parse_instant(title: &str, which: &str, t: &EventTime) -> AppResult<DateTime<FixedOffset>> {
    let raw = t.date_time.as_deref().ok_or_else(|| {
        AppError::InvalidTimestamp(format!("event '{title}' has no {which} dateTime"))
    })?;

    DateTime::parse_from_rfc3339(raw.trim())
        .map_err(|e| AppError::InvalidTimestamp(format!("event '{title}' {which} '{raw}': {e}")))
}

/// Response of the calendar query: display name plus the event list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarListing {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub items: Vec<RawEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn deserializes_google_event_shape() {
        let json = r#"{
            "summary": "Freelance",
            "timeZone": "Europe/Copenhagen",
            "items": [
                {
                    "id": "abc",
                    "summary": "Standup",
                    "start": { "dateTime": "2019-01-21T09:00:00+01:00" },
                    "end": { "dateTime": "2019-01-21T09:30:00+01:00" }
                }
            ]
        }"#;

        let listing: CalendarListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.summary.as_deref(), Some("Freelance"));
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].title(), "Standup");

        let start = listing.items[0].start_instant().unwrap();
        assert_eq!(start.hour(), 9);
        assert_eq!(start.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn all_day_event_is_rejected() {
        let ev = RawEvent {
            summary: Some("Holiday".into()),
            start: EventTime {
                date: Some("2019-01-21".into()),
                ..Default::default()
            },
            end: EventTime {
                date: Some("2019-01-22".into()),
                ..Default::default()
            },
        };

        let err = ev.start_instant().unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp(_)));
    }

    #[test]
    fn untitled_event_has_empty_title() {
        let mut ev = RawEvent::new("x", "2019-01-21T09:00:00Z", "2019-01-21T10:00:00Z");
        ev.summary = None;
        assert_eq!(ev.title(), "");
    }
}
