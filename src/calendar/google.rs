//! Google Calendar v3 event listing.

use crate::calendar::source::EventSource;
use crate::calendar::token::ensure_access_token;
use crate::config::GoogleConfig;
use crate::core::range::TimeRange;
use crate::errors::{AppError, AppResult};
use crate::models::event::CalendarListing;
use reqwest::Url;
use reqwest::blocking::Client;

pub struct GoogleCalendarSource {
    client: Client,
    config: GoogleConfig,
}

impl GoogleCalendarSource {
    pub fn new(config: &GoogleConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// `{api_base}/calendars/{id}/events`, with the id percent-encoded.
    pub fn events_url(&self, calendar_id: &str) -> AppResult<Url> {
        let mut url = Url::parse(self.config.api_base.trim_end_matches('/'))
            .map_err(|e| AppError::Config(format!("invalid google.api_base: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Config("google.api_base cannot be a base URL".into()))?
            .pop_if_empty()
            .extend(["calendars", calendar_id, "events"]);

        Ok(url)
    }
}

/// Query parameters of the listing: single (expanded) events by start time.
pub fn query_params(range: &TimeRange) -> Vec<(&'static str, String)> {
    vec![
        ("timeMin", range.start_iso()),
        ("timeMax", range.end_iso()),
        ("singleEvents", "true".to_string()),
        ("orderBy", "startTime".to_string()),
    ]
}

impl EventSource for GoogleCalendarSource {
    fn fetch(&self, calendar_id: &str, range: &TimeRange) -> AppResult<CalendarListing> {
        let access_token = ensure_access_token(&self.client, &self.config)?;

        let resp = self
            .client
            .get(self.events_url(calendar_id)?)
            .bearer_auth(access_token)
            .query(&query_params(range))
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(AppError::CalendarApi(format!(
                "failed to fetch events: HTTP {status} - {body}"
            )));
        }

        resp.json::<CalendarListing>()
            .map_err(|e| AppError::CalendarApi(format!("invalid events response: {e}")))
    }
}
