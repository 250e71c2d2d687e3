//! Event → report rows transformation.

use crate::errors::AppResult;
use crate::models::event::RawEvent;
use crate::models::report::{AggregateResult, EventOutcome, ReportRow};
use crate::utils::{breakdown, format_dmy, format_elapsed, format_hours_total, hhmm};
use chrono::TimeDelta;

/// Case-insensitive substring test; an empty or missing filter keeps everything.
pub fn matches_filter(title: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) if !f.is_empty() => title.to_lowercase().contains(&f.to_lowercase()),
        _ => true,
    }
}

/// Turn the events into report rows and a total.
///
/// Events whose title does not contain `filter` are skipped and do not count
/// towards the total. With no included events the total is zero.
/// A malformed timestamp on an included event aborts the whole aggregation.
pub fn aggregate(events: &[RawEvent], filter: Option<&str>) -> AppResult<AggregateResult> {
    let mut rows = Vec::new();
    let mut outcomes = Vec::with_capacity(events.len());

    for ev in events {
        let title = ev.title().to_string();
        if !matches_filter(&title, filter) {
            outcomes.push(EventOutcome::Skipped { title });
            continue;
        }

        let start = ev.start_instant()?;
        let end = ev.end_instant()?;
        let duration = end - start;

        let row = ReportRow {
            date: format_dmy(&start.date_naive()),
            start: hhmm(&start),
            end: hhmm(&end),
            duration: format_elapsed(duration),
        };

        rows.push(row.clone());
        outcomes.push(EventOutcome::Included {
            title,
            row,
            duration,
        });
    }

    let total = outcomes
        .iter()
        .filter_map(|o| match o {
            EventOutcome::Included { duration, .. } => Some(*duration),
            EventOutcome::Skipped { .. } => None,
        })
        .fold(TimeDelta::zero(), |acc, d| acc + d);

    let breakdown = breakdown(total);
    let total_row = ReportRow::total(&format_hours_total(breakdown.hours_total));

    Ok(AggregateResult {
        rows,
        total,
        breakdown,
        total_row,
        outcomes,
    })
}
