//! Turns partially supplied parameters into a complete `ReportOptions`,
//! asking interactively for whatever is missing.

use crate::config::Config;
use crate::core::range::{DateTuple, format_tuple, resolve_input};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::calendar::CalendarEntry;
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Parameters as given on the command line; `None` means "ask".
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub calendar: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub filter: Option<String>,
    pub output_dir: Option<String>,
    pub events_file: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub force: bool,
    pub yes: bool,
}

/// Fully resolved parameters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub calendar: CalendarEntry,
    pub start: DateTuple,
    pub end: DateTuple,
    pub filter: Option<String>,
    pub format: ExportFormat,
    pub output_dir: PathBuf,
    pub events_file: Option<PathBuf>,
    pub force: bool,
}

impl ReportOptions {
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Calendar: {}", self.calendar.name),
            format!("From: {}", format_tuple(self.start)),
            format!("To: {}", format_tuple(self.end)),
            format!("Search: {}", self.filter.as_deref().unwrap_or("")),
        ]
    }
}

/// Resolve every parameter, in the fixed order calendar → start → end →
/// filter → confirmation. Supplied values are used as-is; the rest are
/// prompted for. The confirmation is only asked when something was prompted
/// and `yes` is not set.
pub fn resolve_options<R: BufRead, W: Write>(
    req: &ReportRequest,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<ReportOptions> {
    let mut asked = false;

    let calendar = match &req.calendar {
        Some(sel) => cfg.calendars.resolve(sel)?.clone(),
        None => {
            asked = true;
            prompter.choose_calendar(&cfg.calendars)?
        }
    };

    let start = match &req.from {
        Some(s) => resolve_input(s, cfg.default_start)?,
        None => {
            asked = true;
            prompter.ask_date("a start", cfg.default_start)?
        }
    };

    let end = match &req.to {
        Some(s) => resolve_input(s, cfg.default_end)?,
        None => {
            asked = true;
            prompter.ask_date("an end", cfg.default_end)?
        }
    };

    let filter = match &req.filter {
        Some(f) => Some(f.trim().to_string()).filter(|f| !f.is_empty()),
        None => {
            asked = true;
            prompter.ask_filter()?
        }
    };

    let options = ReportOptions {
        calendar,
        start,
        end,
        filter,
        format: req.format.unwrap_or(ExportFormat::Pdf),
        output_dir: PathBuf::from(req.output_dir.as_deref().unwrap_or(&cfg.output_dir)),
        events_file: req.events_file.clone(),
        force: req.force,
    };

    if asked && !req.yes {
        prompter.confirm(&options.summary())?;
    }

    Ok(options)
}
