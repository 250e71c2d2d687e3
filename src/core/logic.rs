use crate::calendar::EventSource;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::core::options::ReportOptions;
use crate::core::range::TimeRange;
use crate::core::report::{ReportDocument, format_report};
use crate::errors::AppResult;
use crate::export::{output_path, write_report};
use crate::models::report::{AggregateResult, EventOutcome};
use crate::ui::messages::{detail, header, info, warning};
use std::path::PathBuf;

/// Header lines above the table: owner, range start, range end.
pub fn build_headers(cfg: &Config, range: &TimeRange) -> Vec<String> {
    vec![
        cfg.owner_name.clone(),
        format!("{}: {}", cfg.labels.from, range.start_dmy()),
        format!("{}: {}", cfg.labels.to, range.end_dmy()),
    ]
}

fn log_outcomes(result: &AggregateResult) {
    for outcome in &result.outcomes {
        match outcome {
            EventOutcome::Skipped { title } => detail(format!("Skipped {title}")),
            EventOutcome::Included {
                title,
                row,
                duration: _,
            } => detail(format!(
                "{}, {}, {}, {}, {}",
                title, row.date, row.start, row.end, row.duration
            )),
        }
    }

    let b = result.breakdown;
    detail(format!(
        "days: {}, hours: {}, minutes: {}",
        b.days, b.hours, b.minutes
    ));
    detail(format!("hours_total: {}", result.total_row.duration));
}

/// The whole run: query → aggregate → format → write.
pub struct ReportLogic;

impl ReportLogic {
    /// Build the document without writing it.
    pub fn build(
        cfg: &Config,
        opts: &ReportOptions,
        source: &dyn EventSource,
    ) -> AppResult<(String, TimeRange, ReportDocument)> {
        let range = TimeRange::from_tuples(opts.start, opts.end)?;

        header(format!("Report for {}", opts.calendar.name));
        info(format!(
            "Fetching events from calendar {} ({})",
            opts.calendar.name, opts.calendar.id
        ));
        info(format!("From: {}  To: {}", range.start_iso(), range.end_iso()));

        let listing = source.fetch(&opts.calendar.id, &range)?;
        let calendar_name = listing
            .summary
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| opts.calendar.name.clone());

        info("Parsing event response");
        let result = aggregate(&listing.items, opts.filter.as_deref())?;
        log_outcomes(&result);

        if result.included_count() == 0 {
            warning("No events matched: the report only contains the total row.");
        }

        let headers = build_headers(cfg, &range);
        let doc = format_report(&result, &headers, &cfg.labels.column_titles());

        Ok((calendar_name, range, doc))
    }

    /// Build the document and write it; returns the written path.
    pub fn run(cfg: &Config, opts: &ReportOptions, source: &dyn EventSource) -> AppResult<PathBuf> {
        let (calendar_name, range, doc) = Self::build(cfg, opts, source)?;

        let path = output_path(
            &opts.output_dir,
            &calendar_name,
            &range,
            opts.filter.as_deref(),
            opts.format.as_str(),
        );

        write_report(&doc, &path, opts.format, opts.force)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::export::ExportFormat;
    use crate::models::calendar::CalendarEntry;
    use crate::models::event::{CalendarListing, RawEvent};
    use crate::models::report::ReportRow;
    use std::cell::RefCell;
    use std::env;
    use std::fs;

    struct StubSource {
        listing: CalendarListing,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl EventSource for StubSource {
        fn fetch(&self, calendar_id: &str, range: &TimeRange) -> AppResult<CalendarListing> {
            self.calls.borrow_mut().push((
                calendar_id.to_string(),
                range.start_iso(),
                range.end_iso(),
            ));
            Ok(self.listing.clone())
        }
    }

    fn stub(summary: Option<&str>, items: Vec<RawEvent>) -> StubSource {
        StubSource {
            listing: CalendarListing {
                summary: summary.map(str::to_string),
                items,
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    fn options(dir: &str, format: ExportFormat) -> ReportOptions {
        ReportOptions {
            calendar: CalendarEntry::new("freelance", "c@group.calendar.google.com"),
            start: [2019, 1, 20, 0, 0],
            end: [2019, 2, 19, 23, 59],
            filter: None,
            format,
            output_dir: env::temp_dir().join(dir),
            events_file: None,
            force: true,
        }
    }

    #[test]
    fn queries_with_resolved_range() {
        let cfg = Config::default();
        let src = stub(Some("Freelance"), vec![]);

        let (name, _, doc) = ReportLogic::build(&cfg, &options("x", ExportFormat::Pdf), &src).unwrap();
        assert_eq!(name, "Freelance");
        assert_eq!(
            src.calls.borrow()[0],
            (
                "c@group.calendar.google.com".to_string(),
                "2019-01-20T00:00:00Z".to_string(),
                "2019-02-19T23:59:00Z".to_string()
            )
        );
        assert_eq!(doc.header_lines[1].text, "From: 20-01-2019");
        assert_eq!(doc.header_lines[2].text, "To: 19-02-2019");
        assert_eq!(doc.total_row(), Some(&ReportRow::total("0.0")));
    }

    #[test]
    fn falls_back_to_configured_name() {
        let cfg = Config::default();
        let src = stub(None, vec![]);
        let (name, _, _) = ReportLogic::build(&cfg, &options("x", ExportFormat::Pdf), &src).unwrap();
        assert_eq!(name, "freelance");
    }

    #[test]
    fn writes_csv_at_computed_path() {
        let cfg = Config::default();
        let src = stub(
            Some("Freelance"),
            vec![RawEvent::new(
                "Standup",
                "2019-01-21T09:00:00+00:00",
                "2019-01-21T09:30:00+00:00",
            )],
        );
        let mut opts = options("calreport_logic_csv", ExportFormat::Csv);
        opts.filter = Some("stand".into());

        let path = ReportLogic::run(&cfg, &opts, &src).unwrap();
        assert_eq!(path, opts.output_dir.join("freelance-01-02-stand.csv"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "Time report;;;",
                "From: 20-01-2019;;;",
                "To: 19-02-2019;;;",
                "Date;Start;End;Duration",
                "21-01-2019;09:00;09:30;0:30:00",
                ";;Total;0.5",
            ]
        );
        fs::remove_dir_all(&opts.output_dir).ok();
    }

    #[test]
    fn bad_range_fails_before_querying() {
        let cfg = Config::default();
        let src = stub(None, vec![]);
        let mut opts = options("x", ExportFormat::Pdf);
        opts.start = [2019, 13, 1, 0, 0];

        assert!(matches!(
            ReportLogic::build(&cfg, &opts, &src).unwrap_err(),
            AppError::InvalidDate(_)
        ));
        assert!(src.calls.borrow().is_empty());
    }
}
