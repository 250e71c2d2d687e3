use crate::calendar::{EventSource, FileEventSource, GoogleCalendarSource};
use crate::cli::parser::ReportArgs;
use crate::config::Config;
use crate::core::logic::ReportLogic;
use crate::core::options::{ReportRequest, resolve_options};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::Prompter;

impl From<&ReportArgs> for ReportRequest {
    fn from(args: &ReportArgs) -> Self {
        ReportRequest {
            calendar: args.calendar.clone(),
            from: args.from.clone(),
            to: args.to.clone(),
            filter: args.filter.clone(),
            output_dir: args.output_dir.clone(),
            events_file: args.events_file.clone(),
            format: Some(args.format),
            force: args.force,
            yes: args.yes,
        }
    }
}

/// Handle the `report` command
pub fn handle(args: &ReportArgs, cfg: &Config) -> AppResult<()> {
    let req = ReportRequest::from(args);
    let opts = resolve_options(&req, cfg, &mut Prompter::stdio())?;

    let source: Box<dyn EventSource> = match &opts.events_file {
        Some(path) => {
            info(format!("Reading events from {}", path.display()));
            Box::new(FileEventSource::new(path))
        }
        None => {
            info("Fetching credentials");
            Box::new(GoogleCalendarSource::new(&cfg.google))
        }
    };

    let path = ReportLogic::run(cfg, &opts, source.as_ref())?;
    info(format!("Report written to {}", path.display()));
    Ok(())
}
