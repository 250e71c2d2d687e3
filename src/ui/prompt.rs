//! Interactive collection of report parameters.
//!
//! Reads one line per question from any `BufRead`, so the same code serves
//! the terminal and piped input. End of input counts as a blank answer,
//! except at the final confirmation where it cancels the run.

use crate::core::range::{DateTuple, format_tuple, resolve_input};
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{CalendarEntry, CalendarMap};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// One answer line, or `None` at end of input.
    fn read_answer(&mut self) -> AppResult<Option<String>> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_line(&mut self) -> AppResult<String> {
        Ok(self.read_answer()?.unwrap_or_default())
    }

    pub fn choose_calendar(&mut self, calendars: &CalendarMap) -> AppResult<CalendarEntry> {
        self.say("Please pick a calendar to use")?;
        for (i, c) in calendars.entries().iter().enumerate() {
            self.say(&format!("{i}) {}", c.name))?;
        }

        let answer = self.read_line()?;
        let chosen = calendars.resolve(&answer)?.clone();
        self.say(&format!("Using calendar {}\n", chosen.name))?;
        Ok(chosen)
    }

    pub fn ask_date(&mut self, label: &str, default: DateTuple) -> AppResult<DateTuple> {
        self.say(&format!("Please specify {label} date"))?;
        self.say("year, month, day, hour, minute")?;
        self.say(&format!("The value defaults to {}", format_tuple(default)))?;

        let answer = self.read_line()?;
        let tuple = resolve_input(&answer, default)?;
        self.say(&format!("Using {}\n", format_tuple(tuple)))?;
        Ok(tuple)
    }

    pub fn ask_filter(&mut self) -> AppResult<Option<String>> {
        self.say("Please enter a search text for the events")?;
        self.say("If empty all events will be used")?;

        let answer = self.read_line()?;
        let answer = answer.trim();
        self.say("")?;
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Show the collected parameters and wait for the go-ahead.
    /// Answering `n`, `no` or `q`, or closing the input, cancels the run.
    pub fn confirm(&mut self, summary: &[String]) -> AppResult<()> {
        self.say("Initialization complete with the following values")?;
        for line in summary {
            self.say(line)?;
        }
        write!(self.output, "Press Enter to confirm and start search ")?;

        let Some(answer) = self.read_answer()? else {
            self.say("")?;
            return Err(AppError::Cancelled);
        };
        let answer = answer.trim().to_ascii_lowercase();
        self.say("")?;
        match answer.as_str() {
            "n" | "no" | "q" => Err(AppError::Cancelled),
            _ => Ok(()),
        }
    }
}
