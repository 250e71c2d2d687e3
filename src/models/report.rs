use chrono::TimeDelta;
use serde::Serialize;

/// Text shown in the third column of the synthesized total row.
pub const TOTAL_LABEL: &str = "Total";

/// One line of the report table: date, start, end, duration.
///
/// The column-title row and the total row use the same shape with blank
/// fields where a column does not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

impl ReportRow {
    pub fn new(date: &str, start: &str, end: &str, duration: &str) -> Self {
        Self {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            duration: duration.to_string(),
        }
    }

    pub fn total(hours_total: &str) -> Self {
        Self::new("", "", TOTAL_LABEL, hours_total)
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.start, &self.end, &self.duration]
    }
}

/// Total duration split the way the report counts it (seconds dropped).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub hours_total: f64,
}

/// What happened to each input event, in input order.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Included {
        title: String,
        row: ReportRow,
        duration: TimeDelta,
    },
    Skipped {
        title: String,
    },
}

/// Rows of the included events plus the total they add up to.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub rows: Vec<ReportRow>,
    pub total: TimeDelta,
    pub breakdown: TotalBreakdown,
    pub total_row: ReportRow,
    pub outcomes: Vec<EventOutcome>,
}

impl AggregateResult {
    pub fn included_count(&self) -> usize {
        self.rows.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EventOutcome::Skipped { .. }))
            .count()
    }

    /// Full table: column titles, one row per included event, total row.
    pub fn table(&self, column_titles: &ReportRow) -> Vec<ReportRow> {
        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(column_titles.clone());
        out.extend(self.rows.iter().cloned());
        out.push(self.total_row.clone());
        out
    }
}
