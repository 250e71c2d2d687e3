//! Query range resolution.
//!
//! Users type a date as `year, month, day, hour, minute`; any trailing
//! component they leave out falls back to the configured default. Calendar
//! field ranges are not checked here: an impossible date only fails when
//! the range is turned into instants.

use crate::errors::{AppError, AppResult};
use crate::utils::format_dmy;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// `[year, month, day, hour, minute]`
pub type DateTuple = [i32; 5];

/// Parse a comma separated `year,month,day,hour,minute` prefix.
///
/// Blank input yields an empty list. Components past the fifth are ignored.
pub fn parse_tuple_input(input: &str) -> AppResult<Vec<i32>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .take(5)
        .map(|part| {
            let p = part.trim();
            p.parse::<i32>()
                .map_err(|_| AppError::InvalidDateInput(format!("'{p}' is not a number in '{input}'")))
        })
        .collect()
}

/// Positional override: user values where given, defaults elsewhere.
pub fn resolve_range(user: &[i32], defaults: DateTuple) -> DateTuple {
    let mut out = defaults;
    for (slot, v) in out.iter_mut().zip(user) {
        *slot = *v;
    }
    out
}

/// Parse and resolve in one step.
pub fn resolve_input(input: &str, defaults: DateTuple) -> AppResult<DateTuple> {
    Ok(resolve_range(&parse_tuple_input(input)?, defaults))
}

pub fn tuple_to_datetime(t: DateTuple) -> AppResult<NaiveDateTime> {
    let [y, mo, d, h, mi] = t;
    let field = |v: i32| u32::try_from(v).map_err(|_| AppError::InvalidDate(format_tuple(t)));

    let (mo, d, h, mi) = (field(mo)?, field(d)?, field(h)?, field(mi)?);

    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .ok_or_else(|| AppError::InvalidDate(format_tuple(t)))
}

pub fn format_tuple(t: DateTuple) -> String {
    format!("[{}, {}, {}, {}, {}]", t[0], t[1], t[2], t[3], t[4])
}

/// Resolved query window. The service treats it as `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn from_tuples(start: DateTuple, end: DateTuple) -> AppResult<Self> {
        Ok(Self {
            start: tuple_to_datetime(start)?,
            end: tuple_to_datetime(end)?,
        })
    }

    /// ISO-8601 with an explicit UTC marker: `2019-01-20T00:00:00Z`.
    pub fn start_iso(&self) -> String {
        iso_utc(&self.start)
    }

    pub fn end_iso(&self) -> String {
        iso_utc(&self.end)
    }

    pub fn start_month(&self) -> u32 {
        self.start.month()
    }

    pub fn end_month(&self) -> u32 {
        self.end.month()
    }

    pub fn start_dmy(&self) -> String {
        format_dmy(&self.start)
    }

    pub fn end_dmy(&self) -> String {
        format_dmy(&self.end)
    }
}

fn iso_utc(t: &NaiveDateTime) -> String {
    format!("{}Z", t.format("%Y-%m-%dT%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_START: DateTuple = [2019, 1, 20, 0, 0];
    const DEFAULT_END: DateTuple = [2019, 2, 19, 23, 59];

    #[test]
    fn partial_input_falls_back_positionally() {
        assert_eq!(
            resolve_input("2020,3", DEFAULT_START).unwrap(),
            [2020, 3, 20, 0, 0]
        );
        assert_eq!(
            resolve_input(" 2021 , 6 , 1 , 8 , 30 ", DEFAULT_START).unwrap(),
            [2021, 6, 1, 8, 30]
        );
    }

    #[test]
    fn blank_input_uses_defaults() {
        assert_eq!(resolve_input("", DEFAULT_END).unwrap(), DEFAULT_END);
        assert_eq!(resolve_input("   ", DEFAULT_END).unwrap(), DEFAULT_END);
    }

    #[test]
    fn extra_components_are_ignored() {
        assert_eq!(
            resolve_input("2020,1,2,3,4,5,6", DEFAULT_START).unwrap(),
            [2020, 1, 2, 3, 4]
        );
    }

    #[test]
    fn non_numeric_component_is_an_input_error() {
        for bad in ["2020,march", "2020,,3", "x"] {
            assert!(matches!(
                resolve_input(bad, DEFAULT_START).unwrap_err(),
                AppError::InvalidDateInput(_)
            ));
        }
    }

    #[test]
    fn out_of_range_fields_fail_when_building_instants() {
        let tuple = resolve_input("2020,13", DEFAULT_START).unwrap();
        assert_eq!(tuple, [2020, 13, 20, 0, 0]);
        assert!(matches!(
            TimeRange::from_tuples(tuple, DEFAULT_END).unwrap_err(),
            AppError::InvalidDate(_)
        ));
        assert!(TimeRange::from_tuples([2019, 1, -1, 0, 0], DEFAULT_END).is_err());
        assert!(TimeRange::from_tuples([2019, 1, 1, 24, 0], DEFAULT_END).is_err());
    }

    #[test]
    fn iso_text_has_utc_marker() {
        let r = TimeRange::from_tuples(DEFAULT_START, DEFAULT_END).unwrap();
        assert_eq!(r.start_iso(), "2019-01-20T00:00:00Z");
        assert_eq!(r.end_iso(), "2019-02-19T23:59:00Z");
        assert_eq!((r.start_month(), r.end_month()), (1, 2));
        assert_eq!(r.start_dmy(), "20-01-2019");
        assert_eq!(r.end_dmy(), "19-02-2019");
    }
}
