//! Time utilities: elapsed-time text, clock formatting and the hours total.

use crate::models::report::TotalBreakdown;
use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};

const SECS_PER_DAY: i64 = 86_400;

/// `HH:MM`, 24-hour, zero padded, in the instant's own offset.
pub fn hhmm(t: &DateTime<FixedOffset>) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Whole days (floored) plus the non-negative remainder in seconds and
/// microseconds, so that `-30min` becomes `-1 day + 23:30:00`.
fn split_days(d: TimeDelta) -> (i64, i64, i64) {
    let micros = d
        .num_microseconds()
        .unwrap_or_else(|| d.num_seconds().saturating_mul(1_000_000));
    let secs = micros.div_euclid(1_000_000);
    let us = micros.rem_euclid(1_000_000);
    (secs.div_euclid(SECS_PER_DAY), secs.rem_euclid(SECS_PER_DAY), us)
}

/// Human readable elapsed time: `H:MM:SS`, prefixed with `N day(s), `
/// when the duration spans whole days.
///
/// Examples: `0:30:00`, `2:05:00`, `1 day, 2:30:00`, `-1 day, 23:30:00`.
pub fn format_elapsed(d: TimeDelta) -> String {
    let (days, secs, us) = split_days(d);
    let (h, rest) = (secs / 3600, secs % 3600);
    let (m, s) = (rest / 60, rest % 60);

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() != 1 { "s" } else { "" };
        out.push_str(&format!("{days} day{plural}, "));
    }
    out.push_str(&format!("{h}:{m:02}:{s:02}"));
    if us != 0 {
        out.push_str(&format!(".{us:06}"));
    }
    out
}

/// Inverse of [`format_elapsed`].
pub fn parse_elapsed(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    let (days, clock) = match s.split_once(", ") {
        Some((d, c)) => {
            let n = d
                .strip_suffix(" days")
                .or_else(|| d.strip_suffix(" day"))?
                .trim()
                .parse::<i64>()
                .ok()?;
            (n, c)
        }
        None => (0, s),
    };

    let (clock, us) = match clock.split_once('.') {
        Some((c, frac)) if frac.len() == 6 => (c, frac.parse::<i64>().ok()?),
        Some(_) => return None,
        None => (clock, 0),
    };

    let mut parts = clock.split(':');
    let h = parts.next()?.parse::<i64>().ok()?;
    let m = parts.next()?.parse::<i64>().ok()?;
    let sec = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() || m > 59 || sec > 59 || h < 0 || m < 0 || sec < 0 {
        return None;
    }

    Some(
        TimeDelta::days(days)
            + TimeDelta::hours(h)
            + TimeDelta::minutes(m)
            + TimeDelta::seconds(sec)
            + TimeDelta::microseconds(us),
    )
}

/// Decompose a total into days, hours and minutes; seconds are discarded.
pub fn breakdown(total: TimeDelta) -> TotalBreakdown {
    let (days, secs, _) = split_days(total);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let hours_total = (days * 24 + hours) as f64 + minutes as f64 / 60.0;

    TotalBreakdown {
        days,
        hours,
        minutes,
        hours_total,
    }
}

/// Shortest decimal text of the hours total, always with a fractional part
/// (`26.5`, `8.0`, `0.3333333333333333`).
pub fn format_hours_total(hours: f64) -> String {
    let s = hours.to_string();
    if hours.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}
