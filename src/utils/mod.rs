pub mod date;
pub mod path;
pub mod time;

pub use date::format_dmy;
pub use time::{breakdown, format_elapsed, format_hours_total, hhmm};
