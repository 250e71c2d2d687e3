//! Calendar query collaborators: where the raw events come from.

pub mod google;
pub mod source;
pub mod token;

pub use google::GoogleCalendarSource;
pub use source::{EventSource, FileEventSource};
