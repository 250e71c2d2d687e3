pub mod calendars;
pub mod config;
pub mod init;
pub mod report;
