//! Unified application error type.
//! All modules (core, calendar, export, cli) return AppError so a failure
//! anywhere in the pipeline aborts the run with one readable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid date input: {0}")]
    InvalidDateInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid calendar index: {0}")]
    InvalidCalendarIndex(String),

    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    #[error("Cancelled by user")]
    Cancelled,

    // ---------------------------
    // Event data
    // ---------------------------
    #[error("Invalid event timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Calendar service
    // ---------------------------
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Calendar API error: {0}")]
    CalendarApi(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::CalendarApi(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
