//! Error types for the timetable core.

use chrono::NaiveDate;
use thiserror::Error;

use crate::week::WeekId;

/// Errors that can occur while loading or resolving a schedule.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Week not found: {0}")]
    WeekNotFound(WeekId),

    #[error("Malformed dataset: {}", format_issues(.0))]
    MalformedData(Vec<ValidationIssue>),

    #[error("Dataset parse error: {0}")]
    DatasetParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown weekday '{0}'")]
    InvalidWeekday(String),

    #[error("Unknown view mode '{0}'. Expected 'day' or 'week'")]
    InvalidViewMode(String),

    #[error("Invalid lesson time '{0}'. Expected HH:MM — HH:MM")]
    InvalidLessonTime(String),

    #[error("Unknown lesson type '{0}'")]
    InvalidLessonType(String),
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;

/// A single problem found while validating a dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("week {0} is defined more than once")]
    DuplicateWeek(WeekId),

    #[error("week {week} starts on {start} but ends on {end}")]
    InvertedWeek {
        week: WeekId,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("schedule references unknown week {0}")]
    UnknownWeek(WeekId),

    #[error("{date} is outside week {week}")]
    DateOutsideWeek { week: WeekId, date: NaiveDate },

    #[error("{date}: lesson #{number} has an empty subject")]
    EmptySubject { date: NaiveDate, number: u32 },

    #[error("{date}: lesson '{subject}' has number 0 (numbers start at 1)")]
    ZeroNumber { date: NaiveDate, subject: String },

    #[error("{date}: lesson number {number} is used more than once")]
    DuplicateNumber { date: NaiveDate, number: u32 },

    #[error("{date}: lesson #{number} ends before it starts")]
    InvertedTime { date: NaiveDate, number: u32 },

    #[error("group {0} is defined more than once")]
    DuplicateGroup(String),

    #[error("schedule references unknown group {0}")]
    UnknownGroup(String),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
