//! Error types shared by the store operations.

use thiserror::Error;

/// Validation failures raised while turning form input into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more required fields were left empty. Holds the field keys.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("phone number is required")]
    MissingPhone,
    #[error("invalid age: {0}")]
    InvalidAge(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("start time must be before end time")]
    TimeOrder,
    #[error("invalid session capacity: {0}")]
    InvalidCapacity(String),
    #[error("invalid day of week: {0}")]
    InvalidDay(u8),
}

/// Failures of session roster and waiting list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("session {0} not found")]
    SessionNotFound(String),
    #[error("student {0} not found")]
    StudentNotFound(String),
    #[error("waiting list entry {0} not found")]
    EntryNotFound(String),
    #[error("session is full ({max} students)")]
    SessionFull { max: u32 },
    #[error("student level does not match the session level")]
    LevelMismatch,
    #[error("student is already enrolled in this session")]
    AlreadyEnrolled,
    #[error("student is not enrolled in this session")]
    NotEnrolled,
}

/// Failures saving an attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("no attendance has been marked")]
    NothingMarked,
    #[error("student {0} is not on this roster")]
    NotOnRoster(String),
}

/// Failures writing to a key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures loading `club.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),
}
