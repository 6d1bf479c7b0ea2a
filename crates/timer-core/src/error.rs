//! Error types for milestone-timer

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for milestone-timer
#[derive(Debug, Error)]
pub enum TimerError {
    /// A session is already running; carries what it is so callers can show it
    #[error("A timer is already running: {project} / {milestone}")]
    TimerAlreadyRunning {
        project: String,
        milestone: String,
        started_at: DateTime<Utc>,
    },

    /// Stop attempted with nothing running
    #[error("No timer is currently running")]
    NoTimerRunning,

    /// Note attempted before any session was completed
    #[error("No completed session to attach a note to")]
    NoCompletedSession,

    /// Data file exists but does not match the session schema
    #[error("Corrupt data file {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    /// IO error while reading or writing the data file
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TimerError {
    /// Build a corrupt-data error for the given file
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TimerError::CorruptData {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for milestone-timer
pub type Result<T> = std::result::Result<T, TimerError>;
