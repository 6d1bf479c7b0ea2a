//! Session data models

use crate::duration::format_seconds;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One timed interval of work on a milestone within a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Project label
    pub project: String,
    /// Milestone label
    pub milestone: String,
    /// When the timer was started
    pub start_time: DateTime<Utc>,
    /// When the timer was stopped; `None` while running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Session {
    /// Create a running session
    pub fn start(
        project: impl Into<String>,
        milestone: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            project: project.into(),
            milestone: milestone.into(),
            start_time,
            end_time: None,
            note: None,
        }
    }

    /// Create a completed session
    pub fn completed(
        project: impl Into<String>,
        milestone: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            end_time: Some(end_time),
            ..Self::start(project, milestone, start_time)
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether the timer is still running
    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }

    /// `end_time - start_time` for completed sessions
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Time since start as of `now`, or the recorded duration once stopped
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.duration().unwrap_or_else(|| now - self.start_time)
    }

    /// Check the per-session invariants
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.project.trim().is_empty() {
            return Err("project must not be empty".to_string());
        }
        if self.milestone.trim().is_empty() {
            return Err("milestone must not be empty".to_string());
        }
        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(format!(
                    "end_time {} is before start_time {}",
                    end.to_rfc3339(),
                    self.start_time.to_rfc3339()
                ));
            }
        }
        Ok(())
    }
}

/// A session together with its measured duration, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedSession {
    pub session: Session,
    /// Whole seconds
    pub duration_secs: i64,
    /// Formatted as `1h 12m 30s`
    pub duration: String,
}

impl TimedSession {
    pub fn new(session: Session, elapsed: Duration) -> Self {
        let duration_secs = elapsed.num_seconds().max(0);
        Self {
            session,
            duration_secs,
            duration: format_seconds(duration_secs),
        }
    }
}

/// Outcome of a status query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TimerStatus {
    /// Nothing is running
    Idle,
    /// A session is running; duration is the time elapsed so far
    Running(TimedSession),
}
