//! Per-project aggregation of completed sessions

use super::model::Session;
use crate::duration::format_seconds;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

/// One completed session as a summary table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub milestone: String,
    pub duration_secs: i64,
    /// Formatted as `1h 12m 30s`
    pub duration: String,
    pub started_at: DateTime<Utc>,
    /// Start date (UTC)
    pub date: NaiveDate,
    /// Empty when the session has no note
    pub note: String,
}

/// All completed sessions of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project: String,
    pub rows: Vec<SummaryRow>,
    pub total_secs: i64,
    pub total: String,
}

/// Grouped report over completed sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Projects in order of first appearance
    pub groups: Vec<ProjectSummary>,
    pub total_secs: i64,
    pub total: String,
}

impl Summary {
    /// Aggregate completed sessions, optionally restricted to one project.
    ///
    /// Running sessions are skipped. The project filter is an exact,
    /// case-sensitive match.
    pub fn build(sessions: &[Session], project: Option<&str>) -> Self {
        // (project, rows, exact total)
        let mut groups: Vec<(String, Vec<SummaryRow>, Duration)> = Vec::new();

        for session in sessions {
            let Some(duration) = session.duration() else {
                continue;
            };
            if project.is_some_and(|p| p != session.project) {
                continue;
            }

            let row = SummaryRow {
                milestone: session.milestone.clone(),
                duration_secs: duration.num_seconds(),
                duration: format_seconds(duration.num_seconds()),
                started_at: session.start_time,
                date: session.start_time.date_naive(),
                note: session.note.clone().unwrap_or_default(),
            };

            match groups.iter_mut().find(|(name, _, _)| *name == session.project) {
                Some((_, rows, total)) => {
                    rows.push(row);
                    *total = *total + duration;
                }
                None => groups.push((session.project.clone(), vec![row], duration)),
            }
        }

        let groups: Vec<ProjectSummary> = groups
            .into_iter()
            .map(|(project, rows, total)| ProjectSummary {
                project,
                rows,
                total_secs: total.num_seconds(),
                total: format_seconds(total.num_seconds()),
            })
            .collect();

        let total_secs = groups.iter().map(|g| g.total_secs).sum();
        Self {
            groups,
            total_secs,
            total: format_seconds(total_secs),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up one project's group
    pub fn project(&self, name: &str) -> Option<&ProjectSummary> {
        self.groups.iter().find(|g| g.project == name)
    }
}
