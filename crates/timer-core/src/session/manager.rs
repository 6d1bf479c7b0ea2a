//! Session manager: the timer lifecycle over a session store

use super::model::{Session, TimedSession, TimerStatus};
use super::persistence::SessionStore;
use super::summary::Summary;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TimerError};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs timer operations as load → act → save transactions.
///
/// Nothing is written unless the operation succeeds, so a failed call
/// leaves the stored sequence untouched.
pub struct SessionManager {
    /// Storage backend
    store: Arc<dyn SessionStore>,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl SessionManager {
    /// Create a manager over `store` using the system clock
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self::with_clock(Arc::new(store), Arc::new(SystemClock))
    }

    /// Create a manager with a shared store and an explicit clock
    pub fn with_clock(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Start timing `milestone` under `project`
    pub fn start(&self, project: &str, milestone: &str) -> Result<Session> {
        let project = project.trim();
        let milestone = milestone.trim();
        if project.is_empty() {
            return Err(TimerError::Validation("project must not be empty".to_string()));
        }
        if milestone.is_empty() {
            return Err(TimerError::Validation("milestone must not be empty".to_string()));
        }

        let mut sessions = self.store.load()?;

        if let Some(active) = running(&sessions) {
            return Err(TimerError::TimerAlreadyRunning {
                project: active.project.clone(),
                milestone: active.milestone.clone(),
                started_at: active.start_time,
            });
        }

        let session = Session::start(project, milestone, self.clock.now());
        sessions.push(session.clone());
        self.store.save(&sessions)?;

        info!("Started timer for {} / {}", project, milestone);
        Ok(session)
    }

    /// Stop the running timer, optionally recording a note
    pub fn stop(&self, note: Option<&str>) -> Result<TimedSession> {
        let mut sessions = self.store.load()?;
        let now = self.clock.now();

        let session = sessions
            .iter_mut()
            .find(|s| s.is_running())
            .ok_or(TimerError::NoTimerRunning)?;

        // A clock that went backwards must not yield a negative duration
        session.end_time = Some(now.max(session.start_time));
        if let Some(note) = note.filter(|n| !n.is_empty()) {
            session.note = Some(note.to_string());
        }

        let stopped = session.clone();
        self.store.save(&sessions)?;

        let elapsed = stopped.elapsed(now);
        info!(
            "Stopped timer for {} / {} after {}s",
            stopped.project,
            stopped.milestone,
            elapsed.num_seconds()
        );
        Ok(TimedSession::new(stopped, elapsed))
    }

    /// Report the running timer and its elapsed time, if any
    pub fn status(&self) -> Result<TimerStatus> {
        let sessions = self.store.load()?;

        Ok(match running(&sessions) {
            Some(active) => {
                let elapsed = active.elapsed(self.clock.now());
                TimerStatus::Running(TimedSession::new(active.clone(), elapsed))
            }
            None => TimerStatus::Idle,
        })
    }

    /// Set the note of the most recently completed session
    pub fn note(&self, text: &str) -> Result<Session> {
        let mut sessions = self.store.load()?;

        let index = last_completed(&sessions).ok_or(TimerError::NoCompletedSession)?;
        sessions[index].note = Some(text.to_string());

        let updated = sessions[index].clone();
        self.store.save(&sessions)?;

        debug!("Updated note on {} / {}", updated.project, updated.milestone);
        Ok(updated)
    }

    /// Build the grouped report of completed sessions
    pub fn summary(&self, project: Option<&str>) -> Result<Summary> {
        let sessions = self.store.load()?;
        Ok(Summary::build(&sessions, project))
    }
}

/// The unique session without an end time
fn running(sessions: &[Session]) -> Option<&Session> {
    sessions.iter().find(|s| s.is_running())
}

/// Index of the completed session with the latest end time; later
/// position wins ties
fn last_completed(sessions: &[Session]) -> Option<usize> {
    sessions
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.end_time.map(|end| (end, i)))
        .max()
        .map(|(_, i)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::session::persistence::memory::MemoryStore;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn create_manager(
        sessions: Vec<Session>,
    ) -> (SessionManager, Arc<MemoryStore>, Arc<FixedClock>) {
        let store = Arc::new(MemoryStore::with_sessions(sessions));
        let clock = Arc::new(FixedClock::new(t0()));
        let manager = SessionManager::with_clock(store.clone(), clock.clone());
        (manager, store, clock)
    }

    fn running_count(sessions: &[Session]) -> usize {
        sessions.iter().filter(|s| s.is_running()).count()
    }

    #[test]
    fn test_start_appends_running_session() {
        let (manager, store, _clock) = create_manager(vec![]);

        let session = manager.start("Stellar Wallet", "Testnet wallet MVP").unwrap();
        assert_eq!(session.project, "Stellar Wallet");
        assert_eq!(session.milestone, "Testnet wallet MVP");
        assert_eq!(session.start_time, t0());
        assert!(session.is_running());
        assert!(session.note.is_none());

        assert_eq!(store.snapshot(), vec![session]);
    }

    #[test]
    fn test_start_trims_and_rejects_empty_labels() {
        let (manager, store, _clock) = create_manager(vec![]);

        assert!(matches!(
            manager.start("  ", "m"),
            Err(TimerError::Validation(_))
        ));
        assert!(matches!(
            manager.start("p", ""),
            Err(TimerError::Validation(_))
        ));
        assert_eq!(store.save_count(), 0);

        let session = manager.start(" p ", " m ").unwrap();
        assert_eq!(session.project, "p");
        assert_eq!(session.milestone, "m");
    }

    #[test]
    fn test_start_twice_fails() {
        let (manager, store, clock) = create_manager(vec![]);

        manager.start("Stellar Wallet", "Testnet wallet MVP").unwrap();
        let before = store.snapshot();
        clock.advance_secs(30);

        let err = manager.start("Other", "Thing").unwrap_err();
        match err {
            TimerError::TimerAlreadyRunning {
                project,
                milestone,
                started_at,
            } => {
                assert_eq!(project, "Stellar Wallet");
                assert_eq!(milestone, "Testnet wallet MVP");
                assert_eq!(started_at, t0());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_stop_formats_duration() {
        let (manager, store, clock) = create_manager(vec![]);

        manager.start("Stellar Wallet", "Testnet wallet MVP").unwrap();
        clock.advance_secs(4350);

        let stopped = manager.stop(None).unwrap();
        assert_eq!(stopped.duration, "1h 12m 30s");
        assert_eq!(stopped.duration_secs, 4350);
        assert_eq!(stopped.session.end_time, Some(t0() + Duration::seconds(4350)));
        assert!(stopped.session.note.is_none());

        let stored = store.snapshot();
        assert_eq!(running_count(&stored), 0);
        assert_eq!(stored[0], stopped.session);
    }

    #[test]
    fn test_stop_with_note() {
        let (manager, store, clock) = create_manager(vec![]);

        manager.start("p", "m").unwrap();
        clock.advance_secs(60);
        let stopped = manager.stop(Some("shipped")).unwrap();

        assert_eq!(stopped.session.note.as_deref(), Some("shipped"));
        assert_eq!(store.snapshot()[0].note.as_deref(), Some("shipped"));
    }

    #[test]
    fn test_stop_empty_note_is_absent() {
        let (manager, _store, _clock) = create_manager(vec![]);

        manager.start("p", "m").unwrap();
        let stopped = manager.stop(Some("")).unwrap();
        assert!(stopped.session.note.is_none());
    }

    #[test]
    fn test_stop_keeps_whitespace_note() {
        let (manager, store, _clock) = create_manager(vec![]);

        manager.start("p", "m").unwrap();
        let stopped = manager.stop(Some("   ")).unwrap();
        assert_eq!(stopped.session.note.as_deref(), Some("   "));
        assert_eq!(store.snapshot()[0].note.as_deref(), Some("   "));
    }

    #[test]
    fn test_stop_without_running_fails() {
        let done = Session::completed("p", "m", t0(), t0() + Duration::seconds(10));
        let (manager, store, _clock) = create_manager(vec![done.clone()]);

        assert!(matches!(manager.stop(None), Err(TimerError::NoTimerRunning)));
        assert_eq!(store.snapshot(), vec![done]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_stop_clamps_backwards_clock() {
        let (manager, _store, clock) = create_manager(vec![]);

        manager.start("p", "m").unwrap();
        clock.set(t0() - Duration::seconds(100));

        let stopped = manager.stop(None).unwrap();
        assert_eq!(stopped.session.end_time, Some(t0()));
        assert_eq!(stopped.duration_secs, 0);
    }

    #[test]
    fn test_status() {
        let (manager, store, clock) = create_manager(vec![]);

        assert_eq!(manager.status().unwrap(), TimerStatus::Idle);

        manager.start("p", "m").unwrap();
        clock.advance_secs(125);

        match manager.status().unwrap() {
            TimerStatus::Running(timed) => {
                assert_eq!(timed.session.milestone, "m");
                assert_eq!(timed.duration, "0h 02m 05s");
            }
            TimerStatus::Idle => panic!("expected a running timer"),
        }

        // Elapsed time is not persisted
        assert!(store.snapshot()[0].end_time.is_none());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_note_without_completed_session_fails() {
        let (manager, store, _clock) = create_manager(vec![]);
        assert!(matches!(
            manager.note("late note"),
            Err(TimerError::NoCompletedSession)
        ));

        manager.start("p", "m").unwrap();
        assert!(matches!(
            manager.note("late note"),
            Err(TimerError::NoCompletedSession)
        ));
        assert!(store.snapshot()[0].note.is_none());
    }

    #[test]
    fn test_note_targets_latest_completed() {
        let sessions = vec![
            Session::completed("p", "first", t0(), t0() + Duration::seconds(100)),
            Session::completed(
                "p",
                "second",
                t0() + Duration::seconds(200),
                t0() + Duration::seconds(300),
            ),
            Session::start("p", "running", t0() + Duration::seconds(400)),
        ];
        let (manager, store, _clock) = create_manager(sessions);

        let first = manager.note("x").unwrap();
        let second = manager.note("y").unwrap();
        assert_eq!(first.milestone, "second");
        assert_eq!(second.milestone, "second");

        let stored = store.snapshot();
        assert_eq!(stored[1].note.as_deref(), Some("y"));
        assert!(stored[0].note.is_none());
        assert!(stored[2].note.is_none());
    }

    #[test]
    fn test_note_uses_end_time_then_position() {
        let sessions = vec![
            // Latest end time even though it is not last in the sequence
            Session::completed("p", "long", t0(), t0() + Duration::seconds(900)),
            Session::completed(
                "p",
                "short",
                t0() + Duration::seconds(100),
                t0() + Duration::seconds(200),
            ),
        ];
        let (manager, _store, _clock) = create_manager(sessions);
        assert_eq!(manager.note("n").unwrap().milestone, "long");

        let tied = vec![
            Session::completed("p", "a", t0(), t0() + Duration::seconds(100)),
            Session::completed(
                "p",
                "b",
                t0() + Duration::seconds(50),
                t0() + Duration::seconds(100),
            ),
        ];
        let (manager, _store, _clock) = create_manager(tied);
        assert_eq!(manager.note("n").unwrap().milestone, "b");
    }

    #[test]
    fn test_summary_scenarios() {
        let (manager, _store, clock) = create_manager(vec![]);

        assert!(manager.summary(None).unwrap().is_empty());

        manager.start("Stellar Wallet", "Testnet wallet MVP").unwrap();
        clock.advance_secs(4350);
        manager.stop(None).unwrap();

        clock.advance_secs(600);
        manager.start("Stellar Wallet", "Key export").unwrap();
        clock.advance_secs(1330);
        manager.stop(Some("done")).unwrap();

        clock.advance_secs(60);
        manager.start("Stellar Wallet", "Running").unwrap();

        let summary = manager.summary(Some("Stellar Wallet")).unwrap();
        assert_eq!(summary.groups.len(), 1);
        assert_eq!(summary.groups[0].rows.len(), 2);
        assert_eq!(summary.groups[0].total, "1h 34m 40s");
    }

    #[test]
    fn test_single_active_invariant_holds() {
        let (manager, store, clock) = create_manager(vec![]);

        for i in 0..5 {
            let _ = manager.start("p", &format!("m{i}"));
            assert!(running_count(&store.snapshot()) <= 1);
            let _ = manager.start("p", "again");
            assert!(running_count(&store.snapshot()) <= 1);
            clock.advance_secs(10);
            manager.stop(None).unwrap();
            let _ = manager.stop(None);
            assert_eq!(running_count(&store.snapshot()), 0);
        }
        assert_eq!(store.snapshot().len(), 5);
    }
}
