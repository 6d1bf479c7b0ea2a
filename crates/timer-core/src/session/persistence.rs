//! Session storage trait and abstractions

use super::model::Session;
use crate::error::Result;

/// Durable home of the session sequence.
///
/// Implementations hand back sessions in insertion order and replace the
/// whole sequence on save.
pub trait SessionStore: Send + Sync {
    /// Load all sessions; an empty sequence when nothing was saved yet
    fn load(&self) -> Result<Vec<Session>>;

    /// Replace the persisted sequence
    fn save(&self, sessions: &[Session]) -> Result<()>;
}

/// Check the sequence-level invariants of loaded data
pub fn validate_sessions(sessions: &[Session]) -> std::result::Result<(), String> {
    for (index, session) in sessions.iter().enumerate() {
        session
            .validate()
            .map_err(|reason| format!("session #{}: {}", index, reason))?;
    }

    let running = sessions.iter().filter(|s| s.is_running()).count();
    if running > 1 {
        return Err(format!("{} sessions are running, at most one allowed", running));
    }

    Ok(())
}
