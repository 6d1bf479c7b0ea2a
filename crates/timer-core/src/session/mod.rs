//! Session management module
//!
//! This module provides the timer lifecycle: starting and stopping sessions,
//! attaching notes, and aggregating completed sessions into summaries.
//!
//! # Overview
//!
//! A session is one timed interval on a milestone within a project. The
//! running timer is never stored separately; it is the one session without
//! an end time.
//!
//! # Example
//!
//! ```ignore
//! use timer_core::session::SessionManager;
//! use timer_storage::JsonFileStore;
//!
//! let manager = SessionManager::new(JsonFileStore::new("timer_data.json"));
//!
//! manager.start("Stellar Wallet", "Testnet wallet MVP")?;
//! let stopped = manager.stop(Some("went fine"))?;
//! println!("{}", stopped.duration);
//!
//! let summary = manager.summary(Some("Stellar Wallet"))?;
//! ```

mod manager;
mod model;
mod persistence;
mod summary;

// Re-export public API
pub use manager::SessionManager;
pub use model::{Session, TimedSession, TimerStatus};
pub use persistence::{validate_sessions, SessionStore};
pub use summary::{ProjectSummary, Summary, SummaryRow};

// Re-export memory storage for testing
#[cfg(test)]
pub use persistence::memory::MemoryStore;
