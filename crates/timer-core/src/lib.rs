//! timer-core - Core library for milestone-timer
//!
//! This crate provides the core logic for the milestone timer, including
//! the session lifecycle, summary aggregation, duration formatting and
//! configuration.

pub mod clock;
pub mod config;
pub mod duration;
pub mod error;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, TimerError};
