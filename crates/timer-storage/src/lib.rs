//! timer-storage - Storage library for milestone-timer
//!
//! This crate provides the JSON file store for the session sequence.

mod json_store;

pub use json_store::{JsonFileStore, DATA_FILE_NAME};
