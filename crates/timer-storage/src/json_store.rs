//! JSON file storage for sessions

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use timer_core::error::{Result, TimerError};
use timer_core::session::{validate_sessions, Session, SessionStore};
use tracing::{debug, warn};

/// Default data file name
pub const DATA_FILE_NAME: &str = "timer_data.json";

/// Session sequence stored as a single JSON array
pub struct JsonFileStore {
    /// Data file path
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given data file; nothing is touched on disk yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data file path (falls back to ~/.milestone-timer)
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "milestone-timer", "milestone-timer")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".milestone-timer")
            })
            .join(DATA_FILE_NAME)
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DATA_FILE_NAME.to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Ensure the parent directory exists
    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    TimerError::Storage(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create data directory {}: {}", parent.display(), e),
                    ))
                })?;
                debug!("Created data directory: {:?}", parent);
            }
        }
        Ok(())
    }

    /// Write sessions atomically (write to temp, then rename)
    fn atomic_write(&self, sessions: &[Session]) -> Result<()> {
        self.ensure_parent()?;

        let temp_path = self.temp_path();

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            TimerError::Storage(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        let written = serde_json::to_writer_pretty(&mut writer, sessions)
            .map_err(TimerError::from)
            .and_then(|_| writer.flush().map_err(TimerError::from))
            .and_then(|_| writer.get_ref().sync_all().map_err(TimerError::from));
        drop(writer);

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            TimerError::Storage(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved {} sessions to {:?}", sessions.len(), self.path);
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Session>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No data file at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(TimerError::Storage(e)),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            warn!("Data file {:?} is empty, treating as no sessions", self.path);
            return Ok(Vec::new());
        }

        // Parse from bytes so undecodable text is reported as corrupt data
        let sessions: Vec<Session> = serde_json::from_slice(&content)
            .map_err(|e| TimerError::corrupt(self.path.clone(), e.to_string()))?;
        validate_sessions(&sessions)
            .map_err(|reason| TimerError::corrupt(self.path.clone(), reason))?;

        debug!("Loaded {} sessions from {:?}", sessions.len(), self.path);
        Ok(sessions)
    }

    fn save(&self, sessions: &[Session]) -> Result<()> {
        self.atomic_write(sessions)
    }
}
