//! Session cookie persistence.
//!
//! The cookie obtained at login is stored as plain text in `~/.ticktick_data`.
//! Set `TICKTICK_SESSION` to use another path.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Default session filename, relative to the home directory.
const SESSION_FILENAME: &str = ".ticktick_data";

/// Environment variable overriding the session file path.
pub const SESSION_ENV: &str = "TICKTICK_SESSION";

/// Errors that can occur while reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No home directory could be determined.
    #[error("unable to determine the home directory")]
    NoHomeDir,

    /// I/O error during file read.
    #[error("failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during file delete.
    #[error("failed to delete session file '{path}': {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Reads and writes the session cookie.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at the default location (or `$TICKTICK_SESSION`).
    pub fn new() -> SessionResult<Self> {
        if let Ok(path) = env::var(SESSION_ENV) {
            return Ok(Self::with_path(path));
        }
        let home = BaseDirs::new().ok_or(SessionError::NoHomeDir)?;
        Ok(Self::with_path(home.home_dir().join(SESSION_FILENAME)))
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cookie. A missing or blank file means "not logged in".
    pub fn load(&self) -> SessionResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let cookie = contents.trim();
                Ok((!cookie.is_empty()).then(|| cookie.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Saves the cookie, replacing any previous session.
    pub fn save(&self, cookie: &str) -> SessionResult<()> {
        fs::write(&self.path, cookie).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Removes the session file. Succeeds if there was none.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Delete {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
