//! Command implementations for the ticktick-tui binary.
//!
//! The binary does one of four things per run: log in, log out, quick-add a
//! task, or start the interactive browser.

pub mod login;
pub mod logout;
pub mod quick;
pub mod tui;

use ticktick_api_rs::session::SessionError;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Cache/sync error.
    #[error("sync error: {0}")]
    Sync(#[from] ticktick_cache_rs::SyncError),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] ticktick_api_rs::Error),

    /// Session file error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// No session cookie is stored.
    #[error("You are not logged in. Please run with --login to log in.")]
    NotLoggedIn,

    /// The server refused the task.
    #[error("Failed to add task: {0}")]
    Rejected(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            use_colors: !cli.no_color,
            verbose: cli.verbose,
        }
    }
}
