//! Log file setup.
//!
//! The TUI owns the terminal, so log output goes to `ticktick-tui.log` in the
//! platform cache directory. `TICKTICK_LOG` takes an `EnvFilter` directive;
//! without it the level is `warn`, or `debug` with `--verbose`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TICKTICK_LOG";

const LOG_FILENAME: &str = "ticktick-tui.log";

/// Returns the filter directive used when `TICKTICK_LOG` is unset.
fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Returns the log file path, creating its directory.
pub fn log_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "ticktick", "ticktick-tui")?;
    let dir = dirs.cache_dir();
    fs::create_dir_all(dir).ok()?;
    Some(dir.join(LOG_FILENAME))
}

fn open_log(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Installs the global subscriber.
///
/// Logging is best effort: if the file cannot be opened, or a subscriber is
/// already set, the program runs without one.
pub fn init(verbose: bool) -> Option<PathBuf> {
    let path = log_path()?;
    let file = open_log(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    Some(path)
}
