//! Configuration file handling.
//!
//! The config file lives at `~/.config/ticktick-tui/config.toml`.
//! Set `TICKTICK_CONFIG` to use another file.

use std::env;
use std::fs;
use std::path::PathBuf;

use chrono_tz::Tz;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use ticktick_api_rs::client::BASE_URL;
use ticktick_cache_rs::SortMode;

use crate::commands::{CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "TICKTICK_CONFIG";

/// Zone used to interpret dates when the config names none.
pub const DEFAULT_TIME_ZONE: &str = "America/Santiago";

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# ticktick-tui configuration

# Config schema version (do not modify)
version = 1

# Zone used to interpret quick-add dates and tasks without a zone
# time_zone = "America/Santiago"

# API endpoint
# base_url = "https://api.ticktick.com/api/v2"

[ui]
# sort = "default"   # default | date | title
# reverse = false
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// IANA zone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Initial view settings.
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            time_zone: None,
            base_url: None,
            ui: UiConfig::default(),
        }
    }
}

/// Initial sort settings of the task column.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sort mode.
    #[serde(default)]
    pub sort: SortMode,

    /// Reverse the sorted list.
    #[serde(default)]
    pub reverse: bool,
}

impl Config {
    /// Returns the configured zone name, or the default.
    pub fn time_zone_name(&self) -> &str {
        self.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE)
    }

    /// Parses the configured zone.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Config` if the name is not a known IANA zone.
    pub fn zone(&self) -> Result<Tz> {
        let name = self.time_zone_name();
        name.parse::<Tz>()
            .map_err(|_| CommandError::Config(format!("Unknown time zone '{name}'")))
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(BASE_URL)
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/ticktick-tui/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("ticktick-tui"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("ticktick-tui"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    // Fail early on a bad zone rather than on the first quick-add.
    config.zone()?;

    migrate_config(config)
}

/// Writes the commented default config if no config file exists yet.
///
/// Returns the path of the config file.
pub fn ensure_config_file() -> Result<PathBuf> {
    let path = get_config_path()?;
    if path.exists() {
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }
    fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;
    Ok(path)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    config.version = CONFIG_VERSION;
    Ok(config)
}
