//! Settings loaded from an optional TOML file.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable naming an alternative settings file.
pub const CONFIG_ENV: &str = "PARLOR_GAMES_CONFIG";

/// Settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parlor_games.toml";

/// Front-end settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames drawn per second.
    frame_rate: u32,

    /// How long the fading mark stays visible or hidden while blinking.
    blink_interval_ms: u64,

    /// Directory for log files.
    log_dir: PathBuf,

    /// Disk count preselected on the Hanoi start screen.
    initial_disk_count: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            blink_interval_ms: 400,
            log_dir: PathBuf::from("."),
            initial_disk_count: 4,
        }
    }
}

impl Settings {
    /// Loads settings from `$PARLOR_GAMES_CONFIG` or `parlor_games.toml`.
    ///
    /// A missing file yields the defaults.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            Self::from_file(&path)
        } else {
            debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        if settings.frame_rate == 0 {
            return Err(ConfigError::new("frame_rate must be at least 1"));
        }
        Ok(settings)
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Blink half-period of the fading mark.
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms.max(1))
    }

    /// Log file for the named game.
    pub fn log_file(&self, game: &str) -> PathBuf {
        self.log_dir.join(format!("{game}.log"))
    }
}
