//! Tracing setup.
//!
//! The terminal owns stdout while a game runs, so logs go to a file.

use crate::settings::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber for the named game.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns the
/// path of the log file.
pub fn init(game: &str, settings: &Settings) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(settings.log_dir())
        .with_context(|| format!("Failed to create log dir {}", settings.log_dir().display()))?;
    let path = settings.log_file(game);
    let log_file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(path)
}
