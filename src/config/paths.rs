//! Path management for credline
//!
//! ## Path Resolution Order
//!
//! 1. `CREDLINE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/credline` or `~/.config/credline`
//! 3. Windows: `%APPDATA%\credline`

use std::path::PathBuf;

use crate::error::CredlineError;

/// Manages all paths used by credline
#[derive(Debug, Clone)]
pub struct CredlinePaths {
    base_dir: PathBuf,
}

impl CredlinePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, CredlineError> {
        let base_dir = if let Ok(custom) = std::env::var("CREDLINE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("credline.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CredlineError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CredlineError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CredlineError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                CredlineError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("credline"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CredlineError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CredlineError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("credline"))
}
