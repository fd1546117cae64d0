//! Configuration handling for the TUI

use crate::state::DEFAULT_MIN_PASSWORD_LENGTH;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the sign-in form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignInConfig {
    /// Render the password in clear text instead of masked
    pub show_password: Option<bool>,
    /// Minimum password length (defaults to 8, can only be raised)
    pub min_password_length: Option<usize>,
    /// Email to prefill on start
    pub prefill_email: Option<String>,
}

impl SignInConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signin", "signin-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "signin", "signin-tui").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration, writing a default file on first run.
    /// A failed first-run write is logged and does not stop startup.
    pub fn load_or_init() -> Result<Self> {
        let config = Self::load()?;
        if let Some(path) = Self::config_path().filter(|path| !path.exists()) {
            config.init_at(&path);
        }
        Ok(config)
    }

    fn init_at(&self, path: &Path) {
        if let Err(err) = self.save_to(path) {
            tracing::warn!(path = %path.display(), "Could not write default config: {err:#}");
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: SignInConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Effective minimum password length, never below the default
    pub fn min_password_length(&self) -> usize {
        self.min_password_length
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH)
            .max(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}
