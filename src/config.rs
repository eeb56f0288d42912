//! # Configuration Module
//!
//! Experiment settings: who the listener is (preferred genres and artists),
//! how long the playlist may run, and which catalog prefixes to measure.
//!
//! The selectors themselves never invent defaults. Everything here is caller
//! policy, resolved in this order:
//!
//! 1. Command-line overrides
//! 2. An explicit `--config` file
//! 3. The platform config file, if present
//! 4. [`ExperimentConfig::default`]
//!
//! ## Config Location
//!
//! - Linux: `~/.config/playlist-bench/config.json`
//! - macOS: `~/Library/Application Support/playlist-bench/config.json`
//! - Windows: `%APPDATA%\playlist-bench\config.json`

use crate::song::Preferences;
use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform-appropriate config file path.
///
/// Creates the `playlist-bench` directory if needed; the file itself may not
/// exist.
///
/// # Errors
///
/// Fails when the system config directory cannot be determined or the
/// subdirectory cannot be created.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Please ensure your platform supports standard config directories."
        )
    })?;

    let app_dir = config_dir.join("playlist-bench");
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create config directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir.join("config.json"))
}

/// Settings for one experiment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub preferred_genres: Vec<String>,
    pub preferred_artists: Vec<String>,
    /// Playlist budget in minutes.
    pub target_duration: f64,
    /// Catalog prefix lengths to run, in order.
    pub dataset_sizes: Vec<usize>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            preferred_genres: vec!["Rock".to_string(), "Pop".to_string()],
            preferred_artists: vec![
                "Queen".to_string(),
                "Ed Sheeran".to_string(),
                "Michael Jackson".to_string(),
            ],
            target_duration: 30.0,
            dataset_sizes: vec![10, 20, 30],
        }
    }
}

/// Values given on the command line. `None`/empty leaves the field alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub preferred_genres: Vec<String>,
    pub preferred_artists: Vec<String>,
    pub target_duration: Option<f64>,
    pub dataset_sizes: Vec<usize>,
}

impl ExperimentConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match get_config_path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                debug!("No config directory, using defaults: {e}");
                Ok(Self::default())
            }
        }
    }

    /// Reads a JSON config file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes this configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("Failed to write config file {}", path.display()))
    }

    #[must_use]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if !overrides.preferred_genres.is_empty() {
            self.preferred_genres = overrides.preferred_genres;
        }
        if !overrides.preferred_artists.is_empty() {
            self.preferred_artists = overrides.preferred_artists;
        }
        if let Some(target) = overrides.target_duration {
            self.target_duration = target;
        }
        if !overrides.dataset_sizes.is_empty() {
            self.dataset_sizes = overrides.dataset_sizes;
        }
        self
    }

    /// Rejects settings no experiment can run with.
    ///
    /// A budget of zero or less is allowed: every selector answers it with
    /// an empty playlist.
    pub fn validate(&self) -> Result<()> {
        if !self.target_duration.is_finite() {
            bail!("Target duration must be a finite number of minutes, got {}", self.target_duration);
        }
        if self.dataset_sizes.is_empty() {
            bail!("At least one dataset size is required");
        }
        Ok(())
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences::new(self.preferred_genres.iter().cloned(), self.preferred_artists.iter().cloned())
    }
}
