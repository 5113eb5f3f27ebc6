// Settings persistence
// Loads and saves AppSettings as TOML under the platform config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppSettings;

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Resolve the settings file under the platform config directory.
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "slot-finder")
            .ok_or_else(|| anyhow!("Could not determine a configuration directory"))?;
        Ok(Self {
            path: dirs.config_dir().join("settings.toml"),
        })
    }

    /// Use an explicit file path (tests, portable installs).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields defaults rather than an error.
    pub fn load(&self) -> Result<AppSettings> {
        if !self.path.exists() {
            return Ok(AppSettings::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        toml::from_str(&text)
            .with_context(|| format!("Settings file {:?} is not valid TOML", self.path))
    }

    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let text =
            toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))
    }
}
