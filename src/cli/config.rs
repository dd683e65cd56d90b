use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SETTINGS_FILENAME: &str = ".azup.toml";

/// Persisted local settings: the identity of the app this directory deploys
/// to. Written by `azup init`, read once per invocation, removed by
/// `azup reset` (or after a successful `azup down`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub resource_group_name: String,
    pub insights_name: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        load_settings_from_path(SETTINGS_FILENAME)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(SETTINGS_FILENAME)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Remove the settings file. Returns false when there was nothing to
    /// remove.
    pub fn clear() -> Result<bool> {
        clear_at(SETTINGS_FILENAME)
    }
}

pub fn load_settings_from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn clear_at(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(true)
}
