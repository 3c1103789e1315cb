use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::scene::{PrefabTemplate, TemplateLibrary};

use super::{ConfigError, ConfigResult};

const SETTINGS_FILE: &str = "placements.toml";

/// On-disk settings: the ordered template list the placer is configured
/// with. Read once at startup; the built [`TemplateLibrary`] is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacerSettings {
    #[serde(default)]
    pub templates: Vec<PrefabTemplate>,
}

impl PlacerSettings {
    pub fn new(templates: Vec<PrefabTemplate>) -> Self {
        Self { templates }
    }

    /// Build the immutable lookup library from the configured list.
    pub fn library(&self) -> TemplateLibrary {
        TemplateLibrary::new(self.templates.clone())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "arplacer", "ar-placer")
}

/// Default settings file location, when the platform provides one.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|proj| proj.config_dir().join(SETTINGS_FILE))
}

/// Write settings to an explicit path, creating parent directories.
pub fn save_settings_to(settings: &PlacerSettings, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize {
        reason: e.to_string(),
    })?;
    fs::write(path, toml)?;
    Ok(())
}

/// Read settings from an explicit path.
pub fn load_settings_from(path: &Path) -> ConfigResult<PlacerSettings> {
    let data = fs::read_to_string(path)?;
    toml::from_str(&data).map_err(|e| ConfigError::Parse {
        reason: e.to_string(),
    })
}

/// Write settings to the default location, if one exists.
pub fn save_settings(settings: &PlacerSettings) -> ConfigResult<()> {
    if let Some(path) = settings_path() {
        save_settings_to(settings, &path)?;
    }
    Ok(())
}

/// Read settings from the default location; `None` when the file is missing
/// or unreadable.
pub fn load_settings() -> Option<PlacerSettings> {
    let path = settings_path()?;
    load_settings_from(&path).ok()
}
