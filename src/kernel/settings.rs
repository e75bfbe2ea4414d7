//! 设置：从 JSON 文件加载，缺省字段使用默认值

use serde::{Deserialize, Serialize};
use std::{fmt, io, path::Path};

use crate::kernel::selection::DEFAULT_PLACEHOLDER_PREFIX;
use crate::models::FilterRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub filter_rule: FilterRule,
    /// Drop buffers and expand flags of a deleted subtree right away.
    pub prune_content_on_delete: bool,
    /// Prefix joined with the file name to form an image's asset path.
    pub asset_root: String,
    pub placeholder_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filter_rule: FilterRule::default(),
            prune_content_on_delete: true,
            asset_root: "/".to_string(),
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "parse settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

pub fn parse_settings(data: &str) -> Result<Settings, SettingsError> {
    serde_json::from_str(data).map_err(SettingsError::Parse)
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
    parse_settings(&data)
}

/// Missing file means defaults; a broken one is logged and also means defaults.
pub fn load_settings_or_default(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "load settings failed");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/settings.rs"]
mod tests;
