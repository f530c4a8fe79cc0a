//! Application settings persistence
//!
//! Handles saving and loading user preferences. The indicator exposes a
//! single visual attribute, its stroke color; everything else about the
//! drawing is fixed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Stroke color of the indicator as a `#rrggbb` hex string.
    /// Absent or unparsable values fall back to the default accent.
    #[serde(default)]
    pub color: Option<String>,
    /// Dark or light window theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: None,
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Default settings file location
    fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "progress-square", "ProgressSquare")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, falling back to defaults
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("progress-square-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn round_trips_through_a_file() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            color: Some("#ff8800".to_string()),
            dark_mode: false,
        };
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.color.as_deref(), Some("#ff8800"));
        assert!(!loaded.dark_mode);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "{}").unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.color, None);
        assert!(loaded.dark_mode);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Settings::load_from_file(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
