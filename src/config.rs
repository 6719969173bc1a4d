use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::route::Route;

/// User preferences for the dashboard; every field has a default
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Page shown when the dashboard opens
    pub start_page: Route,
    /// Where the full PDF report can be downloaded from
    pub report_path: String,
    /// Rows scrolled before the "scroll to top" affordance appears
    pub scroll_top_threshold: u16,
    /// Rows from the end within which "scroll to bottom" is hidden
    pub scroll_bottom_threshold: u16,
    /// Write a log file while the dashboard is running
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_page: Route::Overview,
            report_path: "reports/aa-supporter-survey-2024.pdf".to_string(),
            scroll_top_threshold: 15,
            scroll_bottom_threshold: 5,
            log_to_file: true,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "supporter-survey", "survey")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config directory, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let config_data = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", config_path.display(), e)))?;

        let config: Config = serde_json::from_str(&config_data)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", config_path.display(), e)))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
        }

        let config_data = serde_json::to_string_pretty(self)?;

        fs::write(config_path, config_data)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurveyError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            start_page: Route::Satisfaction,
            scroll_top_threshold: 3,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "start_page": "about-you" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_page, Route::AboutYou);
        assert_eq!(config.scroll_bottom_threshold, 5);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, SurveyError::Config(ConfigError::LoadFailed(_))));
    }
}
