//! Configuration Management
//!
//! Handles the read-only configuration file for tdisco.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backend base URL used when neither the CLI nor the config file set one
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Discovery API base URL
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tdisco").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a file; missing or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config file {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Get effective API URL (CLI > config > default)
    pub fn effective_api_url(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.api_url.clone().filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_api_url_precedence() {
        let config = Config {
            api_url: Some("http://discovery.internal/api".to_string()),
        };
        assert_eq!(
            config.effective_api_url(Some("http://cli:8080/api")),
            "http://cli:8080/api"
        );
        assert_eq!(config.effective_api_url(None), "http://discovery.internal/api");
        assert_eq!(Config::default().effective_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_empty_config_url_falls_back() {
        let config = Config {
            api_url: Some(String::new()),
        };
        assert_eq!(config.effective_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_load_from_missing_file() {
        let config = Config::load_from(Path::new("/nonexistent/tdisco/config.json"));
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tdisco-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"api_url": "http://10.0.0.5:5000/api"}"#).unwrap();
        let config = Config::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://10.0.0.5:5000/api"));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let path =
            std::env::temp_dir().join(format!("tdisco-config-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let config = Config::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(config.api_url.is_none());
    }
}
