use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at specified path: {0}")]
    NotFound(String),
    #[error("Failed to read config file {0}: {1}")]
    Read(String, std::io::Error),
    #[error("Invalid config file {0}: {1}")]
    Parse(String, serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whether the Zotero panel and its endpoints are available
    #[serde(default = "default_zotero_enabled")]
    pub zotero_enabled: bool,
    /// No timeout unless set; a hung request keeps its spinner up
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_zotero_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            zotero_enabled: default_zotero_enabled(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_yaml(source: &str, contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse(source.to_string(), e))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(display.clone(), e))?;
        Self::from_yaml(&display, &contents)
    }

    /// Load from the resolved config path, or defaults when there is none
    pub fn load(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match find_config_path(cli_path)? {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Determine the config file path with fallback logic
///
/// 1. `--config <path>` (must exist)
/// 2. `<config_dir>/docqa/config.yaml`
/// 3. `./config.yaml`
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        return Err(ConfigError::NotFound(path.to_string()));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docqa").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("test", "{}").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert!(config.zotero_enabled);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "base_url: http://papers.local:8080\nzotero_enabled: false\nrequest_timeout_secs: 30\n";
        let config = Config::from_yaml("test", yaml).unwrap();
        assert_eq!(config.base_url, "http://papers.local:8080");
        assert!(!config.zotero_enabled);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("bad.yaml", "zotero_enabled: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref source, _) if source == "bad.yaml"));
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        let err = find_config_path(Some("/nonexistent/docqa.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
