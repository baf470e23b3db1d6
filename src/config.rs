use crate::error::{Result, SearchError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Environment variable that points the tool at a GitHub Enterprise API.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Transport settings. Every field is optional in the config file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    pub api_base: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("reposcout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ToolConfig {
    /// Loads `~/.config/reposcout/config.json` if present, then applies the
    /// `GITHUB_API_URL` override.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => ToolConfig::default(),
        };
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults, and so does
    /// an unreadable or malformed one, with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return ToolConfig::default();
        }
        let parsed: std::result::Result<ToolConfig, String> = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| serde_json::from_str(&contents).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unusable config file");
                ToolConfig::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("reposcout")
                .join("config.json"),
        )
    }

    pub fn apply_api_url_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(SearchError::Validation(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.api_base().is_empty() {
            return Err(SearchError::Validation("api_base must not be empty".into()));
        }
        Ok(())
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
