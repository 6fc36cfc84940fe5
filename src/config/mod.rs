use crate::core::normalize::stub_config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_URL: &str = "HASS_URL";
pub const ENV_TOKEN: &str = "HASS_TOKEN";

/// Top-level keys every config file is expected to carry.
const REQUIRED_KEYS: [&str; 4] = ["hass_url", "token", "poll_seconds", "card"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_url")]
    pub hass_url: String,
    /// Long-lived access token. `HASS_TOKEN` overrides it.
    #[serde(default)]
    pub token: String,
    /// How often the watch loop polls the host's state registry.
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,
    /// Raw card document, normalized at use.
    #[serde(default)]
    pub card: Value,
}

fn default_url() -> String {
    "http://homeassistant.local:8123".to_string()
}
fn default_poll_seconds() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hass_url: default_url(),
            token: String::new(),
            poll_seconds: default_poll_seconds(),
            card: stub_config(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rheatmap")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rheatmap")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rheatmap.conf")
    }

    /// Load configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist. Environment
    /// variables override the host settings.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {e}", path.display()))
            })?
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Config::default()
        };

        if let Ok(url) = env::var(ENV_URL)
            && !url.trim().is_empty()
        {
            cfg.hass_url = url;
        }
        if let Ok(token) = env::var(ENV_TOKEN)
            && !token.trim().is_empty()
        {
            cfg.token = token;
        }

        Ok(cfg)
    }

    /// Top-level keys missing from the config file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&content)?;

        Ok(REQUIRED_KEYS
            .iter()
            .filter(|k| value.get(**k).is_none())
            .map(|k| k.to_string())
            .collect())
    }

    /// Write a default configuration file.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        if !is_test {
            fs::write(&path, yaml)?;
            success(format!("Config file: {}", path.display()));
        } else {
            println!("{yaml}");
        }

        Ok(path)
    }
}
