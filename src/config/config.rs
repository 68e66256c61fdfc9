use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, API_URL_ENV, BUGZILLA_API_URL, CONFIG_FILE, DEFAULT_TIMEOUT_SECS};
use crate::error::{BugzillaError, BugzillaResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    BUGZILLA_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Applies `BUGZILLA_API_KEY` and `BUGZILLA_URL` on top of the stored values.
    pub fn resolve(mut self) -> Self {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        self
    }
}

pub fn config_path() -> BugzillaResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or_else(|| BugzillaError::ConfigError("Could not find home directory".to_string()))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> BugzillaResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&config_str)?)
}

pub fn save_config(config: &Config) -> BugzillaResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> BugzillaResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}
