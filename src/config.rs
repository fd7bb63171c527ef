use crate::constants::{
    CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_BASE_API_URL, DEFAULT_MAX_CONCURRENT_FETCHES,
    DEFAULT_REQUEST_TIMEOUT_SECS, ENV_BASE_API_URL,
};
use crate::errors::AppError;
use directories::UserDirs;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const URL_PATTERN: &str = r"^https?://.+$";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the SpaceX REST API, e.g. https://api.spacexdata.com/v4
    #[serde(default = "default_base_api_url")]
    pub spacex_base_api_url: String,
    /// Timeout of a single request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Upper bound of payload requests in flight for one launch
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

fn default_base_api_url() -> String {
    DEFAULT_BASE_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_max_concurrent_fetches() -> usize {
    DEFAULT_MAX_CONCURRENT_FETCHES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacex_base_api_url: default_base_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

impl Config {
    /// Path to ~/.config/launchdeck/config.json
    pub fn config_path() -> Result<PathBuf, AppError> {
        UserDirs::new()
            .ok_or(AppError::NotFoundUserDir)
            .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Read the config file, falling back to defaults when it does not exist,
    /// then apply the base url overrides (cli flag wins over env)
    pub fn load(cli_base_url: Option<String>) -> Result<Self, AppError> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            Self::get_config(&path)?
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config
            .with_base_url_override(env::var(ENV_BASE_API_URL).ok(), cli_base_url)
            .validate()
    }

    /// Get data from the app config
    ///
    /// Params:
    /// - path_to_config: path to the app config
    pub fn get_config(path_to_config: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path_to_config)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    /// Write the default config unless one is already there
    ///
    /// Returns `false` when the file existed
    pub fn save_default(path_to_config: &Path) -> Result<bool, AppError> {
        if path_to_config.exists() {
            return Ok(false);
        }
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Self::default())
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        fs::write(path_to_config, content)?;
        Ok(true)
    }

    pub fn with_base_url_override(mut self, env_url: Option<String>, cli_url: Option<String>) -> Self {
        if let Some(url) = cli_url.or(env_url) {
            self.spacex_base_api_url = url;
        }
        self
    }

    pub fn validate(mut self) -> Result<Self, AppError> {
        self.spacex_base_api_url = validate_url(self.spacex_base_api_url)?;
        if self.max_concurrent_fetches == 0 {
            return Err(AppError::ConcurrencyMoreThenZero);
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::TimeoutMoreThenZero);
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// The entered string must be a URL
fn validate_url(mut value: String) -> Result<String, AppError> {
    let regex = Regex::new(URL_PATTERN).map_err(|_| AppError::InvalidUrl)?;
    if !regex.is_match(&value) {
        return Err(AppError::InvalidUrl);
    }
    if value.ends_with('/') {
        value.pop();
    }
    Ok(value)
}
