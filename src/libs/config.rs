//! Configuration management for the todo client.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: the client runs against the default API location.
//!
//! ## API URL Resolution
//!
//! 1. `TODO_API_URL` environment variable (a `.env` file is loaded at startup)
//! 2. `api.base_url` from `config.json`
//! 3. [`DEFAULT_API_URL`]
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todo_cli::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("API: {}", config.api_config().base_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Task collection resource used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/todo";

/// Connection settings for the task API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// URL of the task collection resource, e.g. `http://localhost:8080/api/todo`.
    ///
    /// Item routes are built by appending `/{id}` to it.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Interactive setup of the API settings, seeded from `config`.
    pub fn init(config: &Option<ApiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleApi);

        let base_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.base_url)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_base_url(input).map(|_| ()).map_err(|_| Message::InvalidApiUrl(input.clone()).to_string())
            })
            .interact_text()?;

        Ok(Self::new(&base_url))
    }
}

/// Strips surrounding whitespace and trailing slashes.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Accepts absolute `http`/`https` URLs only.
pub fn validate_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => anyhow::bail!("unsupported URL scheme: {}", scheme),
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Task API settings. Unset means the default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
}

impl Config {
    /// Reads `config.json`, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let config = Config::read()?;
        Ok(Config {
            api: Some(ApiConfig::init(&config.api)?),
        })
    }

    /// Effective API settings, honoring the `TODO_API_URL` override.
    pub fn api_config(&self) -> ApiConfig {
        self.resolve_api(env::var(API_URL_ENV).ok())
    }

    /// Effective API settings given an explicit override value.
    ///
    /// Blank overrides are ignored.
    pub fn resolve_api(&self, override_url: Option<String>) -> ApiConfig {
        match override_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => ApiConfig::new(&url),
            None => ApiConfig::new(&self.api.clone().unwrap_or_default().base_url),
        }
    }
}
