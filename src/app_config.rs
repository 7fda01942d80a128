use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};
use url::Url;

use crate::language::TargetLanguage;

/// Application configuration module
/// This module handles loading, validating and saving the settings the host
/// shell hands to the screens. Credentials never live in source: they come
/// from the config file or the environment.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Generative-text provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Translation history store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Translator screen settings
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Environment variables consulted for the provider API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["TRACTREE_API_KEY", "GEMINI_API_KEY"];

/// Provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Request timeout; transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    // @field: Sampling temperature; provider default when unset
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: None,
            temperature: None,
        }
    }
}

/// Translation history store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Database file; the platform data directory is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Whether the runtime supports the embedded database
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            enabled: true,
        }
    }
}

/// Translator screen configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TranslatorConfig {
    /// Language preselected in the picker
    #[serde(default)]
    pub default_language: TargetLanguage,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Fill the API key from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Fill the API key from an arbitrary variable lookup
    ///
    /// The first non-empty variable of [`API_KEY_ENV_VARS`] wins over the file value.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        if let Some(api_key) = from_env {
            self.provider.api_key = api_key;
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(anyhow!(
                "Provider API key is required (set it in the config file or via {})",
                API_KEY_ENV_VARS.join(" / ")
            ));
        }

        if self.provider.model.trim().is_empty() {
            return Err(anyhow!("Provider model cannot be empty"));
        }

        let endpoint = Url::parse(&self.provider.endpoint)
            .with_context(|| format!("Invalid provider endpoint: {}", self.provider.endpoint))?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(anyhow!(
                "Provider endpoint must use http or https: {}",
                self.provider.endpoint
            ));
        }

        if let Some(temperature) = self.provider.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(anyhow!("Temperature must be between 0.0 and 2.0, got {}", temperature));
            }
        }

        Ok(())
    }
}

impl StoreConfig {
    /// Resolve the database file location
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => crate::database::DatabaseConnection::default_database_path(),
        }
    }
}
