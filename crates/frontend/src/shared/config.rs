use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://back-7gkt.onrender.com";
pub const DEFAULT_COPIED_RESET_MS: u32 = 2000;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    /// URL the topic is POSTed to
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// How long the copy control shows "Copied!"
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("generation endpoint must not be empty")]
    EmptyEndpoint,
}

fn default_copied_reset_ms() -> u32 {
    DEFAULT_COPIED_RESET_MS
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_THEME_STORAGE_KEY.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copied_reset_ms: default_copied_reset_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Console log level; unknown names fall back to `debug`
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.ui.log_level).unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[generation]
endpoint = "https://back-7gkt.onrender.com"

[ui]
copied_reset_ms = 2000
log_level = "debug"

[theme]
storage_key = "theme"
"#;

/// Load the embedded configuration.
///
/// The browser bundle has no file system, so the embedded TOML is the only
/// source. Callers fall back to [`AppConfig::default`] on error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.generation.endpoint.trim().is_empty() {
        return Err(ConfigError::EmptyEndpoint);
    }
    Ok(config)
}
