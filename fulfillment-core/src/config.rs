use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable holding the OpenWeather credential.
///
/// The key is deliberately never stored in the config file or in source.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const DEFAULT_API_BASE: &str = "https://api.openweathermap.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Non-secret settings, stored on disk as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the weather provider. Overridable for testing against a
    /// local mock server.
    pub api_base: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config from TOML; missing fields fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-bot", "fulfillment")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the provider credential from the environment.
    pub fn api_key_from_env() -> Result<String> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| {
            anyhow!(
                "No API key found.\n\
                 Hint: export {API_KEY_ENV} with your OpenWeather API key."
            )
        })?;

        if key.trim().is_empty() {
            return Err(anyhow!("{API_KEY_ENV} is set but empty."));
        }

        Ok(key)
    }
}
