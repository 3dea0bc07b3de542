use crate::{Config, model::WeatherReading, provider::openweather::OpenWeatherProvider};
use anyhow::Context;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Everything that can go wrong talking to the weather provider.
///
/// The handler treats all variants alike ("the provider call failed");
/// variants exist for diagnostics, not for divergent handling.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather provider response contained no conditions")]
    MissingConditions,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ProviderError>;
}

/// Construct the production provider from configuration.
///
/// The API key is resolved from the environment, never from the config file.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = Config::api_key_from_env()?;

    let provider = OpenWeatherProvider::new(api_key, config)
        .context("Failed to construct OpenWeather HTTP client")?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_status_and_body() {
        let err = ProviderError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "city not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("city not found"));
    }

    #[test]
    fn missing_conditions_error_is_descriptive() {
        let err = ProviderError::MissingConditions;
        assert!(err.to_string().contains("no conditions"));
    }
}
