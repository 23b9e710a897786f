use crate::{
    Config, FetchError, ForecastSnapshot, LocationQuery, WeatherSnapshot,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Read-only source of current conditions and forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, FetchError>;

    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastSnapshot, FetchError>;
}

/// Build the OpenWeather provider with the key and base URL from `config`.
///
/// A missing key is not an error here; requests fail with [`FetchError::Unauthorized`].
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
    ))
}
