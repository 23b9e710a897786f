use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    config::ApiKey,
    error::FetchError,
    model::{ForecastEntry, ForecastSnapshot, LocationQuery, WeatherSnapshot},
};

use super::WeatherProvider;

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<ApiKey>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<ApiKey>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// GET `path` for `query` in metric units and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &LocationQuery,
    ) -> Result<T, FetchError> {
        let api_key = self.api_key.as_ref().ok_or(FetchError::Unauthorized)?;
        let url = format!("{}{}", self.base_url, path);

        debug!(%url, location = %query, "sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", api_key.expose()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::from_status(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Transient(format!("malformed OpenWeather response: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    sys: OwSys,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

/// The first condition entry, or empty fields when the provider sent none.
fn primary_condition(weather: Vec<OwWeather>) -> OwWeather {
    weather.into_iter().next().unwrap_or_default()
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(raw: OwCurrentResponse) -> Self {
        let condition = primary_condition(raw.weather);
        WeatherSnapshot {
            location_name: raw.name,
            country: raw.sys.country,
            temperature_c: raw.main.temp,
            condition: condition.main,
            description: condition.description,
            humidity_pct: raw.main.humidity,
            wind_speed_mps: raw.wind.speed,
            icon: condition.icon,
        }
    }
}

impl TryFrom<OwForecastEntry> for ForecastEntry {
    type Error = FetchError;

    fn try_from(raw: OwForecastEntry) -> Result<Self, Self::Error> {
        let time = DateTime::<Utc>::from_timestamp(raw.dt, 0)
            .ok_or_else(|| FetchError::Transient(format!("invalid forecast timestamp {}", raw.dt)))?;
        let condition = primary_condition(raw.weather);

        Ok(ForecastEntry {
            time,
            temperature_c: raw.main.temp,
            condition: condition.main,
            description: condition.description,
            humidity_pct: raw.main.humidity,
            wind_speed_mps: raw.wind.speed,
            icon: condition.icon,
        })
    }
}

impl TryFrom<OwForecastResponse> for ForecastSnapshot {
    type Error = FetchError;

    fn try_from(raw: OwForecastResponse) -> Result<Self, Self::Error> {
        let entries = raw
            .list
            .into_iter()
            .map(ForecastEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ForecastSnapshot {
            location_name: raw.city.name,
            country: raw.city.country,
            entries,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), fields(location = %query))]
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, FetchError> {
        let raw: OwCurrentResponse = self.get_json(CURRENT_PATH, query).await?;
        Ok(raw.into())
    }

    #[instrument(skip(self), fields(location = %query))]
    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastSnapshot, FetchError> {
        let raw: OwForecastResponse = self.get_json(FORECAST_PATH, query).await?;
        raw.try_into()
    }
}
