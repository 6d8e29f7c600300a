//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API (`/weather` and `/forecast`).

use async_trait::async_trait;
use domain::{LocationQuery, UnitSystem};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{CurrentResponse, ErrorBody, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API does not know the requested place (HTTP 404)
    #[error("Location not found: {0}")]
    NotFound(String),

    /// API key missing or rejected (HTTP 401)
    #[error("Unauthorized: check the API key")]
    Unauthorized,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable (HTTP 5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl WeatherError {
    fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Errors while reading a response body; a stalled body is a timeout
    fn from_body(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::from_transport(err)
        }
    }

    /// Map a non-success status to an error; `detail` is the API's message, if any
    fn from_status(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(detail),
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            s if s.is_server_error() => Self::ServiceUnavailable(format!("HTTP {s}")),
            s => Self::RequestFailed(format!("HTTP {s}: {detail}")),
        }
    }
}

/// OpenWeatherMap client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current conditions at a place
    async fn get_current(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<CurrentResponse, WeatherError>;

    /// 3-hourly forecast samples for a place
    async fn get_forecast(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }

    /// Location params followed by the unit selector and credential
    fn query_params(&self, query: &LocationQuery, units: UnitSystem) -> Vec<(&'static str, String)> {
        let mut params = query.to_query_params();
        params.push(("units", units.as_api_param().to_string()));
        params.push(("appid", self.config.api_key.clone()));
        params
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint(endpoint);
        debug!(url = %url, query = %query, units = %units, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(query, units))
            .send()
            .await
            .map_err(|e| WeatherError::from_transport(&e))?;

        let response = Self::check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::from_body(&e))
    }

    async fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        warn!(status = %status, detail = %detail, "OpenWeatherMap returned an error");
        Err(WeatherError::from_status(status, detail))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(query = %query, units = %units))]
    async fn get_current(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<CurrentResponse, WeatherError> {
        self.fetch("weather", query, units).await
    }

    #[instrument(skip(self), fields(query = %query, units = %units))]
    async fn get_forecast(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<ForecastResponse, WeatherError> {
        self.fetch("forecast", query, units).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::GeoLocation;

    fn client_with_key(key: &str) -> OpenWeatherMapClient {
        OpenWeatherMapClient::new(OpenWeatherConfig {
            api_key: key.to_string(),
            ..Default::default()
        })
        .expect("client creation should succeed")
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", client_with_key("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_key_is_not_serialized() {
        let config = OpenWeatherConfig {
            api_key: "k3y".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("k3y"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenWeatherMapClient::new(OpenWeatherConfig {
            base_url: "http://localhost:1234/data/2.5/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint("weather"), "http://localhost:1234/data/2.5/weather");
    }

    #[test]
    fn test_query_params_for_city() {
        let client = client_with_key("abc");
        let params = client.query_params(&LocationQuery::city("Berlin").unwrap(), UnitSystem::Metric);
        assert_eq!(
            params,
            vec![
                ("q", "Berlin".to_string()),
                ("units", "metric".to_string()),
                ("appid", "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_for_coordinates() {
        let client = client_with_key("abc");
        let query = LocationQuery::coordinates(GeoLocation::new(40.7, -74.0).unwrap());
        let params = client.query_params(&query, UnitSystem::Imperial);
        assert_eq!(params[0], ("lat", "40.7".to_string()));
        assert_eq!(params[1], ("lon", "-74".to_string()));
        assert_eq!(params[2], ("units", "imperial".to_string()));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            WeatherError::from_status(StatusCode::NOT_FOUND, "city not found".into()),
            WeatherError::NotFound(msg) if msg == "city not found"
        ));
        assert!(matches!(
            WeatherError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            WeatherError::Unauthorized
        ));
        assert!(matches!(
            WeatherError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            WeatherError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            WeatherError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            WeatherError::from_status(StatusCode::BAD_REQUEST, "bad".into()),
            WeatherError::RequestFailed(_)
        ));
    }
}
