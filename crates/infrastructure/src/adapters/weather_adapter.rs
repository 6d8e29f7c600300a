//! Weather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    CurrentConditions, ForecastSample, Humidity, IconCode, LocationQuery, UnitSystem, WindSpeed,
};
use integration_openweather::{
    ConditionBlock, CurrentResponse, ForecastEntry, OpenWeatherConfig, OpenWeatherMapClient,
    WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Wrap any client implementation
    #[must_use]
    pub fn with_client(client: Box<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(e) => ApplicationError::NotFound(e),
            WeatherError::Unauthorized => {
                ApplicationError::NotAuthorized("weather API key rejected".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::Timeout => ApplicationError::Timeout,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    fn timestamp(secs: i64) -> Result<DateTime<Utc>, ApplicationError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| ApplicationError::Internal(format!("timestamp out of range: {secs}")))
    }

    fn condition(weather: &[ConditionBlock]) -> Result<&ConditionBlock, ApplicationError> {
        weather
            .first()
            .ok_or_else(|| ApplicationError::Internal("response has no weather condition".into()))
    }

    fn icon(code: &str) -> Result<IconCode, ApplicationError> {
        Ok(IconCode::new(code)?)
    }

    /// The API reports wind in mph for imperial requests; the domain keeps m/s
    fn wind_speed(raw: f64, units: UnitSystem) -> WindSpeed {
        match units {
            UnitSystem::Metric => WindSpeed::from_meters_per_second(raw),
            UnitSystem::Imperial => WindSpeed::from_mph(raw),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn map_current(
        response: &CurrentResponse,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        let condition = Self::condition(&response.weather)?;
        Ok(CurrentConditions {
            place_name: response.name.clone(),
            country_code: response.sys.country.clone(),
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: Humidity::from_reading(response.main.humidity),
            wind_speed: Self::wind_speed(response.wind.speed, units),
            pressure_hpa: response.main.pressure.max(0.0).round() as u32,
            description: condition.description.clone(),
            icon_code: Self::icon(&condition.icon)?,
            observed_at: Self::timestamp(response.dt)?,
        })
    }

    fn map_sample(entry: &ForecastEntry) -> Result<ForecastSample, ApplicationError> {
        let condition = Self::condition(&entry.weather)?;
        Ok(ForecastSample::new(
            Self::timestamp(entry.dt)?,
            entry.main.temp,
            condition.description.clone(),
            Self::icon(&condition.icon)?,
        ))
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(query = %query, units = %units))]
    async fn current_conditions(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        let response = self
            .client
            .get_current(query, units)
            .await
            .map_err(Self::map_error)?;

        let current = Self::map_current(&response, units)?;
        debug!(place = %current.location_label(), "Received current conditions");
        Ok(current)
    }

    #[instrument(skip(self), fields(query = %query, units = %units))]
    async fn forecast_samples(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let response = self
            .client
            .get_forecast(query, units)
            .await
            .map_err(Self::map_error)?;

        let samples = response
            .list
            .iter()
            .map(Self::map_sample)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = samples.len(), "Received forecast samples");
        Ok(samples)
    }
}
