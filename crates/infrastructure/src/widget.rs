//! Widget assembly
//!
//! `WidgetOptions` collects the credential, default place, unit system,
//! geolocation toggle, theme and day grouping zone, then wires a
//! [`WeatherLookupService`] for a given view.
//!
//! ```rust,ignore
//! let service = WidgetOptions::builder()
//!     .api_key(SecretString::from("..."))
//!     .default_city("Lisbon")
//!     .units(UnitSystem::Imperial)
//!     .theme(Theme::Dark)
//!     .build(view, geolocation)?;
//! service.load_initial().await;
//! ```

use std::sync::Arc;
use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{GeolocationPort, WeatherPort, WeatherViewPort};
use application::services::{LookupSettings, Presenter, WeatherLookupService};
use domain::{ForecastBucketer, Theme, Timezone, UnitSystem};
use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::adapters::OpenWeatherAdapter;
use crate::config::{AppConfig, ConfigError, WeatherAppConfig};

/// Everything needed to build a widget
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    api_key: SecretString,
    default_city: String,
    units: UnitSystem,
    enable_geolocation: bool,
    theme: Theme,
    timezone: Timezone,
    lookup_timeout: Duration,
    base_url: String,
    icon_base_url: String,
    request_timeout_secs: u64,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        let weather = WeatherAppConfig::default();
        Self {
            api_key: SecretString::from(String::new()),
            default_city: application::DEFAULT_CITY.to_string(),
            units: UnitSystem::default(),
            enable_geolocation: true,
            theme: Theme::default(),
            timezone: Timezone::utc(),
            lookup_timeout: Duration::from_secs(10),
            base_url: weather.base_url,
            icon_base_url: weather.icon_base_url,
            request_timeout_secs: weather.timeout_secs,
        }
    }
}

impl WidgetOptions {
    /// Start from the defaults
    #[must_use]
    pub fn builder() -> Self {
        Self::default()
    }

    /// Options taken from loaded configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: config.weather.api_key.clone(),
            default_city: config.widget.default_city.clone(),
            units: config.widget.units,
            enable_geolocation: config.widget.enable_geolocation,
            theme: config.widget.theme,
            timezone: config.timezone()?,
            lookup_timeout: Duration::from_secs(config.widget.lookup_timeout_secs),
            base_url: config.weather.base_url.clone(),
            icon_base_url: config.weather.icon_base_url.clone(),
            request_timeout_secs: config.weather.timeout_secs,
        })
    }

    #[must_use]
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = key;
        self
    }

    #[must_use]
    pub fn default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    #[must_use]
    pub const fn units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    #[must_use]
    pub const fn enable_geolocation(mut self, enabled: bool) -> Self {
        self.enable_geolocation = enabled;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub const fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn icon_base_url(mut self, url: impl Into<String>) -> Self {
        self.icon_base_url = url.into();
        self
    }

    #[must_use]
    pub const fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub const fn selected_theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn selected_units(&self) -> UnitSystem {
        self.units
    }

    fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            default_city: self.default_city.clone(),
            units: self.units,
            enable_geolocation: self.enable_geolocation,
            lookup_timeout: self.lookup_timeout,
            bucketer: ForecastBucketer::new(self.timezone),
        }
    }

    fn client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            timeout_secs: self.request_timeout_secs,
        }
    }

    /// Wire the OpenWeatherMap adapter, apply the theme and return the service
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the HTTP client cannot be
    /// initialized.
    pub fn build(
        self,
        view: Arc<dyn WeatherViewPort>,
        geolocation: Arc<dyn GeolocationPort>,
    ) -> Result<WeatherLookupService, ApplicationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "an OpenWeatherMap API key is required".into(),
            ));
        }
        let weather: Arc<dyn WeatherPort> =
            Arc::new(OpenWeatherAdapter::with_config(self.client_config())?);
        Ok(self.build_with(weather, view, geolocation))
    }

    /// Wire the service over any weather port
    #[must_use]
    pub fn build_with(
        self,
        weather: Arc<dyn WeatherPort>,
        view: Arc<dyn WeatherViewPort>,
        geolocation: Arc<dyn GeolocationPort>,
    ) -> WeatherLookupService {
        debug!(
            default_city = %self.default_city,
            units = %self.units,
            theme = %self.theme,
            timezone = %self.timezone,
            geolocation = self.enable_geolocation,
            "Building weather widget"
        );
        view.set_theme(self.theme);
        WeatherLookupService::new(
            weather,
            geolocation,
            view,
            Presenter::new(self.icon_base_url.clone()),
            self.lookup_settings(),
        )
    }
}
