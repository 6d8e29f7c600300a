//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap endpoint and credential
//! - `widget`: default place, units, theme, day grouping zone, lookup deadline
//! - `geolocation`: where the user's position comes from
//! - `logging`: log filter and format
//!
//! Sources are layered: built-in defaults, then `nimbus.toml` (or an explicit
//! file), then `NIMBUS_`-prefixed environment variables with `__` between
//! section and key, e.g. `NIMBUS_WEATHER__API_KEY`.

mod geolocation;
mod logging;
mod weather;
mod widget;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub use geolocation::{GeolocationAppConfig, GeolocationProvider};
pub use logging::{LogFormat, LoggingConfig};
pub use weather::WeatherAppConfig;
pub use widget::WidgetConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "nimbus.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NIMBUS";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub weather: WeatherAppConfig,

    #[serde(default)]
    pub widget: WidgetConfig,

    #[serde(default)]
    pub geolocation: GeolocationAppConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the process environment
    ///
    /// With `path` set the file must exist; otherwise `nimbus.toml` is read
    /// if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], reading environment overrides from `env`
    /// instead of the process environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., NIMBUS_WIDGET__UNITS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            units = %config.widget.units,
            geolocation = %config.geolocation.provider,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field rules deserialization cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weather.has_api_key() {
            return Err(invalid(format!(
                "weather.api_key is required (set {ENV_PREFIX}_WEATHER__API_KEY)"
            )));
        }
        require_http_url("weather.base_url", &self.weather.base_url)?;
        require_http_url("weather.icon_base_url", &self.weather.icon_base_url)?;
        require_nonzero("weather.timeout_secs", self.weather.timeout_secs)?;

        if self.widget.default_city.trim().is_empty() {
            return Err(invalid("widget.default_city must not be empty"));
        }
        domain::Timezone::parse(&self.widget.timezone)
            .map_err(|e| invalid(format!("widget.timezone: {e}")))?;
        require_nonzero("widget.lookup_timeout_secs", self.widget.lookup_timeout_secs)?;

        match self.geolocation.provider {
            GeolocationProvider::Ip => {
                require_http_url("geolocation.base_url", &self.geolocation.base_url)?;
                require_nonzero("geolocation.timeout_secs", self.geolocation.timeout_secs)?;
            },
            GeolocationProvider::Static => {
                if self.geolocation.static_location().is_none() {
                    return Err(invalid(
                        "geolocation.latitude and geolocation.longitude must both be set \
                         and in range for the static provider",
                    ));
                }
            },
            GeolocationProvider::None => {},
        }

        Ok(())
    }

    /// The validated day grouping zone
    pub fn timezone(&self) -> Result<domain::Timezone, ConfigError> {
        domain::Timezone::parse(&self.widget.timezone)
            .map_err(|e| invalid(format!("widget.timezone: {e}")))
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn require_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(format!("{field} must be an http(s) URL, got {value:?}")))
    }
}

fn require_nonzero(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        Err(invalid(format!("{field} must be greater than zero")))
    } else {
        Ok(())
    }
}
