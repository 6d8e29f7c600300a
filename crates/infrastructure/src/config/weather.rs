//! OpenWeatherMap settings

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base for icon image references
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout_secs(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}
