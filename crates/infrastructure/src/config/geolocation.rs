//! Geolocation source settings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the user's position comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationProvider {
    /// Approximate position from the public IP address
    #[default]
    Ip,
    /// Fixed coordinates from configuration
    Static,
    /// Never locate; always behaves as denied
    None,
}

impl fmt::Display for GeolocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip => write!(f, "ip"),
            Self::Static => write!(f, "static"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Geolocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationAppConfig {
    #[serde(default)]
    pub provider: GeolocationProvider,

    /// Latitude for the static provider
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude for the static provider
    #[serde(default)]
    pub longitude: Option<f64>,

    /// IP geolocation service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://ip-api.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for GeolocationAppConfig {
    fn default() -> Self {
        Self {
            provider: GeolocationProvider::default(),
            latitude: None,
            longitude: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeolocationAppConfig {
    /// Static coordinates, when both halves are set and in range
    #[must_use]
    pub fn static_location(&self) -> Option<domain::GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => domain::GeoLocation::new(lat, lon).ok(),
            _ => None,
        }
    }
}
