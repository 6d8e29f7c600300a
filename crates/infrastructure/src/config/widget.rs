//! Widget behaviour settings

use domain::{Theme, UnitSystem};
use serde::{Deserialize, Serialize};

use super::default_true;

/// What the widget shows and how
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Place used when geolocation is off or fails
    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default)]
    pub units: UnitSystem,

    /// Try to locate the user on start-up
    #[serde(default = "default_true")]
    pub enable_geolocation: bool,

    #[serde(default)]
    pub theme: Theme,

    /// IANA zone in which forecast samples are grouped into days
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Deadline for both requests of one lookup, in seconds
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
}

fn default_city() -> String {
    application::DEFAULT_CITY.to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

const fn default_lookup_timeout_secs() -> u64 {
    10
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            units: UnitSystem::default(),
            enable_geolocation: default_true(),
            theme: Theme::default(),
            timezone: default_timezone(),
            lookup_timeout_secs: default_lookup_timeout_secs(),
        }
    }
}
