//! Current conditions at a place

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, IconCode, WindSpeed};

/// Snapshot of the weather at one place, as returned by the current-conditions call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved place name, e.g. "London"
    pub place_name: String,
    /// ISO country code, e.g. "GB"
    pub country_code: String,
    /// Temperature in the unit system of the request
    pub temperature: f64,
    /// Apparent temperature in the unit system of the request
    pub feels_like: f64,
    pub humidity: Humidity,
    pub wind_speed: WindSpeed,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: u32,
    pub description: String,
    pub icon_code: IconCode,
    pub observed_at: DateTime<Utc>,
}

impl CurrentConditions {
    /// "London, GB", or just the name when the country is missing
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.country_code.is_empty() {
            self.place_name.clone()
        } else {
            format!("{}, {}", self.place_name, self.country_code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrentConditions {
        CurrentConditions {
            place_name: "London".to_string(),
            country_code: "GB".to_string(),
            temperature: 15.4,
            feels_like: 14.2,
            humidity: Humidity::from_reading(72),
            wind_speed: WindSpeed::from_meters_per_second(4.1),
            pressure_hpa: 1012,
            description: "broken clouds".to_string(),
            icon_code: IconCode::new("04d").unwrap(),
            observed_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn location_label_includes_country() {
        assert_eq!(sample().location_label(), "London, GB");
    }

    #[test]
    fn location_label_without_country() {
        let mut c = sample();
        c.country_code.clear();
        assert_eq!(c.location_label(), "London");
    }
}
