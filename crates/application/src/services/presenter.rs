//! View-model mapping for weather reports
//!
//! Turns a [`WeatherReport`] into display strings. Pure; no I/O.

use domain::{CurrentConditions, DailyEntry, UnitSystem, WeatherReport};
use serde::{Deserialize, Serialize};

/// Placeholder temperature while a lookup is in flight
pub const LOADING_TEMPERATURE: &str = "--";
/// Placeholder description while a lookup is in flight
pub const LOADING_DESCRIPTION: &str = "Loading...";

/// Everything a view needs to draw a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReportView {
    /// "London, GB"
    pub location: String,
    /// Rounded temperature, e.g. "15"
    pub temperature: String,
    /// "°C" or "°F"
    pub temperature_unit: String,
    pub description: String,
    /// Large icon reference; empty while loading
    pub icon_url: String,
    pub icon_alt: String,
    /// "14°"
    pub feels_like: String,
    /// "72%"
    pub humidity: String,
    /// "14.8 km/h" or "9.2 mph"
    pub wind: String,
    /// "1012 hPa"
    pub pressure: String,
    pub forecast: Vec<ForecastDayView>,
}

impl WeatherReportView {
    /// The loading placeholder
    #[must_use]
    pub fn loading(units: UnitSystem) -> Self {
        Self {
            location: String::new(),
            temperature: LOADING_TEMPERATURE.to_string(),
            temperature_unit: units.temperature_label().to_string(),
            description: LOADING_DESCRIPTION.to_string(),
            icon_url: String::new(),
            icon_alt: String::new(),
            feels_like: String::new(),
            humidity: String::new(),
            wind: String::new(),
            pressure: String::new(),
            forecast: Vec::new(),
        }
    }
}

/// One forecast day tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDayView {
    /// Short weekday, e.g. "Tue"
    pub day: String,
    pub icon_url: String,
    pub icon_alt: String,
    /// "12°"
    pub temperature: String,
}

/// Maps reports to view models
#[derive(Debug, Clone)]
pub struct Presenter {
    icon_base_url: String,
}

impl Presenter {
    #[must_use]
    pub fn new(icon_base_url: impl Into<String>) -> Self {
        Self {
            icon_base_url: icon_base_url.into(),
        }
    }

    #[must_use]
    pub fn present(&self, report: &WeatherReport) -> WeatherReportView {
        let current = &report.current;
        WeatherReportView {
            location: current.location_label(),
            temperature: round_half_up(current.temperature).to_string(),
            temperature_unit: report.units.temperature_label().to_string(),
            description: current.description.clone(),
            icon_url: current.icon_code.url(&self.icon_base_url, true),
            icon_alt: current.description.clone(),
            feels_like: format!("{}°", round_half_up(current.feels_like)),
            humidity: current.humidity.to_string(),
            wind: format_wind(current, report.units),
            pressure: format!("{} hPa", current.pressure_hpa),
            forecast: report
                .forecast
                .iter()
                .map(|entry| self.present_day(entry))
                .collect(),
        }
    }

    fn present_day(&self, entry: &DailyEntry) -> ForecastDayView {
        let sample = &entry.sample;
        ForecastDayView {
            day: entry.day_key.to_string(),
            icon_url: sample.icon_code.url(&self.icon_base_url, false),
            icon_alt: sample.description.clone(),
            temperature: format!("{}°", round_half_up(sample.temperature)),
        }
    }
}

fn format_wind(current: &CurrentConditions, units: UnitSystem) -> String {
    let value = match units {
        UnitSystem::Metric => current.wind_speed.to_kmh(),
        UnitSystem::Imperial => current.wind_speed.to_mph(),
    };
    format!("{value:.1} {}", units.wind_label())
}

/// Round to the nearest integer, halves towards positive infinity
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
