//! OpenWeatherMap response models
//!
//! Only the fields the widget consumes are modelled. Unknown fields are
//! ignored so upstream additions don't break parsing.

use serde::{Deserialize, Serialize};

/// `main` block shared by current and forecast payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    /// Relative humidity in percent
    #[serde(default)]
    pub humidity: i64,
    /// Sea-level pressure in hPa
    #[serde(default)]
    pub pressure: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionBlock {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub main: String,
    pub description: String,
    /// Icon identifier such as `04d`
    pub icon: String,
}

/// `wind` block; speed is m/s for metric requests and mph for imperial ones
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindBlock {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SysBlock {
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    #[serde(default)]
    pub sys: SysBlock,
    pub main: MainBlock,
    #[serde(default)]
    pub wind: WindBlock,
    pub weather: Vec<ConditionBlock>,
    /// Observation time, seconds since epoch
    pub dt: i64,
}

impl CurrentResponse {
    /// The leading condition, which is what gets displayed
    #[must_use]
    pub fn condition(&self) -> Option<&ConditionBlock> {
        self.weather.first()
    }
}

/// One 3-hourly sample of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Sample time, seconds since epoch
    pub dt: i64,
    pub main: MainBlock,
    pub weather: Vec<ConditionBlock>,
}

impl ForecastEntry {
    #[must_use]
    pub fn condition(&self) -> Option<&ConditionBlock> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityBlock {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Samples in chronological order
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<CityBlock>,
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
