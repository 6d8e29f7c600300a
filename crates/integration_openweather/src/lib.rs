//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Provides current conditions and the 3-hourly five day forecast. Requires an
//! API key.

pub mod client;
mod models;

pub use client::{OpenWeatherConfig, OpenWeatherMapClient, WeatherClient, WeatherError};
pub use models::{
    CityBlock, ConditionBlock, CurrentResponse, ForecastEntry, ForecastResponse, MainBlock,
    SysBlock, WindBlock,
};
