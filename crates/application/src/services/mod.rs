//! Application services

mod lookup_service;
mod presenter;

pub use lookup_service::{DEFAULT_CITY, LookupOutcome, LookupSettings, WeatherLookupService};
pub use presenter::{
    ForecastDayView, LOADING_DESCRIPTION, LOADING_TEMPERATURE, Presenter, WeatherReportView,
};
