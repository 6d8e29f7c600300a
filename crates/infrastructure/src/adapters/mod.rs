//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geolocation_adapter;
mod weather_adapter;

pub use geolocation_adapter::{
    DisabledGeolocation, IpGeolocationAdapter, StaticGeolocation, geolocation_from_config,
};
pub use weather_adapter::OpenWeatherAdapter;
