//! Value Objects - Immutable, identity-less domain primitives

mod day_key;
mod geo_location;
mod humidity;
mod icon_code;
mod location_query;
mod theme;
mod timezone;
mod unit_system;
mod wind_speed;

pub use day_key::DayKey;
pub use geo_location::GeoLocation;
pub use humidity::{Humidity, InvalidHumidity};
pub use icon_code::IconCode;
pub use location_query::LocationQuery;
pub use theme::Theme;
pub use timezone::Timezone;
pub use unit_system::UnitSystem;
pub use wind_speed::{KMH_PER_MS, MPH_PER_MS, WindSpeed};
