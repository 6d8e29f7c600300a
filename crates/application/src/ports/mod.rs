//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod clock_port;
mod geolocation_port;
mod view_port;
mod weather_port;

pub use clock_port::{ClockPort, FixedClock, SystemClock};
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use geolocation_port::{GeolocationError, GeolocationPort};
#[cfg(test)]
pub use view_port::MockWeatherViewPort;
pub use view_port::WeatherViewPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
