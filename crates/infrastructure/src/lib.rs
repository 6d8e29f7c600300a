//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! weather adapter and the geolocation sources. Also owns configuration
//! loading, logging initialisation and widget assembly.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod widget;

pub use adapters::*;
pub use config::{AppConfig, ConfigError};
pub use telemetry::{LoggingError, init_logging};
pub use widget::WidgetOptions;
