//! Domain layer for Nimbus
//!
//! Contains the weather entities, value objects, and the forecast bucketing
//! algorithm. Nothing in here performs I/O.

pub mod bucketing;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use bucketing::{ForecastBucketer, MAX_FORECAST_DAYS, bucket};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
