//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Place name was empty after trimming
    #[error("Place name must not be empty")]
    EmptyPlaceName,

    /// Coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unknown IANA timezone name
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    /// Unit system name not recognised
    #[error("Invalid unit system: {0}. Use 'metric' or 'imperial'")]
    InvalidUnitSystem(String),

    /// Theme name not recognised
    #[error("Invalid theme: {0}. Use 'light' or 'dark'")]
    InvalidTheme(String),

    /// Icon identifier is empty or contains characters outside [0-9a-z]
    #[error("Invalid icon code: {0:?}")]
    InvalidIconCode(String),

    /// Timestamp could not be represented
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}
