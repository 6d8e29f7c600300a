//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather service does not know the requested place
    #[error("Location not found: {0}")]
    NotFound(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Credential missing or rejected
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// An operation did not finish in time
    #[error("Operation timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a lookup produced no report
///
/// Each variant carries a fixed user-facing message; the underlying cause is
/// only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Current-conditions request was rejected for the place
    #[error("location not found")]
    NotFound,

    /// Current conditions succeeded but the forecast request failed
    #[error("forecast unavailable")]
    ForecastUnavailable,

    /// Both requests together exceeded the lookup deadline
    #[error("lookup timed out")]
    Timeout,

    /// Network, parse or credential failure
    #[error("weather service error: {0}")]
    Service(String),
}

impl LookupError {
    /// Message shown to the user in place of the report
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "City not found. Please try again.",
            Self::ForecastUnavailable => "Forecast data not available. Please try again.",
            Self::Timeout => "The weather service did not respond in time. Please try again.",
            Self::Service(_) => "Unable to reach the weather service. Please try again.",
        }
    }

    /// Classify a failed current-conditions request
    #[must_use]
    pub fn from_current(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(_) => Self::NotFound,
            ApplicationError::Timeout => Self::Timeout,
            other => Self::Service(other.to_string()),
        }
    }

    /// Classify a failed forecast request
    #[must_use]
    pub const fn from_forecast(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::Timeout => Self::Timeout,
            _ => Self::ForecastUnavailable,
        }
    }
}
