//! Geolocation port
//!
//! Asynchronously yields the caller's position, or the reason it can't.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Why no position was obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// Geolocation is switched off or the user refused it
    #[error("Geolocation denied")]
    Denied,

    /// No source could provide a position
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    /// The source answered with something unusable
    #[error("Geolocation failed: {0}")]
    Failed(String),
}

/// Port for locating the user
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Current position of the user
    async fn locate(&self) -> Result<GeoLocation, GeolocationError>;
}
