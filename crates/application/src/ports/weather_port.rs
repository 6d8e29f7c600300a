//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{CurrentConditions, ForecastSample, LocationQuery, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Implementations return wind speed in m/s whatever `units` is; temperatures
/// follow `units`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions at the queried place
    async fn current_conditions(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Chronological 3-hourly forecast samples for the queried place
    async fn forecast_samples(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
