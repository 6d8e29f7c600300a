use serde::{Deserialize, Serialize};

use super::{CurrentConditions, DailyForecast};
use crate::value_objects::UnitSystem;

/// Everything one lookup renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: DailyForecast,
    /// Unit system the temperatures are expressed in
    pub units: UnitSystem,
}
