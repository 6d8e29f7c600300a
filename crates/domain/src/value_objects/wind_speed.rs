//! Wind speed, stored in metres per second

use serde::{Deserialize, Serialize};
use std::fmt;

/// km/h per m/s
pub const KMH_PER_MS: f64 = 3.6;
/// mph per m/s
pub const MPH_PER_MS: f64 = 2.237;

/// Wind speed in m/s regardless of the unit system it was fetched in
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindSpeed(f64);

impl WindSpeed {
    #[must_use]
    pub const fn from_meters_per_second(value: f64) -> Self {
        Self(value)
    }

    /// Convert a reading in miles per hour back to m/s
    #[must_use]
    pub fn from_mph(value: f64) -> Self {
        Self(value / MPH_PER_MS)
    }

    #[must_use]
    pub const fn meters_per_second(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_kmh(self) -> f64 {
        self.0 * KMH_PER_MS
    }

    #[must_use]
    pub fn to_mph(self) -> f64 {
        self.0 * MPH_PER_MS
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_display_units() {
        let wind = WindSpeed::from_meters_per_second(5.0);
        assert!((wind.to_kmh() - 18.0).abs() < 1e-9);
        assert!((wind.to_mph() - 11.185).abs() < 1e-9);
    }

    #[test]
    fn mph_round_trips() {
        let wind = WindSpeed::from_mph(11.185);
        assert!((wind.meters_per_second() - 5.0).abs() < 1e-9);
        assert!((wind.to_mph() - 11.185).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(WindSpeed::from_meters_per_second(3.14).to_string(), "3.1 m/s");
    }
}
