//! Relative humidity value object
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! let h = Humidity::new(81).expect("valid humidity");
//! assert_eq!(h.to_string(), "81%");
//!
//! // API payloads occasionally carry out-of-range readings
//! assert_eq!(Humidity::from_reading(140).value(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a humidity value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid humidity: {0}% is out of range (must be 0-100)")]
pub struct InvalidHumidity(i64);

/// Relative humidity percentage (0-100%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum valid humidity percentage
    pub const MAX: u8 = 100;

    /// Create a validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` if the value is outside 0..=100.
    pub fn new(value: i64) -> Result<Self, InvalidHumidity> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(InvalidHumidity(value))
    }

    /// Build from a raw sensor/API reading, clamping into 0..=100
    #[must_use]
    pub fn from_reading(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    /// Get the humidity value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for u8 {
    fn from(h: Humidity) -> Self {
        h.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range() {
        assert!(Humidity::new(0).is_ok());
        assert!(Humidity::new(100).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Humidity::new(101).is_err());
        assert!(Humidity::new(-1).is_err());
        assert_eq!(
            Humidity::new(101).unwrap_err().to_string(),
            "invalid humidity: 101% is out of range (must be 0-100)"
        );
    }

    #[test]
    fn reading_is_clamped() {
        assert_eq!(Humidity::from_reading(-5).value(), 0);
        assert_eq!(Humidity::from_reading(64).value(), 64);
        assert_eq!(Humidity::from_reading(300).value(), 100);
    }

    #[test]
    fn serde_validates() {
        let h: Humidity = serde_json::from_str("65").expect("deserialize");
        assert_eq!(h.value(), 65);
        assert_eq!(serde_json::to_string(&h).expect("serialize"), "65");
        assert!(serde_json::from_str::<Humidity>("101").is_err());
    }
}
