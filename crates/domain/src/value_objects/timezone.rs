//! Timezone value object
//!
//! Day grouping for the forecast is done on calendar days in one fixed
//! timezone. This wraps a validated IANA zone from `chrono-tz`.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name such as `Europe/London`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not in the IANA database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// The IANA name of this zone
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Check if this is a UTC timezone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.name(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// Convert a UTC instant into this zone
    #[must_use]
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        self.0.from_utc_datetime(&instant.naive_utc())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timezone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iana_names() {
        let tz = Timezone::parse("Europe/Berlin").expect("known zone");
        assert_eq!(tz.name(), "Europe/Berlin");
        assert_eq!(tz.to_string(), "Europe/Berlin");
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            Timezone::parse("Mars/Olympus_Mons"),
            Err(DomainError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn default_is_utc() {
        assert!(Timezone::default().is_utc());
        assert!(!Timezone::parse("America/New_York").expect("zone").is_utc());
    }

    #[test]
    fn localize_shifts_wall_clock() {
        let instant = DateTime::parse_from_rfc3339("2024-01-15T23:30:00Z")
            .expect("valid")
            .with_timezone(&Utc);
        let berlin = Timezone::parse("Europe/Berlin").expect("zone");
        assert_eq!(berlin.localize(instant).format("%Y-%m-%d %H:%M").to_string(), "2024-01-16 00:30");
    }

    #[test]
    fn serde_uses_name() {
        let tz = Timezone::parse("Asia/Tokyo").expect("zone");
        let json = serde_json::to_string(&tz).expect("serialize");
        assert_eq!(json, "\"Asia/Tokyo\"");
        let back: Timezone = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tz);
        assert!(serde_json::from_str::<Timezone>("\"Nowhere\"").is_err());
    }
}
