//! What a lookup is asked for: a place name or a coordinate pair

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationQuery {
    /// Free-text place name, trimmed and never empty
    City(String),
    Coordinates(GeoLocation),
}

impl LocationQuery {
    /// Build a city query from user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPlaceName` if the input is blank.
    pub fn city(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyPlaceName);
        }
        Ok(Self::City(trimmed.to_string()))
    }

    #[must_use]
    pub const fn coordinates(location: GeoLocation) -> Self {
        Self::Coordinates(location)
    }

    /// Query parameters identifying the location, excluding credentials and units
    #[must_use]
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City(name) => vec![("q", name.clone())],
            Self::Coordinates(loc) => vec![
                ("lat", loc.latitude().to_string()),
                ("lon", loc.longitude().to_string()),
            ],
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => f.write_str(name),
            Self::Coordinates(loc) => write!(f, "({loc})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_trimmed() {
        assert_eq!(
            LocationQuery::city("  Paris ").unwrap(),
            LocationQuery::City("Paris".to_string())
        );
    }

    #[test]
    fn blank_city_rejected() {
        assert!(matches!(
            LocationQuery::city("   "),
            Err(DomainError::EmptyPlaceName)
        ));
    }

    #[test]
    fn query_params() {
        let city = LocationQuery::city("Oslo").unwrap();
        assert_eq!(city.to_query_params(), vec![("q", "Oslo".to_string())]);

        let coords = LocationQuery::coordinates(GeoLocation::new(51.5, -0.12).unwrap());
        assert_eq!(
            coords.to_query_params(),
            vec![("lat", "51.5".to_string()), ("lon", "-0.12".to_string())]
        );
    }
}
