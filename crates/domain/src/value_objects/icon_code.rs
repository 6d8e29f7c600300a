//! Weather icon identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Icon identifier as published by the weather provider, e.g. `04d`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconCode(String);

impl IconCode {
    /// Validate an icon identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIconCode` if the code is empty or contains
    /// anything other than ASCII digits and lowercase letters.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let valid = !code.is_empty()
            && code
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase());
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidIconCode(code))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Image reference built from a base such as `https://openweathermap.org/img/wn`
    ///
    /// `large` selects the `@2x` variant used for current conditions.
    #[must_use]
    pub fn url(&self, base: &str, large: bool) -> String {
        let suffix = if large { "@2x" } else { "" };
        format!("{}/{}{suffix}.png", base.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for IconCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IconCode> for String {
    fn from(code: IconCode) -> Self {
        code.0
    }
}
