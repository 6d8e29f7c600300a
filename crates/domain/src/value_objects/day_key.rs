//! Day grouping key for forecast bucketing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timezone;

/// Short en-US weekday label ("Mon", "Tue", ...) of an instant in a fixed zone
///
/// Two instants share a key when they fall on the same weekday in the
/// configured zone. Samples a week apart therefore collide, which is fine
/// for a forecast horizon of five days.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayKey(String);

impl DayKey {
    /// Derive the key for `instant` as seen in `timezone`
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>, timezone: &Timezone) -> Self {
        Self(timezone.localize(instant).format("%a").to_string())
    }

    /// The weekday label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
