//! Forecast samples and the per-day selection built from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DayKey, IconCode};

/// One timestamped entry of the 3-hourly forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub description: String,
    pub icon_code: IconCode,
}

impl ForecastSample {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        temperature: f64,
        description: impl Into<String>,
        icon_code: IconCode,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            description: description.into(),
            icon_code,
        }
    }
}

/// A representative sample together with the day it stands for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub day_key: DayKey,
    pub sample: ForecastSample,
}

/// Up to five samples, one per distinct future day, in chronological order
///
/// Only [`crate::ForecastBucketer`] builds non-empty values, which keeps the
/// distinct-day invariant in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    entries: Vec<DailyEntry>,
}

impl DailyForecast {
    pub(crate) const fn from_entries(entries: Vec<DailyEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyEntry> {
        self.entries.iter()
    }

    /// The retained samples without their keys
    pub fn samples(&self) -> impl Iterator<Item = &ForecastSample> {
        self.entries.iter().map(|e| &e.sample)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DailyForecast {
    type Item = &'a DailyEntry;
    type IntoIter = std::slice::Iter<'a, DailyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
