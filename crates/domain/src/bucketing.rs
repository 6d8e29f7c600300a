//! Forecast day bucketing
//!
//! Reduces a chronological list of 3-hourly forecast samples to one
//! representative per future day. The representative is the first sample of
//! that day strictly after `now`; nothing is averaged. At most
//! [`MAX_FORECAST_DAYS`] days are kept and short inputs are never padded.
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use domain::{bucket, ForecastSample, IconCode};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! let icon = IconCode::new("01d").unwrap();
//! let samples = vec![
//!     ForecastSample::new(now + Duration::hours(1), 4.0, "clear sky", icon.clone()),
//!     ForecastSample::new(now + Duration::hours(4), 6.0, "clear sky", icon.clone()),
//!     ForecastSample::new(now + Duration::hours(25), 3.0, "light rain", icon),
//! ];
//!
//! let days = bucket(&samples, now);
//! assert_eq!(days.len(), 2);
//! ```

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::entities::{DailyEntry, DailyForecast, ForecastSample};
use crate::value_objects::{DayKey, Timezone};

/// Upper bound on the number of days in a [`DailyForecast`]
pub const MAX_FORECAST_DAYS: usize = 5;

/// Groups forecast samples by weekday in a fixed timezone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastBucketer {
    timezone: Timezone,
}

impl ForecastBucketer {
    #[must_use]
    pub const fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    #[must_use]
    pub const fn timezone(&self) -> Timezone {
        self.timezone
    }

    /// Pick the first sample after `now` for each distinct day, in input order
    #[must_use]
    pub fn bucket(&self, samples: &[ForecastSample], now: DateTime<Utc>) -> DailyForecast {
        let mut seen: HashSet<DayKey> = HashSet::new();
        let mut entries = Vec::with_capacity(MAX_FORECAST_DAYS);

        for sample in samples {
            let day_key = DayKey::from_instant(sample.timestamp, &self.timezone);
            if sample.timestamp <= now || seen.contains(&day_key) {
                continue;
            }
            seen.insert(day_key.clone());
            entries.push(DailyEntry {
                day_key,
                sample: sample.clone(),
            });
        }

        entries.truncate(MAX_FORECAST_DAYS);
        DailyForecast::from_entries(entries)
    }
}

/// [`ForecastBucketer::bucket`] with days taken in UTC
#[must_use]
pub fn bucket(samples: &[ForecastSample], now: DateTime<Utc>) -> DailyForecast {
    ForecastBucketer::default().bucket(samples, now)
}
