//! Property-based tests for the forecast bucketer and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain::value_objects::{GeoLocation, Humidity, IconCode, Timezone};
use domain::{ForecastBucketer, ForecastSample, MAX_FORECAST_DAYS, bucket};
use proptest::prelude::*;
use std::collections::HashSet;

fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Chronological samples built from non-negative minute gaps
fn samples_from_gaps(gaps: &[i64]) -> Vec<ForecastSample> {
    let icon = IconCode::new("10d").unwrap();
    let mut ts = base_instant();
    gaps.iter()
        .map(|gap| {
            ts += Duration::minutes(*gap);
            ForecastSample::new(ts, 12.5, "light rain", icon.clone())
        })
        .collect()
}

fn timezone_strategy() -> impl Strategy<Value = Timezone> {
    prop_oneof![
        Just("UTC"),
        Just("Europe/London"),
        Just("America/Los_Angeles"),
        Just("Asia/Tokyo"),
        Just("Pacific/Auckland"),
    ]
    .prop_map(|name| Timezone::parse(name).unwrap())
}

// ============================================================================
// ForecastBucketer Property Tests
// ============================================================================

mod bucketing_tests {
    use super::*;

    proptest! {
        #[test]
        fn empty_input_is_empty_for_any_now(offset in -1_000_000i64..1_000_000i64) {
            let now = base_instant() + Duration::minutes(offset);
            prop_assert!(bucket(&[], now).is_empty());
        }

        #[test]
        fn never_more_than_five_days(
            gaps in prop::collection::vec(0i64..2_000, 0..200),
            now_offset in -10_000i64..50_000i64,
            tz in timezone_strategy()
        ) {
            let samples = samples_from_gaps(&gaps);
            let now = base_instant() + Duration::minutes(now_offset);
            let result = ForecastBucketer::new(tz).bucket(&samples, now);
            prop_assert!(result.len() <= MAX_FORECAST_DAYS);
        }

        #[test]
        fn day_keys_are_distinct(
            gaps in prop::collection::vec(0i64..2_000, 0..200),
            now_offset in -10_000i64..50_000i64,
            tz in timezone_strategy()
        ) {
            let samples = samples_from_gaps(&gaps);
            let now = base_instant() + Duration::minutes(now_offset);
            let result = ForecastBucketer::new(tz).bucket(&samples, now);

            let keys: HashSet<_> = result.iter().map(|e| e.day_key.clone()).collect();
            prop_assert_eq!(keys.len(), result.len());
        }

        #[test]
        fn every_entry_is_after_now(
            gaps in prop::collection::vec(0i64..2_000, 0..200),
            now_offset in -10_000i64..50_000i64
        ) {
            let samples = samples_from_gaps(&gaps);
            let now = base_instant() + Duration::minutes(now_offset);
            for sample in bucket(&samples, now).samples() {
                prop_assert!(sample.timestamp > now);
            }
        }

        #[test]
        fn entries_stay_chronological(
            gaps in prop::collection::vec(0i64..2_000, 0..200),
            now_offset in -10_000i64..50_000i64
        ) {
            let samples = samples_from_gaps(&gaps);
            let now = base_instant() + Duration::minutes(now_offset);
            let stamps: Vec<_> = bucket(&samples, now).samples().map(|s| s.timestamp).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn all_past_samples_give_empty_output(
            gaps in prop::collection::vec(0i64..2_000, 0..100),
            extra in 0i64..10_000
        ) {
            let samples = samples_from_gaps(&gaps);
            let last = samples.last().map_or_else(base_instant, |s| s.timestamp);
            let now = last + Duration::minutes(extra);
            prop_assert!(bucket(&samples, now).is_empty());
        }
    }
}

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon);
            prop_assert!(loc.is_ok());

            let loc = loc.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn in_range_accepted(value in 0i64..=100) {
            let h = Humidity::new(value).unwrap();
            prop_assert_eq!(i64::from(h.value()), value);
            prop_assert_eq!(h.to_string(), format!("{value}%"));
        }

        #[test]
        fn readings_always_clamp_into_range(value in any::<i64>()) {
            prop_assert!(Humidity::from_reading(value).value() <= Humidity::MAX);
        }
    }
}
