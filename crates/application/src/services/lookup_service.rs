//! Weather lookup orchestration
//!
//! Fetches current conditions and the forecast concurrently, buckets the
//! forecast into days and renders the result through the view port. Each
//! lookup takes a generation number; a lookup that is no longer the latest
//! when its fetch completes is dropped without touching the view.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::{
    ForecastBucketer, GeoLocation, LocationQuery, Theme, UnitSystem, WeatherReport,
};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::error::LookupError;
use crate::ports::{
    ClockPort, GeolocationError, GeolocationPort, SystemClock, WeatherPort, WeatherViewPort,
};
use crate::services::presenter::{Presenter, WeatherReportView};

/// Default place used when nothing else is known
pub const DEFAULT_CITY: &str = "London";

/// Default deadline for both requests of one lookup, in seconds
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// How a lookup ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A report was rendered
    Rendered,
    /// An error message was rendered
    Failed(LookupError),
    /// A newer lookup started meanwhile; nothing was rendered
    Superseded,
    /// Blank input; nothing happened
    Skipped,
}

/// Behaviour knobs for [`WeatherLookupService`]
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub default_city: String,
    pub units: UnitSystem,
    pub enable_geolocation: bool,
    pub lookup_timeout: Duration,
    pub bucketer: ForecastBucketer,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            units: UnitSystem::default(),
            enable_geolocation: true,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            bucketer: ForecastBucketer::default(),
        }
    }
}

/// Drives lookups from input to rendered view
pub struct WeatherLookupService {
    weather: Arc<dyn WeatherPort>,
    geolocation: Arc<dyn GeolocationPort>,
    view: Arc<dyn WeatherViewPort>,
    clock: Arc<dyn ClockPort>,
    presenter: Presenter,
    settings: LookupSettings,
    generation: AtomicU64,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService")
            .field("settings", &self.settings)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        geolocation: Arc<dyn GeolocationPort>,
        view: Arc<dyn WeatherViewPort>,
        presenter: Presenter,
        settings: LookupSettings,
    ) -> Self {
        Self {
            weather,
            geolocation,
            view,
            clock: Arc::new(SystemClock),
            presenter,
            settings,
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the clock used as "now" for bucketing
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    /// Look up a place by name
    ///
    /// Blank input is ignored. Failures render a user-facing message.
    #[instrument(skip(self))]
    pub async fn search(&self, city: &str) -> LookupOutcome {
        let Ok(query) = LocationQuery::city(city) else {
            debug!("Ignoring blank search");
            return LookupOutcome::Skipped;
        };

        match self.run(&query).await {
            Ok(generation) => self.finish(generation, LookupOutcome::Rendered),
            Err((generation, err)) => {
                if !self.is_current(generation) {
                    return LookupOutcome::Superseded;
                }
                warn!(query = %query, error = %err, "Lookup failed");
                self.view.show_error(err.user_message());
                LookupOutcome::Failed(err)
            },
        }
    }

    /// Look up by coordinates, falling back to the default place on any failure
    #[instrument(skip(self), fields(location = %location))]
    pub async fn lookup_coordinates(&self, location: GeoLocation) -> LookupOutcome {
        let query = LocationQuery::coordinates(location);

        match self.run(&query).await {
            Ok(generation) => self.finish(generation, LookupOutcome::Rendered),
            Err((generation, err)) => {
                if !self.is_current(generation) {
                    return LookupOutcome::Superseded;
                }
                warn!(
                    error = %err,
                    fallback = %self.settings.default_city,
                    "Coordinate lookup failed, using default place"
                );
                self.search_default().await
            },
        }
    }

    /// First lookup after start-up: geolocate if enabled, else the default place
    #[instrument(skip(self))]
    pub async fn load_initial(&self) -> LookupOutcome {
        if !self.settings.enable_geolocation {
            return self.search_default().await;
        }

        match self.geolocation.locate().await {
            Ok(location) => self.lookup_coordinates(location).await,
            Err(err) => {
                match &err {
                    GeolocationError::Denied => info!("Geolocation denied, using default place"),
                    other => warn!(error = %other, "Geolocation failed, using default place"),
                }
                self.search_default().await
            },
        }
    }

    /// Forward a theme change to the view
    pub fn set_theme(&self, theme: Theme) {
        debug!(theme = %theme, "Theme changed");
        self.view.set_theme(theme);
    }

    async fn search_default(&self) -> LookupOutcome {
        let city = self.settings.default_city.clone();
        self.search(&city).await
    }

    /// Start a lookup and fetch, render on success if still current
    ///
    /// Returns the generation the lookup ran under, with the error on failure.
    async fn run(&self, query: &LocationQuery) -> Result<u64, (u64, LookupError)> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show_loading();

        let report = self.fetch_report(query).await.map_err(|e| (generation, e))?;

        if self.is_current(generation) {
            let view: WeatherReportView = self.presenter.present(&report);
            self.view.show_report(&view);
        }
        Ok(generation)
    }

    /// Both requests joined under one deadline
    ///
    /// Both run to completion; a current-conditions failure is reported ahead
    /// of a forecast failure regardless of which arrives first.
    async fn fetch_report(&self, query: &LocationQuery) -> Result<WeatherReport, LookupError> {
        let units = self.settings.units;

        let current = async {
            self.weather
                .current_conditions(query, units)
                .await
                .map_err(|e| {
                    debug!(error = %e, "Current conditions request failed");
                    LookupError::from_current(&e)
                })
        };
        let forecast = async {
            self.weather
                .forecast_samples(query, units)
                .await
                .map_err(|e| {
                    debug!(error = %e, "Forecast request failed");
                    LookupError::from_forecast(&e)
                })
        };

        let (current, samples) =
            timeout(self.settings.lookup_timeout, async { tokio::join!(current, forecast) })
                .await
                .map_err(|_| LookupError::Timeout)?;
        let current = current?;
        let samples = samples?;

        let forecast = self.settings.bucketer.bucket(&samples, self.clock.now());
        debug!(
            place = %current.location_label(),
            samples = samples.len(),
            days = forecast.len(),
            "Weather report assembled"
        );

        Ok(WeatherReport {
            current,
            forecast,
            units,
        })
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn finish(&self, generation: u64, outcome: LookupOutcome) -> LookupOutcome {
        if self.is_current(generation) {
            outcome
        } else {
            debug!(generation, "Lookup superseded by a newer one");
            LookupOutcome::Superseded
        }
    }
}
