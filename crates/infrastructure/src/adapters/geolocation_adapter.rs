//! Geolocation adapters - Implement GeolocationPort
//!
//! A terminal has no browser position API, so the position comes from one of:
//! fixed coordinates, an IP geolocation lookup, or nowhere at all.

use std::sync::Arc;
use std::time::Duration;

use application::ports::{GeolocationError, GeolocationPort};
use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::{GeolocationAppConfig, GeolocationProvider};

/// Always answers with the same coordinates
#[derive(Debug, Clone, Copy)]
pub struct StaticGeolocation {
    location: Option<GeoLocation>,
}

impl StaticGeolocation {
    #[must_use]
    pub const fn new(location: GeoLocation) -> Self {
        Self {
            location: Some(location),
        }
    }

    /// A static source with nothing configured reports `Unavailable`
    #[must_use]
    pub const fn unset() -> Self {
        Self { location: None }
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocation {
    async fn locate(&self) -> Result<GeoLocation, GeolocationError> {
        self.location
            .ok_or_else(|| GeolocationError::Unavailable("no static coordinates configured".into()))
    }
}

/// Geolocation switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeolocation;

#[async_trait]
impl GeolocationPort for DisabledGeolocation {
    async fn locate(&self) -> Result<GeoLocation, GeolocationError> {
        Err(GeolocationError::Denied)
    }
}

/// Approximate position from the caller's public IP (ip-api.com JSON shape)
#[derive(Debug)]
pub struct IpGeolocationAdapter {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl IpGeolocationAdapter {
    /// Create an adapter querying `{base_url}/json`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, GeolocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GeolocationError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl GeolocationPort for IpGeolocationAdapter {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn locate(&self) -> Result<GeoLocation, GeolocationError> {
        let url = format!("{}/json", self.base_url.trim_end_matches('/'));
        debug!(url = %url, "Looking up position by IP");

        let response = self
            .client
            .get(&url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| GeolocationError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeolocationError::Unavailable(format!("HTTP {status}")));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::Failed(e.to_string()))?;

        if body.status != "success" {
            return Err(GeolocationError::Unavailable(
                body.message.unwrap_or_else(|| body.status.clone()),
            ));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                GeoLocation::new(lat, lon).map_err(|e| GeolocationError::Failed(e.to_string()))
            },
            _ => Err(GeolocationError::Failed("response has no coordinates".into())),
        }
    }
}

/// Pick the adapter named by configuration
///
/// # Errors
///
/// Returns an error if the IP adapter's HTTP client cannot be initialized.
pub fn geolocation_from_config(
    config: &GeolocationAppConfig,
) -> Result<Arc<dyn GeolocationPort>, GeolocationError> {
    Ok(match config.provider {
        GeolocationProvider::Ip => Arc::new(IpGeolocationAdapter::new(
            config.base_url.clone(),
            config.timeout_secs,
        )?),
        GeolocationProvider::Static => Arc::new(
            config
                .static_location()
                .map_or_else(StaticGeolocation::unset, StaticGeolocation::new),
        ),
        GeolocationProvider::None => Arc::new(DisabledGeolocation),
    })
}
