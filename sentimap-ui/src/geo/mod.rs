//! IP geolocation capability
//!
//! Resolves a client IP address to an approximate location for the map and
//! trend views. Lookup failures are typed and observable, and never affect
//! sentiment classification: the caller records "no location" and moves on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use thiserror::Error;
use tracing::debug;

const IP_API_BASE_URL: &str = "http://ip-api.com/json";

/// Geolocation client errors
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Approximate location for an IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Geolocation capability
///
/// `Ok(None)` is the absence signal: the address could not be located
/// (private range, provider "fail" status). Transport-level problems are
/// `Err` so callers can log the cause before degrading to absence.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self, ip: &str) -> Result<Option<GeoLocation>, GeoError>;
}

/// ip-api.com response envelope
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default, rename = "regionName")]
    region_name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Client for the ip-api.com JSON endpoint
pub struct IpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl IpApiClient {
    pub fn new() -> Self {
        Self::with_base_url(IP_API_BASE_URL)
    }

    /// Override the endpoint (test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Addresses the provider cannot resolve to a public location
    fn is_unroutable(ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => {
                v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
            }
            IpAddr::V6(v6) => v6.is_loopback() || v6.is_unspecified(),
        }
    }
}

impl Default for IpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoLocator for IpApiClient {
    async fn locate(&self, ip: &str) -> Result<Option<GeoLocation>, GeoError> {
        // Local and private addresses short-circuit without a network call
        if let Ok(parsed) = ip.parse::<IpAddr>() {
            if Self::is_unroutable(parsed) {
                debug!("Skipping geolocation for unroutable address {}", ip);
                return Ok(None);
            }
        }

        let url = format!("{}/{}", self.base_url, ip);
        let response = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| GeoError::Network(e.to_string()))?;

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeoError::UnexpectedResponse(e.to_string()))?;

        if body.status != "success" {
            debug!(
                "Geolocation lookup for {} returned status {:?} ({:?})",
                ip, body.status, body.message
            );
            return Ok(None);
        }

        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => Ok(Some(GeoLocation {
                latitude,
                longitude,
                city: body.city,
                region: body.region_name,
                country: body.country,
            })),
            _ => Err(GeoError::UnexpectedResponse(
                "success response without coordinates".to_string(),
            )),
        }
    }
}
