//! Location capability behind "use my location".
//!
//! A lookup is a single request with two outcomes. Nothing here retries,
//! caches or cancels.

use crate::types::{Location, LocationError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("SkyCard/", env!("CARGO_PKG_VERSION"));

/// ip-api.com style response body
#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Resolves the device position from its public IP address
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    url: String,
}

impl IpLocator {
    pub fn new(url: impl Into<String>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn locate(&self) -> Result<Location, LocationError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LocationError::LookupFailed(format!(
                "lookup returned status {}",
                response.status()
            )));
        }

        let body: IpLookupResponse = response.json().await?;

        if body.status != "success" {
            return Err(LocationError::LookupFailed(
                body.message
                    .unwrap_or_else(|| format!("lookup status {}", body.status)),
            ));
        }

        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => Ok(Location::new(latitude, longitude)),
            _ => Err(LocationError::LookupFailed(
                "lookup response missing coordinates".to_string(),
            )),
        }
    }
}

/// Where location requests are answered from
#[derive(Debug, Clone)]
pub enum LocationSource {
    /// No capability; every request fails with `CapabilityUnavailable`
    Disabled,
    /// Always answers with the same coordinates
    Fixed { latitude: f64, longitude: f64 },
    IpLookup(IpLocator),
}

impl LocationSource {
    pub fn is_available(&self) -> bool {
        !matches!(self, LocationSource::Disabled)
    }

    /// Request the current position once
    pub async fn locate(&self) -> Result<Location, LocationError> {
        match self {
            LocationSource::Disabled => Err(LocationError::CapabilityUnavailable),
            LocationSource::Fixed {
                latitude,
                longitude,
            } => Ok(Location::new(*latitude, *longitude)),
            LocationSource::IpLookup(locator) => {
                tracing::debug!("Looking up location via {}", locator.url());
                locator.locate().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_source() {
        let source = LocationSource::Disabled;
        assert!(!source.is_available());
        assert_eq!(
            source.locate().await,
            Err(LocationError::CapabilityUnavailable)
        );
    }

    #[tokio::test]
    async fn test_fixed_source() {
        let source = LocationSource::Fixed {
            latitude: 41.0082,
            longitude: 28.9784,
        };
        assert!(source.is_available());

        let location = source.locate().await.unwrap();
        assert_eq!(location.latitude, 41.0082);
        assert_eq!(location.longitude, 28.9784);
    }

    #[tokio::test]
    async fn test_unreachable_lookup_fails() {
        let locator = IpLocator::new("http://127.0.0.1:1/json").unwrap();
        let source = LocationSource::IpLookup(locator);
        assert!(source.is_available());

        let result = source.locate().await;
        assert!(matches!(result, Err(LocationError::LookupFailed(_))));
    }
}
