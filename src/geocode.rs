//! Nominatim HTTP adapter for stop addresses.

use serde::Deserialize;
use tracing::warn;

use crate::traits::ReverseGeocoder;
use crate::types::Coordinate;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: concat!("trip-compliance/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    /// Builds a blocking HTTP client with the configured timeout and agent.
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    /// Reverse lookup URL for `location`.
    pub fn reverse_url(&self, location: Coordinate) -> String {
        format!(
            "{}/reverse?format=jsonv2&lat={:.6}&lon={:.6}",
            self.config.base_url.trim_end_matches('/'),
            location.lat,
            location.lng
        )
    }
}

impl ReverseGeocoder for NominatimClient {
    fn address_for(&self, location: Coordinate) -> Option<String> {
        let response = self
            .client
            .get(self.reverse_url(location))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<ReverseResponse>());

        match response {
            Ok(body) => body.into_address(),
            Err(err) => {
                warn!(lat = location.lat, lng = location.lng, error = %err, "reverse geocoding failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

impl ReverseResponse {
    fn into_address(self) -> Option<String> {
        if let Some(error) = self.error {
            warn!(%error, "nominatim returned no address");
            return None;
        }
        self.display_name.filter(|name| !name.trim().is_empty())
    }
}
