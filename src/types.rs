//! Value types shared by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A WGS84 position in degrees.
///
/// Range is a caller precondition; use [`Coordinate::validate`] at the
/// ingestion boundary if the source is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both components are finite and within WGS84 range.
    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(GeoError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// One GPS fix as appended by the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsSample {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl GpsSample {
    /// Creates a sample with only position and time set.
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            speed: None,
            heading: None,
            altitude: None,
            accuracy: None,
            timestamp,
        }
    }

    /// Position of the sample.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Checks the sample's position, see [`Coordinate::validate`].
    pub fn validate(&self) -> Result<(), GeoError> {
        self.coordinate().validate()
    }
}

/// Outcome of a route compliance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// Share of samples within tolerance, 0-100, one decimal.
    pub compliance_percent: f64,
    pub max_deviation_meters: u64,
    pub average_deviation_meters: u64,
}

impl Default for ComplianceResult {
    /// Fully compliant, no deviation. Used when there is nothing to measure.
    fn default() -> Self {
        Self {
            compliance_percent: 100.0,
            max_deviation_meters: 0,
            average_deviation_meters: 0,
        }
    }
}

/// A stationary run away from the destination that lasted long enough to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscheduledStop {
    pub latitude: f64,
    pub longitude: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: f64,
    pub sample_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UnscheduledStop {
    /// Location of the stop, the first sample of its run.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Returns the stop with `address` filled in.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
