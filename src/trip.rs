//! Trip completion hand-off.
//!
//! The surrounding application owns trip records and persistence; this module
//! gives it the status rules and the numbers to write at completion.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compliance::evaluate_track;
use crate::config::EngineConfig;
use crate::error::TripError;
use crate::haversine::path_length;
use crate::types::{ComplianceResult, Coordinate, GpsSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    NotStarted,
    InProgress,
    Completed,
    Cancelled,
    Delayed,
}

impl TripStatus {
    /// Whether `next` is a legal successor of this status.
    pub fn can_transition_to(self, next: TripStatus) -> bool {
        matches!(
            (self, next),
            (TripStatus::NotStarted, TripStatus::InProgress)
                | (TripStatus::InProgress, TripStatus::Completed)
                | (TripStatus::InProgress, TripStatus::Cancelled)
                | (TripStatus::InProgress, TripStatus::Delayed)
        )
    }

    /// Moves to `next`, or fails if the transition is not allowed.
    pub fn transition(self, next: TripStatus) -> Result<TripStatus, TripError> {
        if self.can_transition_to(next) {
            debug!(from = ?self, to = ?next, "trip status transition");
            Ok(next)
        } else {
            Err(TripError::InvalidTransition { from: self, to: next })
        }
    }

    /// True once the trip can no longer change status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TripStatus::Completed | TripStatus::Cancelled | TripStatus::Delayed
        )
    }
}

/// Everything known about a trip at the moment the driver ends it.
#[derive(Debug, Clone)]
pub struct TripCompletion {
    pub status: TripStatus,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub fuel_used: Option<f64>,
    /// Chronological GPS track.
    pub track: Vec<GpsSample>,
    pub pickup: Option<Coordinate>,
    pub delivery: Option<Coordinate>,
}

/// Values to persist on the trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripMetrics {
    pub status: TripStatus,
    /// Odometer delta, in odometer units.
    pub distance_travelled: f64,
    pub fuel_used: Option<f64>,
    /// Distance per unit of fuel; absent without a positive fuel figure.
    pub fuel_efficiency: Option<f64>,
    pub gps_distance_meters: f64,
    pub compliance: ComplianceResult,
}

/// Complete an in-progress trip.
///
/// Fails if the trip is not in progress, so a repeated "end trip" request
/// cannot produce a second result.
pub fn complete_trip(trip: &TripCompletion, config: &EngineConfig) -> Result<TripMetrics, TripError> {
    let status = trip.status.transition(TripStatus::Completed)?;

    if trip.end_odometer < trip.start_odometer {
        return Err(TripError::OdometerRegression {
            start: trip.start_odometer,
            end: trip.end_odometer,
        });
    }
    let distance_travelled = trip.end_odometer - trip.start_odometer;

    let fuel_efficiency = trip
        .fuel_used
        .filter(|fuel| *fuel > 0.0)
        .map(|fuel| distance_travelled / fuel);

    let path: Vec<Coordinate> = trip.track.iter().map(GpsSample::coordinate).collect();
    let compliance = evaluate_track(&trip.track, trip.pickup, trip.delivery, config);

    info!(
        distance_travelled,
        samples = trip.track.len(),
        compliance_percent = compliance.compliance_percent,
        "trip completed"
    );

    Ok(TripMetrics {
        status,
        distance_travelled,
        fuel_used: trip.fuel_used,
        fuel_efficiency,
        gps_distance_meters: path_length(&path),
        compliance,
    })
}

/// Evaluate many finished trips at once, one result per input, in order.
pub fn evaluate_trips(trips: &[TripCompletion], config: &EngineConfig) -> Vec<ComplianceResult> {
    trips
        .par_iter()
        .map(|trip| evaluate_track(&trip.track, trip.pickup, trip.delivery, config))
        .collect()
}
