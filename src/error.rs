//! Error types for boundary validation and trip bookkeeping.
//!
//! The geometry itself never fails; these are returned only by the opt-in
//! validation helpers and the trip completion hand-off.

use thiserror::Error;

use crate::trip::TripStatus;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("coordinate is not finite")]
    NonFinite,
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("sample {index} is invalid: {source}")]
    InvalidSample { index: usize, source: GeoError },
    #[error("sample {index} is earlier than the sample before it")]
    OutOfOrder { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripError {
    #[error("cannot move trip from {from:?} to {to:?}")]
    InvalidTransition { from: TripStatus, to: TripStatus },
    #[error("end odometer {end} is below start odometer {start}")]
    OdometerRegression { start: f64, end: f64 },
}
