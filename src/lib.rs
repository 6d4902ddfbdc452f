//! trip-compliance core
//!
//! GPS trip-compliance and anomaly detection: how closely a recorded track
//! followed the planned route, and where the driver stopped unexpectedly.

pub mod types;
pub mod error;
pub mod config;
pub mod traits;
pub mod haversine;
pub mod polyline;
pub mod planner;
pub mod compliance;
pub mod stops;
pub mod geocode;
pub mod trip;

pub use config::EngineConfig;
pub use types::{ComplianceResult, Coordinate, GpsSample, UnscheduledStop};
