//! Tunable thresholds for the engine.

use serde::{Deserialize, Serialize};

/// Samples farther than this from the planned route are non-compliant.
pub const DEFAULT_TOLERANCE_METERS: f64 = 500.0;

/// Minimum stationary duration reported as a stop.
pub const DEFAULT_STOP_THRESHOLD_MINUTES: f64 = 10.0;

/// Consecutive samples closer than this are treated as stationary.
pub const DEFAULT_DISTANCE_THRESHOLD_METERS: f64 = 100.0;

/// Number of intervals the straight-line planned route is split into.
pub const DEFAULT_WAYPOINT_COUNT: usize = 20;

/// Stops this close to the destination are arrival dwell, not anomalies.
pub const DESTINATION_EXCLUSION_RADIUS_METERS: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tolerance_meters: f64,
    pub stop_threshold_minutes: f64,
    pub distance_threshold_meters: f64,
    pub waypoint_count: usize,
    pub destination_radius_meters: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance_meters: DEFAULT_TOLERANCE_METERS,
            stop_threshold_minutes: DEFAULT_STOP_THRESHOLD_MINUTES,
            distance_threshold_meters: DEFAULT_DISTANCE_THRESHOLD_METERS,
            waypoint_count: DEFAULT_WAYPOINT_COUNT,
            destination_radius_meters: DESTINATION_EXCLUSION_RADIUS_METERS,
        }
    }
}
