//! Straight-line planned route (fallback when no routing graph is available).
//!
//! Subdivides the pickup-delivery segment into evenly spaced waypoints.
//! Ignores roads entirely, but is deterministic and always available.

use crate::config::DEFAULT_WAYPOINT_COUNT;
use crate::haversine::interpolate;
use crate::polyline::Polyline;
use crate::traits::RoutePlanner;
use crate::types::Coordinate;

#[derive(Debug, Clone)]
pub struct StraightLinePlanner {
    /// Number of intervals; the route has one more waypoint than this.
    pub intervals: usize,
}

impl Default for StraightLinePlanner {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_WAYPOINT_COUNT,
        }
    }
}

impl StraightLinePlanner {
    /// Creates a planner splitting the route into `intervals` legs.
    pub fn new(intervals: usize) -> Self {
        Self { intervals }
    }
}

impl RoutePlanner for StraightLinePlanner {
    fn plan(&self, pickup: Coordinate, delivery: Coordinate) -> Polyline {
        Polyline::new(build(pickup, delivery, self.intervals))
    }
}

/// `num_points + 1` waypoints at `t = i / num_points`, first and last equal
/// to `pickup` and `delivery`.
///
/// `num_points == 0` yields just the pickup.
pub fn build(pickup: Coordinate, delivery: Coordinate, num_points: usize) -> Vec<Coordinate> {
    if num_points == 0 {
        return vec![pickup];
    }

    (0..=num_points)
        .map(|i| interpolate(pickup, delivery, i as f64 / num_points as f64))
        .collect()
}
