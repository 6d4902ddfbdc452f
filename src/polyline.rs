//! Planned route geometry as an ordered waypoint sequence.

use serde::{Deserialize, Serialize};

use crate::haversine::{distance, distance_to_segment};
use crate::types::Coordinate;

/// Ordered waypoints approximating the intended path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from ordered waypoints.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the waypoints.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned waypoints.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Distance in meters from `point` to the closest location anywhere on
    /// the polyline, not just the nearest waypoint.
    ///
    /// A single-waypoint polyline degenerates to point distance; an empty
    /// one has no answer.
    pub fn distance_to(&self, point: Coordinate) -> Option<f64> {
        match self.points.as_slice() {
            [] => None,
            [only] => Some(distance(point, *only)),
            _ => self
                .segments()
                .map(|(start, end)| distance_to_segment(point, start, end))
                .reduce(f64::min),
        }
    }
}
