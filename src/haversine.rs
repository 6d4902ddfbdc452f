//! Great-circle distance and planar segment geometry.
//!
//! Distances are haversine over a spherical Earth. Interpolation and segment
//! projection work in plain lat/lng space, which is accurate enough at the
//! scale of a single delivery route but drifts on very long or
//! anti-meridian-crossing routes.

use crate::types::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two points in meters.
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// Linear interpolation in lat/lng space, `t` in `[0, 1]`.
///
/// Written as a weighted sum so `t == 0` and `t == 1` return the endpoints
/// bit-for-bit.
pub fn interpolate(from: Coordinate, to: Coordinate, t: f64) -> Coordinate {
    Coordinate {
        lat: from.lat * (1.0 - t) + to.lat * t,
        lng: from.lng * (1.0 - t) + to.lng * t,
    }
}

/// Closest point to `point` on the segment `[start, end]`.
///
/// The projection parameter is clamped to `[0, 1]`, so the result never lies
/// on the segment's extension. A zero-length segment yields `start`.
pub fn closest_point_on_segment(point: Coordinate, start: Coordinate, end: Coordinate) -> Coordinate {
    let dx = end.lng - start.lng;
    let dy = end.lat - start.lat;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return start;
    }

    let dot = (point.lng - start.lng) * dx + (point.lat - start.lat) * dy;
    let param = (dot / len_sq).clamp(0.0, 1.0);

    Coordinate {
        lat: start.lat + param * dy,
        lng: start.lng + param * dx,
    }
}

/// Distance in meters from `point` to the nearest location on `[start, end]`.
pub fn distance_to_segment(point: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    if start == end {
        return distance(point, start);
    }
    distance(point, closest_point_on_segment(point, start, end))
}

/// Total length of a path in meters, summing consecutive legs.
pub fn path_length(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|leg| distance(leg[0], leg[1])).sum()
}
