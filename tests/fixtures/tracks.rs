//! Synthetic GPS tracks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use trip_compliance::haversine::{EARTH_RADIUS_METERS, interpolate};
use trip_compliance::{Coordinate, GpsSample};

/// Meters per degree of latitude on the haversine sphere.
const METERS_PER_DEGREE: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

/// 2024-03-04 08:00:00 UTC.
pub fn shift_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap()
}

pub fn minutes_after_start(minutes: f64) -> DateTime<Utc> {
    shift_start() + Duration::milliseconds((minutes * 60_000.0).round() as i64)
}

/// Move `origin` by the given meters north and east (small offsets only).
pub fn offset(origin: Coordinate, north_m: f64, east_m: f64) -> Coordinate {
    Coordinate::new(
        origin.lat + north_m / METERS_PER_DEGREE,
        origin.lng + east_m / (METERS_PER_DEGREE * origin.lat.to_radians().cos()),
    )
}

pub fn sample_at(location: Coordinate, minutes: f64) -> GpsSample {
    GpsSample::new(location.lat, location.lng, minutes_after_start(minutes))
}

/// `count` samples `interval_minutes` apart, jittering a few meters around `at`.
pub fn dwell(at: Coordinate, start_minutes: f64, count: usize, interval_minutes: f64) -> Vec<GpsSample> {
    (0..count)
        .map(|i| {
            let jitter = if i % 2 == 0 { 0.0 } else { 15.0 };
            sample_at(offset(at, jitter, jitter), start_minutes + i as f64 * interval_minutes)
        })
        .collect()
}

/// `count` evenly spaced samples driving from `from` to `to`, one per minute.
pub fn drive(from: Coordinate, to: Coordinate, start_minutes: f64, count: usize) -> Vec<GpsSample> {
    let steps = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let t = i as f64 / steps;
            sample_at(interpolate(from, to, t), start_minutes + i as f64)
        })
        .collect()
}

pub fn coordinates(track: &[GpsSample]) -> Vec<Coordinate> {
    track.iter().map(GpsSample::coordinate).collect()
}
