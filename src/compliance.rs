//! Route compliance evaluation.
//!
//! Scores a recorded track against the planned route: the share of samples
//! within tolerance of the route polyline, plus worst and mean deviation.

use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::planner::StraightLinePlanner;
use crate::traits::RoutePlanner;
use crate::types::{ComplianceResult, Coordinate, GpsSample};

/// Evaluate `actual_path` against a straight-line route between the endpoints.
pub fn evaluate(
    actual_path: &[Coordinate],
    expected_start: Coordinate,
    expected_end: Coordinate,
    config: &EngineConfig,
) -> ComplianceResult {
    let planner = StraightLinePlanner::new(config.waypoint_count);
    evaluate_with(actual_path, expected_start, expected_end, &planner, config.tolerance_meters)
}

/// Evaluate against a route from any [`RoutePlanner`].
///
/// An empty path is treated as compliant: no samples means no evidence of
/// deviation. A sample exactly `tolerance_meters` away still counts.
/// Samples whose deviation is not finite (NaN or infinite coordinates) are
/// skipped and excluded from every statistic, including the denominator.
pub fn evaluate_with<P>(
    actual_path: &[Coordinate],
    expected_start: Coordinate,
    expected_end: Coordinate,
    planner: &P,
    tolerance_meters: f64,
) -> ComplianceResult
where
    P: RoutePlanner,
{
    if actual_path.is_empty() {
        debug!("empty track, defaulting to full compliance");
        return ComplianceResult::default();
    }

    let expected_route = planner.plan(expected_start, expected_end);
    if expected_route.is_empty() {
        debug!("planner returned no waypoints, defaulting to full compliance");
        return ComplianceResult::default();
    }

    let mut compliant_points = 0usize;
    let mut measured_points = 0usize;
    let mut total_deviation = 0.0;
    let mut max_deviation: f64 = 0.0;

    for point in actual_path {
        let deviation = expected_route
            .distance_to(*point)
            .unwrap_or(f64::INFINITY);
        if !deviation.is_finite() {
            warn!(lat = point.lat, lng = point.lng, "skipping sample with non-finite deviation");
            continue;
        }
        trace!(lat = point.lat, lng = point.lng, deviation, "sample deviation");

        measured_points += 1;
        if deviation <= tolerance_meters {
            compliant_points += 1;
        }
        total_deviation += deviation;
        max_deviation = max_deviation.max(deviation);
    }

    if measured_points == 0 {
        debug!(points = actual_path.len(), "no measurable samples, defaulting to full compliance");
        return ComplianceResult::default();
    }

    let measured = measured_points as f64;
    let result = ComplianceResult {
        compliance_percent: round_to_tenth(compliant_points as f64 / measured * 100.0),
        max_deviation_meters: max_deviation.round() as u64,
        average_deviation_meters: (total_deviation / measured).round() as u64,
    };

    debug!(
        points = actual_path.len(),
        measured_points,
        compliant_points,
        waypoints = expected_route.len(),
        compliance_percent = result.compliance_percent,
        max_deviation_meters = result.max_deviation_meters,
        "route compliance evaluated"
    );

    result
}

/// Evaluate with optional endpoints, as they come off a job record.
///
/// Without both pickup and delivery there is no planned route, and the
/// result is the fully compliant default.
pub fn evaluate_trip(
    actual_path: &[Coordinate],
    pickup: Option<Coordinate>,
    delivery: Option<Coordinate>,
    config: &EngineConfig,
) -> ComplianceResult {
    match (pickup, delivery) {
        (Some(start), Some(end)) => evaluate(actual_path, start, end, config),
        _ => {
            debug!("missing job endpoint, no planned route");
            ComplianceResult::default()
        }
    }
}

/// Convenience over [`evaluate_trip`] for raw GPS samples, in the order given.
pub fn evaluate_track(
    track: &[GpsSample],
    pickup: Option<Coordinate>,
    delivery: Option<Coordinate>,
    config: &EngineConfig,
) -> ComplianceResult {
    let path: Vec<Coordinate> = track.iter().map(GpsSample::coordinate).collect();
    evaluate_trip(&path, pickup, delivery, config)
}

/// Round half away from zero to one decimal place.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
