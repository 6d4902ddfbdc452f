//! Seams for swapping the stand-in implementations.
//!
//! The engine ships with a straight-line route planner and a Nominatim
//! geocoder; applications with a routing graph or their own address service
//! implement these instead.

use crate::polyline::Polyline;
use crate::types::Coordinate;

/// Produces the intended path between a trip's pickup and delivery.
pub trait RoutePlanner {
    fn plan(&self, pickup: Coordinate, delivery: Coordinate) -> Polyline;
}

/// Resolves a coordinate to a human-readable address.
///
/// Lookups are best effort: `None` means no address, never an error.
pub trait ReverseGeocoder {
    fn address_for(&self, location: Coordinate) -> Option<String>;
}
