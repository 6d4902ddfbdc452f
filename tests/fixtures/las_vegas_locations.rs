//! Real Las Vegas / Henderson locations used as trip endpoints.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use trip_compliance::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Depots (pickup points)
// ============================================================================

pub const DEPOTS: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

// ============================================================================
// Delivery drops
// ============================================================================

pub const DROPS: &[Location] = &[
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
];

/// Wynn to MGM Grand, roughly 2.7 km down the Strip.
pub fn strip_run() -> (Coordinate, Coordinate) {
    (DEPOTS[0].coordinate(), DROPS[0].coordinate())
}

/// Longhorn Casino to Henderson, roughly 15 km across town.
pub fn crosstown_run() -> (Coordinate, Coordinate) {
    (DEPOTS[1].coordinate(), DROPS[2].coordinate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_vegas_area() {
        for loc in DEPOTS.iter().chain(DROPS) {
            assert!(loc.lat > 35.9 && loc.lat < 36.3, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(loc.lng > -115.4 && loc.lng < -114.8, "{} lng out of range: {}", loc.name, loc.lng);
        }
    }
}
