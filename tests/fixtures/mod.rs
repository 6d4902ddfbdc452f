//! Test fixtures for trip-compliance.
//!
//! Provides:
//! - Real Las Vegas depots and delivery drops (from OpenStreetMap)
//! - Track builders that lay GPS samples along, beside, or around a point

#![allow(dead_code)]

pub mod las_vegas_locations;
pub mod tracks;

pub use las_vegas_locations::*;
pub use tracks::*;
