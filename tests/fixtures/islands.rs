//! A fictional archipelago used across integration tests.
//!
//! Radii are in meters from the capital; angles in radians.

use depot_planner::{Country, Location, LocationId, RoutingOptions};

/// Raw fixture row: name, region, r, theta, depot.
pub type Row = (&'static str, &'static str, f64, f64, bool);

// ============================================================================
// Candidate depots
// ============================================================================

pub const DEPOTS: &[Row] = &[
    ("Port Royal", "Mainland", 0.0, 0.0, true),
    ("Cape Hollow", "Mainland", 4_200.0, 2.9, true),
    ("Saltmarsh Yard", "Eastreach", 9_800.0, 0.35, true),
];

// ============================================================================
// Settlements
// ============================================================================

pub const SETTLEMENTS: &[Row] = &[
    ("Brightwater", "Mainland", 1_500.0, 0.8, false),
    ("Millbrook", "Mainland", 2_300.0, -1.2, false),
    ("Fennick", "Mainland", 3_100.0, 2.4, false),
    ("Oaken Rise", "Mainland", 900.0, -2.7, false),
    ("Tidewell", "Eastreach", 8_700.0, 0.1, false),
    ("Gullhaven", "Eastreach", 10_400.0, 0.55, false),
    ("Kelp Harbour", "Eastreach", 11_900.0, -0.2, false),
    ("Stormholt", "Northisle", 7_600.0, 1.65, false),
    ("Frostmere", "Northisle", 8_900.0, 1.95, false),
];

pub fn location(row: &Row) -> Location {
    let (name, region, r, theta, depot) = *row;
    Location::new(name, region, r, theta, depot).expect("fixture rows are valid")
}

/// The full archipelago, depots listed first.
pub fn archipelago() -> Country {
    let locations = DEPOTS.iter().chain(SETTLEMENTS).map(location).collect();
    Country::with_options(locations, RoutingOptions::new(13.9).expect("positive speed"))
        .expect("valid options")
}

pub fn id(country: &Country, name: &str) -> LocationId {
    country
        .find(name)
        .unwrap_or_else(|| panic!("no location named {name}"))
}
