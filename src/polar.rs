//! Distances between points given in polar form.
//!
//! Locations are stored as (r, theta) pairs around the country's origin,
//! so the straight-line distance comes from the law of cosines rather than
//! a Cartesian difference.

/// Straight-line (chord) distance between two polar points.
///
/// Law of cosines rewritten as `hypot(r1 - r2, 2·sqrt(r1·r2)·sin(Δθ/2))`:
/// no squared radii to overflow and no negative radicand to clamp.
pub fn chord_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (r1, theta1) = from;
    let (r2, theta2) = to;

    let half_angle = ((theta1 - theta2) / 2.0).sin().abs();
    (r1 - r2).hypot(2.0 * r1.sqrt() * r2.sqrt() * half_angle)
}

/// Convert a polar point to Cartesian (x, y).
pub fn to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}
