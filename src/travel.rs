//! Travel time model.
//!
//! Converts a straight-line distance into hours of travel at a fixed speed,
//! with a congestion penalty when the trip enters a different region.

use serde::Deserialize;

use crate::error::{PlannerError, Result};

/// Default travel speed in meters per second.
pub const DEFAULT_SPEED_MPS: f64 = 4.75;

/// Seconds per hour; `travel_time` reports hours.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Each location in the destination region adds this fraction of the base
/// time when crossing a region boundary.
const CONGESTION_DIVISOR: f64 = 10.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingOptions {
    /// Travel speed in meters per second. Must be finite and positive.
    pub speed: f64,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_MPS,
        }
    }
}

impl RoutingOptions {
    pub fn new(speed: f64) -> Result<Self> {
        let options = Self { speed };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        validate_speed(self.speed)
    }
}

/// Estimated travel time in hours.
///
/// `time = distance / (3600 * speed) * (1 + different_regions * locations_in_dest_region / 10)`
///
/// The penalty term only applies when `different_regions` is true.
pub fn travel_time(
    distance: f64,
    different_regions: bool,
    locations_in_dest_region: usize,
    speed: f64,
) -> Result<f64> {
    validate_speed(speed)?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(PlannerError::invalid_argument(
            "distance",
            format!("must be a finite, non-negative number of meters, got {distance}"),
        ));
    }

    let base_hours = distance / (SECONDS_PER_HOUR * speed);
    let penalty = if different_regions {
        locations_in_dest_region as f64 / CONGESTION_DIVISOR
    } else {
        0.0
    };

    Ok(base_hours * (1.0 + penalty))
}

fn validate_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid_argument(
            "speed",
            format!("must be a finite, positive number of meters per second, got {speed}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_region_has_no_penalty() {
        // 3600 m at 1 m/s = 1 hour, regardless of destination crowding
        let hours = travel_time(3600.0, false, 25, 1.0).unwrap();
        assert!((hours - 1.0).abs() < 1e-12, "got {}", hours);
    }

    #[test]
    fn test_cross_region_penalty_scales_with_count() {
        let hours = travel_time(3600.0, true, 3, 1.0).unwrap();
        assert!((hours - 1.3).abs() < 1e-12, "got {}", hours);

        let hours = travel_time(3600.0, true, 10, 2.0).unwrap();
        assert!((hours - 1.0).abs() < 1e-12, "got {}", hours);
    }

    #[test]
    fn test_cross_region_empty_destination() {
        let hours = travel_time(7200.0, true, 0, 1.0).unwrap();
        assert!((hours - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_is_zero_time() {
        assert_eq!(travel_time(0.0, true, 4, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_bad_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = travel_time(10.0, false, 1, speed).unwrap_err();
            assert!(
                matches!(err, PlannerError::InvalidArgument { argument: "speed", .. }),
                "speed {} should be rejected",
                speed
            );
        }
    }

    #[test]
    fn test_rejects_bad_distance() {
        assert!(travel_time(-1.0, false, 1, 1.0).is_err());
        assert!(travel_time(f64::NAN, false, 1, 1.0).is_err());
    }

    #[test]
    fn test_options_default_speed() {
        let options = RoutingOptions::default();
        assert_eq!(options.speed, DEFAULT_SPEED_MPS);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_new_validates() {
        assert!(RoutingOptions::new(1.0).is_ok());
        assert!(RoutingOptions::new(0.0).is_err());
    }
}
