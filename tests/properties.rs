//! Property tests for distances, travel times and tours.

use std::collections::HashSet;
use std::f64::consts::PI;

use depot_planner::{Country, Location, RoutingOptions, travel_time};
use proptest::prelude::*;

const REGIONS: [&str; 3] = ["North", "South", "Coast"];

fn location_strategy() -> impl Strategy<Value = (f64, f64, usize, bool)> {
    (0.0_f64..5_000.0, -PI..PI, 0_usize..REGIONS.len(), any::<bool>())
}

/// Countries with at least one depot; the first row is always a depot.
fn country_strategy() -> impl Strategy<Value = Country> {
    (
        prop::collection::vec(location_strategy(), 1..16),
        0.5_f64..30.0,
    )
        .prop_map(|(rows, speed)| {
            let locations = rows
                .into_iter()
                .enumerate()
                .map(|(i, (r, theta, region, depot))| {
                    let name = format!("Place {i}");
                    Location::new(name, REGIONS[region], r, theta, depot || i == 0).unwrap()
                })
                .collect();
            Country::with_options(locations, RoutingOptions::new(speed).unwrap()).unwrap()
        })
}

proptest! {
    /// Distance is symmetric and zero from a point to itself.
    #[test]
    fn prop_distance_symmetric(
        a in location_strategy(),
        b in location_strategy(),
    ) {
        let a = Location::new("A", REGIONS[a.2], a.0, a.1, a.3).unwrap();
        let b = Location::new("B", REGIONS[b.2], b.0, b.1, b.3).unwrap();

        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        prop_assert!(a.distance_to(&b) >= 0.0);
        prop_assert_eq!(a.distance_to(&a), 0.0);
    }

    /// Crossing a region boundary always costs more than the same trip
    /// without the penalty.
    #[test]
    fn prop_cross_region_penalty(
        distance in 0.1_f64..100_000.0,
        count in 1_usize..50,
        speed in 0.1_f64..50.0,
    ) {
        let crossing = travel_time(distance, true, count, speed).unwrap();
        let staying = travel_time(distance, false, count, speed).unwrap();
        prop_assert!(crossing > staying, "{} should exceed {}", crossing, staying);
    }

    /// The chosen next hop is a candidate with minimal travel time.
    #[test]
    fn prop_fastest_trip_is_minimal(country in country_strategy()) {
        let start = country.depots()[0];
        let candidates: Vec<_> = country.ids().filter(|&id| id != start).collect();

        match country.fastest_trip_from(start, &candidates) {
            Ok((next, time)) => {
                prop_assert!(candidates.contains(&next));
                for &candidate in &candidates {
                    prop_assert!(time <= country.travel_time(start, candidate).unwrap());
                }
            }
            Err(err) => {
                prop_assert!(candidates.is_empty());
                prop_assert!(err.is_invalid_argument());
            }
        }
    }

    /// Tours start at the depot, visit every settlement once and sum
    /// their legs.
    #[test]
    fn prop_nn_tour_is_complete(country in country_strategy()) {
        let settlements: HashSet<_> = country.settlements().into_iter().collect();

        for depot in country.depots() {
            let tour = country.nn_tour(depot).unwrap();
            prop_assert_eq!(tour.path()[0], depot);
            prop_assert_eq!(tour.len(), 1 + settlements.len());

            let visited: HashSet<_> = tour.path()[1..].iter().copied().collect();
            prop_assert_eq!(&visited, &settlements);

            let summed: f64 = tour
                .legs()
                .map(|(from, to)| country.travel_time(from, to).unwrap())
                .sum();
            prop_assert!((tour.total_time() - summed).abs() <= 1e-9 * summed.max(1.0));
        }
    }

    /// No depot's tour beats the selected site.
    #[test]
    fn prop_best_depot_site_is_minimal(country in country_strategy()) {
        let site = country.best_depot_site(false).unwrap();
        prop_assert!(country.get(site.depot).unwrap().is_depot());

        for depot in country.depots() {
            let tour = country.nn_tour(depot).unwrap();
            prop_assert!(site.tour.total_time() <= tour.total_time());
        }
    }
}
