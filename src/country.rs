//! The country: an ordered arena of locations plus per-region counts.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::location::Location;
use crate::render::RenderOptions;
use crate::traits::Renderer;
use crate::travel::{self, RoutingOptions};

/// Position of a location inside its [`Country`].
///
/// Identity is positional: two locations with identical fields are still
/// distinct entries with distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LocationId(usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Country {
    locations: Vec<Location>,
    region_counts: HashMap<String, usize>,
    options: RoutingOptions,
}

impl Country {
    /// Build a country travelling at [`travel::DEFAULT_SPEED_MPS`].
    pub fn new(locations: Vec<Location>) -> Self {
        Self::build(locations, RoutingOptions::default())
    }

    pub fn with_options(locations: Vec<Location>, options: RoutingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(locations, options))
    }

    fn build(locations: Vec<Location>, options: RoutingOptions) -> Self {
        let mut region_counts: HashMap<String, usize> = HashMap::new();
        let mut seen = HashSet::new();

        for location in &locations {
            *region_counts.entry(location.region().to_string()).or_default() += 1;

            // Routing works on ids, so duplicate names only affect display.
            if !seen.insert((location.region(), location.name())) {
                tracing::warn!(
                    name = location.name(),
                    region = location.region(),
                    "duplicate location name in region"
                );
            }
        }

        Self {
            locations,
            region_counts,
            options,
        }
    }

    pub fn options(&self) -> &RoutingOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// Like [`Country::get`], but an unknown id is an error.
    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.get(id).ok_or_else(|| {
            PlannerError::invalid_argument(
                "location",
                format!("{:?} does not belong to this country", id),
            )
        })
    }

    /// All ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len()).map(LocationId)
    }

    pub fn depots(&self) -> Vec<LocationId> {
        self.ids().filter(|id| self.locations[id.0].is_depot()).collect()
    }

    pub fn settlements(&self) -> Vec<LocationId> {
        self.ids()
            .filter(|id| self.locations[id.0].is_settlement())
            .collect()
    }

    /// First location with the given name (after title-casing).
    pub fn find(&self, name: &str) -> Option<LocationId> {
        let (name, _) = crate::location::title_case(name);
        self.ids().find(|id| self.locations[id.0].name() == name)
    }

    /// Region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        self.region_counts
            .keys()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of locations in `region`; the congestion factor for trips
    /// entering it.
    pub fn locations_in_region(&self, region: &str) -> usize {
        self.region_counts.get(region).copied().unwrap_or(0)
    }

    /// Estimated hours to travel from `start` to `end`.
    ///
    /// Not symmetric: the congestion penalty depends on the destination's
    /// region only.
    pub fn travel_time(&self, start: LocationId, end: LocationId) -> Result<f64> {
        let from = self.location(start)?;
        let to = self.location(end)?;

        travel::travel_time(
            from.distance_to(to),
            from.region() != to.region(),
            self.locations_in_region(to.region()),
            self.options.speed,
        )
    }

    pub fn plot_country<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        options: &RenderOptions,
    ) -> Result<()> {
        renderer.render_country(self, options)
    }

    /// Draw `path` on top of the country. Consecutive ids are journeys.
    pub fn plot_path<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        path: &[LocationId],
        options: &RenderOptions,
    ) -> Result<()> {
        for &id in path {
            self.location(id)?;
        }
        renderer.render_path(self, path, options)
    }
}
