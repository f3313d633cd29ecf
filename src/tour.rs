//! Tour results.
//!
//! A tour is stored as location ids; resolving them to [`Location`]s
//! happens against the country that produced it.

use serde::Serialize;

use crate::country::{Country, LocationId};
use crate::location::Location;

/// An open tour: a depot followed by every settlement exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    path: Vec<LocationId>,
    total_time: f64,
}

impl Tour {
    pub(crate) fn new(path: Vec<LocationId>, total_time: f64) -> Self {
        Self { path, total_time }
    }

    /// The starting depot.
    pub fn depot(&self) -> LocationId {
        self.path[0]
    }

    pub fn path(&self) -> &[LocationId] {
        &self.path
    }

    /// Total travel time in hours.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Number of stops, depot included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consecutive (from, to) journeys.
    pub fn legs(&self) -> impl Iterator<Item = (LocationId, LocationId)> + '_ {
        self.path.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Resolve the path against the country it was built from.
    pub fn locations<'a>(
        &'a self,
        country: &'a Country,
    ) -> impl Iterator<Item = &'a Location> + 'a {
        self.path.iter().filter_map(move |&id| country.get(id))
    }
}

/// The winner of a depot site search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepotSite {
    pub depot: LocationId,
    pub tour: Tour,
}
