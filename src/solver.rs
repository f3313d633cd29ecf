//! Routing over a [`Country`]: next-hop selection, nearest-neighbour tours
//! and depot site search.

use rayon::prelude::*;

use crate::country::{Country, LocationId};
use crate::error::{PlannerError, Result};
use crate::render::{RenderOptions, TracingRenderer};
use crate::tour::{DepotSite, Tour};
use crate::traits::Renderer;

impl Country {
    /// Pick the candidate reachable from `current` in the least time.
    ///
    /// Exact ties go to the candidate that appears first in `candidates`.
    pub fn fastest_trip_from(
        &self,
        current: LocationId,
        candidates: &[LocationId],
    ) -> Result<(LocationId, f64)> {
        let (position, time) = self.fastest_position(current, candidates)?;
        Ok((candidates[position], time))
    }

    /// Greedy nearest-neighbour (by travel time) tour from `starting_depot`.
    ///
    /// Visits every settlement once and does not return to the depot.
    pub fn nn_tour(&self, starting_depot: LocationId) -> Result<Tour> {
        let depot = self.location(starting_depot)?;
        if !depot.is_depot() {
            return Err(PlannerError::invalid_argument(
                "starting_depot",
                format!("{} is not a depot", depot),
            ));
        }

        // Kept in country order so ties resolve the same way every run.
        let mut unvisited = self.settlements();
        let mut path = Vec::with_capacity(unvisited.len() + 1);
        path.push(starting_depot);

        let mut current = starting_depot;
        let mut total_time = 0.0;

        while !unvisited.is_empty() {
            let (position, time) = self.fastest_position(current, &unvisited)?;
            let next = unvisited.remove(position);

            path.push(next);
            total_time += time;
            current = next;
        }

        Ok(Tour::new(path, total_time))
    }

    /// Find the depot whose nearest-neighbour tour is fastest.
    ///
    /// With `display` set, the winning tour is drawn through
    /// [`TracingRenderer`]. Drawing never changes the result.
    pub fn best_depot_site(&self, display: bool) -> Result<DepotSite> {
        let site = self.search_depots()?;
        if display {
            self.render_site(&TracingRenderer::default(), &site);
        }
        Ok(site)
    }

    /// Same as [`Country::best_depot_site`], drawing the winner with `renderer`.
    pub fn best_depot_site_with<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<DepotSite> {
        let site = self.search_depots()?;
        self.render_site(renderer, &site);
        Ok(site)
    }

    fn search_depots(&self) -> Result<DepotSite> {
        let depots = self.depots();
        if depots.is_empty() {
            return Err(PlannerError::invalid_argument(
                "country",
                "has no depots to choose from",
            ));
        }

        let tours = depots
            .par_iter()
            .map(|&depot| self.nn_tour(depot))
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<Tour> = None;
        for tour in tours {
            tracing::debug!(
                depot = tour.depot().index(),
                total_time = tour.total_time(),
                "evaluated depot candidate"
            );

            let improves = best
                .as_ref()
                .is_none_or(|current| tour.total_time() < current.total_time());
            if improves {
                best = Some(tour);
            }
        }

        let tour = best.ok_or_else(|| {
            PlannerError::invalid_argument("country", "has no depots to choose from")
        })?;
        let depot = tour.depot();

        if let Some(location) = self.get(depot) {
            tracing::info!(
                depot = location.name(),
                region = location.region(),
                total_time = tour.total_time(),
                candidates = depots.len(),
                "selected depot site"
            );
        }

        Ok(DepotSite { depot, tour })
    }

    fn render_site<R: Renderer + ?Sized>(&self, renderer: &R, site: &DepotSite) {
        if let Err(err) = self.plot_path(renderer, site.tour.path(), &RenderOptions::default()) {
            tracing::warn!(error = %err, "failed to render depot tour");
        }
    }

    fn fastest_position(
        &self,
        current: LocationId,
        candidates: &[LocationId],
    ) -> Result<(usize, f64)> {
        if candidates.is_empty() {
            return Err(PlannerError::invalid_argument(
                "candidates",
                "must contain at least one location",
            ));
        }

        let mut best_position = 0;
        let mut best_time = f64::INFINITY;

        for (position, &candidate) in candidates.iter().enumerate() {
            let time = self.travel_time(current, candidate)?;
            // strict comparison keeps the earliest candidate on ties
            if time < best_time {
                best_time = time;
                best_position = position;
            }
        }

        Ok((best_position, best_time))
    }
}
