//! Collaborator traits for the planner.
//!
//! Routing never depends on these; they exist so callers can plug in their
//! own visualisation.

use crate::country::{Country, LocationId};
use crate::error::Result;
use crate::render::RenderOptions;

/// Draws a country, optionally with a route on top.
///
/// Results of rendering are never fed back into routing. Callers in this
/// crate log a failed render and carry on.
pub trait Renderer {
    /// Scatter plot of every location in `country`.
    fn render_country(&self, country: &Country, options: &RenderOptions) -> Result<()>;

    /// The country with `path` overlaid. Consecutive ids are journeys.
    fn render_path(
        &self,
        country: &Country,
        path: &[LocationId],
        options: &RenderOptions,
    ) -> Result<()>;
}
