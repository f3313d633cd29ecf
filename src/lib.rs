//! depot-planner core
//!
//! A country of polar-positioned locations grouped into regions, and the
//! routing primitives built on it: travel time estimation, greedy next-hop
//! selection, nearest-neighbour tours and depot site selection.

pub mod error;
pub mod polar;
pub mod location;
pub mod travel;
pub mod country;
pub mod solver;
pub mod tour;
pub mod traits;
pub mod render;

pub use country::{Country, LocationId};
pub use error::{PlannerError, Result};
pub use location::Location;
pub use render::{RenderOptions, SvgRenderer, TracingRenderer};
pub use tour::{DepotSite, Tour};
pub use traits::Renderer;
pub use travel::{RoutingOptions, travel_time};
