//! Test fixtures for depot-planner.
//!
//! Provides a small fictional country with three regions and three
//! candidate depots, plus helpers for building locations.

pub mod islands;

pub use islands::*;
