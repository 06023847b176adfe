//! Test fixtures for route-ranker.
//!
//! Provides real Kinshasa locations (from OpenStreetMap) used across the
//! ranking, animation, and OSRM integration tests.

pub mod kinshasa_locations;

pub use kinshasa_locations::*;
