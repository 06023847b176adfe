//! Polyline representation for road path geometries.
//!
//! This module provides a type for working with road paths as decoded
//! coordinate sequences. Encoding/decoding happens at the boundary
//! (when receiving from OSRM or sending to frontend).

use serde::{Deserialize, Serialize};

use crate::haversine::haversine_m;

/// A road path as a decoded coordinate sequence.
///
/// Stores (latitude, longitude) points directly for internal processing.
/// Encoding to/from compact polyline formats should happen at API
/// boundaries, not inside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) pair.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length of the path in meters.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_m(pair[0], pair[1]))
            .sum()
    }
}
