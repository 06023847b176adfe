//! Named geographic points.

use serde::{Deserialize, Serialize};

/// A named location with latitude/longitude in degrees.
///
/// Coordinates are taken at face value: out-of-range values are the
/// caller's problem, not validated here. Two points with identical
/// coordinates are still distinct entities (distinguished by name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Photo URL for popup rendering. Empty when none is available.
    #[serde(default)]
    pub photo: String,
}

impl Point {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            photo: String::new(),
        }
    }

    pub fn with_photo(name: impl Into<String>, lat: f64, lon: f64, photo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            photo: photo.into(),
        }
    }

    /// Coordinates as a (lat, lon) pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}
