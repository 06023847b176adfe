//! Great-circle distance model (plus straight-line path fallback).
//!
//! All route scoring in this crate is great-circle distance on a sphere.
//! Less accurate than road distance (ignores the street network) but
//! requires no external collaborator.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::polyline::Polyline;
use crate::traits::RoutePathProvider;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two (lat, lon) pairs in degrees.
///
/// Symmetric, and zero for identical coordinates.
pub fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Haversine distance in meters between two named points.
pub fn distance_m(a: &Point, b: &Point) -> f64 {
    haversine_m(a.coords(), b.coords())
}

/// A leg between two adjacent points of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub distance_m: f64,
}

/// Total distance along an ordered point sequence, with the per-leg
/// breakdown. Sequences of length 0 or 1 have no legs and distance 0.
pub fn route_distance(points: &[Point]) -> (f64, Vec<Segment>) {
    let mut total = 0.0;
    let mut segments = Vec::new();
    for pair in points.windows(2) {
        let d = distance_m(&pair[0], &pair[1]);
        segments.push(Segment {
            from: pair[0].name.clone(),
            to: pair[1].name.clone(),
            distance_m: d,
        });
        total += d;
    }
    (total, segments)
}

/// Straight-line path provider (fallback when no road network is available).
///
/// Returns the two endpoints as the whole path. The interpolator then
/// densifies the single great-circle leg.
#[derive(Debug, Clone, Default)]
pub struct DirectPath;

impl RoutePathProvider for DirectPath {
    fn path_between(&self, from: (f64, f64), to: (f64, f64)) -> Option<Polyline> {
        Some(Polyline::new(vec![from, to]))
    }
}
