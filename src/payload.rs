//! Boundary payload for the route-ranking endpoint.
//!
//! The core keeps full f64 precision; distances are rounded to 0.1 m here,
//! at the serialization boundary.

use serde::{Deserialize, Serialize};

use crate::haversine::Segment;
use crate::point::Point;
use crate::solver::ScoredRoute;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub points: Vec<Point>,
    pub total_distance_m: f64,
    pub segments: Vec<Segment>,
}

impl RouteSummary {
    fn from_scored(route: &ScoredRoute) -> Self {
        Self {
            points: route.points.clone(),
            total_distance_m: round_tenth(route.total_distance_m),
            segments: route
                .segments
                .iter()
                .map(|segment| Segment {
                    from: segment.from.clone(),
                    to: segment.to.clone(),
                    distance_m: round_tenth(segment.distance_m),
                })
                .collect(),
        }
    }
}

/// Everything the frontend needs to draw the candidate routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePayload {
    pub start: Point,
    pub dest: Point,
    pub stops: Vec<Point>,
    pub all_routes: Vec<RouteSummary>,
    pub shortest_route: RouteSummary,
}

impl RoutePayload {
    /// Assembles the payload from ranked candidates.
    ///
    /// `ranked` must be the ascending output of
    /// [`rank_routes`](crate::solver::rank_routes); the first candidate
    /// becomes `shortest_route`. Returns `None` for an empty ranking.
    pub fn build(
        start: &Point,
        dest: &Point,
        stops: &[Point],
        ranked: &[ScoredRoute],
    ) -> Option<Self> {
        let shortest = ranked.first()?;
        Some(Self {
            start: start.clone(),
            dest: dest.clone(),
            stops: stops.to_vec(),
            all_routes: ranked.iter().map(RouteSummary::from_scored).collect(),
            shortest_route: RouteSummary::from_scored(shortest),
        })
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
