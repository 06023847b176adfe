//! Brute-force stop-order ranking.
//!
//! Every visiting order of the intermediate stops is generated and scored
//! by total great-circle distance. Cost is O(stops!) orderings with
//! O(stops) distance evaluations each, so this explodes past ~8-10 stops;
//! [`RankOptions::max_stops`] bounds it by default.

use std::fmt;

use crate::haversine::{route_distance, Segment};
use crate::point::Point;

/// Default ceiling on the number of intermediate stops (8! = 40320 orderings).
pub const DEFAULT_MAX_STOPS: usize = 8;

#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Refuse to rank more stops than this. `None` disables the gate.
    pub max_stops: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_stops: Some(DEFAULT_MAX_STOPS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankError {
    TooManyStops { count: usize, limit: usize },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::TooManyStops { count, limit } => {
                write!(f, "{} stops exceed the ranking limit of {}", count, limit)
            }
        }
    }
}

impl std::error::Error for RankError {}

/// A candidate route with its score.
///
/// `points` always starts at the origin and ends at the destination, with
/// each stop appearing exactly once in between.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRoute {
    pub points: Vec<Point>,
    pub total_distance_m: f64,
    pub segments: Vec<Segment>,
}

/// Ranks every visiting order of `stops` between a fixed origin and
/// destination, ascending by total distance.
///
/// Ties keep generation order: orderings are produced lexicographically by
/// stop index (first remaining stop first) and the sort is stable, so the
/// result is deterministic. An empty stop set yields the single direct
/// route.
pub fn rank_routes(
    origin: &Point,
    destination: &Point,
    stops: &[Point],
    options: &RankOptions,
) -> Result<Vec<ScoredRoute>, RankError> {
    if let Some(limit) = options.max_stops {
        if stops.len() > limit {
            return Err(RankError::TooManyStops {
                count: stops.len(),
                limit,
            });
        }
    }

    let orderings = stop_orderings(stops.len());
    tracing::debug!(
        stops = stops.len(),
        candidates = orderings.len(),
        "ranking stop orderings"
    );

    let mut candidates = Vec::with_capacity(orderings.len());
    for ordering in orderings {
        let mut points = Vec::with_capacity(stops.len() + 2);
        points.push(origin.clone());
        points.extend(ordering.into_iter().map(|i| stops[i].clone()));
        points.push(destination.clone());

        let (total_distance_m, segments) = route_distance(&points);
        candidates.push(ScoredRoute {
            points,
            total_distance_m,
            segments,
        });
    }

    candidates.sort_by(|a, b| a.total_distance_m.total_cmp(&b.total_distance_m));
    Ok(candidates)
}

/// The minimum-distance candidate from [`rank_routes`].
pub fn shortest_route(
    origin: &Point,
    destination: &Point,
    stops: &[Point],
    options: &RankOptions,
) -> Result<ScoredRoute, RankError> {
    let mut ranked = rank_routes(origin, destination, stops, options)?;
    // rank_routes always returns at least the direct route
    Ok(ranked.swap_remove(0))
}

/// All permutations of `0..n`, lexicographic by index.
fn stop_orderings(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];
    fill_orderings(n, &mut current, &mut used, &mut out);
    out
}

fn fill_orderings(
    n: usize,
    current: &mut Vec<usize>,
    used: &mut [bool],
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == n {
        out.push(current.clone());
        return;
    }
    for i in 0..n {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(i);
        fill_orderings(n, current, used, out);
        current.pop();
        used[i] = false;
    }
}
