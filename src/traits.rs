//! Core seam for road-network collaborators.
//!
//! The crate never computes shortest paths over a road graph itself; a
//! provider supplies the path geometry and the rest of the crate works
//! on plain coordinate sequences.

use crate::polyline::Polyline;

/// Supplies a drivable path between two (lat, lon) coordinates.
///
/// `None` means the collaborator could not produce a path (service down,
/// coordinates off the network). Callers typically fall back to
/// [`DirectPath`](crate::haversine::DirectPath).
pub trait RoutePathProvider {
    fn path_between(&self, from: (f64, f64), to: (f64, f64)) -> Option<Polyline>;
}
