//! Path densification for marker animation.
//!
//! Inserts synthetic points between road path vertices so a marker can be
//! moved in roughly even steps. Interpolation is linear in lat/lon, not
//! geodesic; at the step sizes used for animation the error is invisible,
//! and downstream playback timing assumes this shape.

use crate::haversine::haversine_m;
use crate::polyline::Polyline;

/// A synthetic point along a path segment.
///
/// `offset_m` is the distance from the start of the segment the point was
/// generated on, not a cumulative path offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedPoint {
    pub lat: f64,
    pub lon: f64,
    pub offset_m: f64,
}

/// Densifies `path` so consecutive output points are roughly `step_m`
/// apart.
///
/// Each segment emits `ceil(distance / step_m)` points (at least one, so a
/// zero-length segment or a non-positive step cannot loop or divide by
/// zero), then the final path vertex is appended once with offset 0.
/// Output order follows the path; an empty path yields no points.
pub fn interpolate(path: &Polyline, step_m: f64) -> Vec<InterpolatedPoint> {
    let points = path.points();
    if points.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for pair in points.windows(2) {
        let (lat1, lon1) = pair[0];
        let (lat2, lon2) = pair[1];
        let dist = haversine_m(pair[0], pair[1]);

        let steps = if step_m > 0.0 {
            ((dist / step_m).ceil() as usize).max(1)
        } else {
            1
        };

        for s in 0..steps {
            let frac = s as f64 / steps as f64;
            out.push(InterpolatedPoint {
                lat: lat1 + (lat2 - lat1) * frac,
                lon: lon1 + (lon2 - lon1) * frac,
                offset_m: dist * frac,
            });
        }
    }

    let (last_lat, last_lon) = points[points.len() - 1];
    out.push(InterpolatedPoint {
        lat: last_lat,
        lon: last_lon,
        offset_m: 0.0,
    });

    out
}
