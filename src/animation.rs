//! Timestamped track features for animated playback.
//!
//! Converts a road path into the GeoJSON-shaped feature sequence a map
//! renderer plays back as a moving marker. Timestamps are synthetic: each
//! emitted point advances the clock by `step_m / speed_m_s` seconds
//! regardless of the actual distance covered, a playback heuristic rather
//! than a physical simulation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::interpolate::interpolate;
use crate::polyline::Polyline;

/// Spacing between animation frames, in meters.
pub const DEFAULT_STEP_M: f64 = 40.0;

/// Assumed marker speed, ~36 km/h.
pub const DEFAULT_SPEED_M_S: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Target spacing between emitted points, in meters.
    pub step_m: f64,
    /// Assumed speed used to derive timestamps, in meters per second.
    pub speed_m_s: f64,
    /// Wall-clock time of the first frame.
    pub start_time: DateTime<Utc>,
}

impl AnimationConfig {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            step_m: DEFAULT_STEP_M,
            speed_m_s: DEFAULT_SPEED_M_S,
            start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<TrackFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    pub properties: TrackProperties,
}

/// GeoJSON point geometry; coordinates are [lon, lat].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProperties {
    /// RFC 3339 timestamp of the frame.
    pub time: String,
    pub popup: String,
    pub icon: String,
    pub iconstyle: IconStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconStyle {
    pub radius: u32,
}

/// Builds the timestamped feature sequence for a road path.
///
/// Interpolates the path at `config.step_m` spacing, then stamps each
/// point `step_m / speed_m_s` seconds after the previous one (truncated to
/// whole seconds), starting at `config.start_time`.
pub fn track_features(path: &Polyline, config: &AnimationConfig) -> TrackFeatureCollection {
    // Degenerate step or speed must not produce a non-finite or negative
    // clock; those frames all land on start_time instead.
    let step_secs = config.step_m / config.speed_m_s;
    let step_secs = if step_secs.is_finite() { step_secs.max(0.0) } else { 0.0 };

    let mut features = Vec::new();
    let mut elapsed = 0.0_f64;

    for (i, point) in interpolate(path, config.step_m).iter().enumerate() {
        let timestamp = config.start_time + Duration::seconds(elapsed as i64);
        features.push(TrackFeature {
            kind: "Feature".to_string(),
            geometry: PointGeometry {
                kind: "Point".to_string(),
                coordinates: [point.lon, point.lat],
            },
            properties: TrackProperties {
                time: timestamp.to_rfc3339(),
                popup: format!("Position {}", i),
                icon: "circle".to_string(),
                iconstyle: IconStyle { radius: 6 },
            },
        });
        elapsed += step_secs;
    }

    TrackFeatureCollection {
        kind: "FeatureCollection".to_string(),
        features,
    }
}
