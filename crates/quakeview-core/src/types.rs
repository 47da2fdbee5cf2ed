//! Fundamental geographic and playback value types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPEED_MULTIPLIER, DEFAULT_TIMELINE_MINUTES, EARTH_RADIUS_KM};

/// A geographic point on the spherical Earth model.
///
/// Latitude in degrees within [-90, 90], longitude in degrees nominally
/// within [-180, 180]. Equality is exact on both fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat_deg: f64,
    /// Longitude in degrees, positive east.
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// One (arrival time, propagation radius) sample for a wave class, as
/// returned by the simulation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSample {
    /// Elapsed simulation time at which the wavefront sits at `radius_km`.
    pub minutes: f64,
    /// Great-circle radius of the wavefront at that instant (km).
    pub radius_km: f64,
}

impl RingSample {
    pub fn new(minutes: f64, radius_km: f64) -> Self {
        Self { minutes, radius_km }
    }

    /// Angular radius of this ring (radians of arc on the sphere).
    pub fn angular_radius(&self) -> f64 {
        self.radius_km / EARTH_RADIUS_KM
    }
}

/// Estimated propagation velocity for one wave class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveVelocity {
    /// Propagation velocity in km/s. Always positive.
    pub km_per_second: f64,
}

impl WaveVelocity {
    pub fn new(km_per_second: f64) -> Self {
        Self { km_per_second }
    }

    /// Wavefront radius after the given elapsed simulation time (km).
    pub fn radius_km_after(&self, elapsed_minutes: f64) -> f64 {
        elapsed_minutes * 60.0 * self.km_per_second
    }
}

/// Snapshot of the playback timeline. Owned and mutated exclusively by the
/// playback clock; everyone else receives copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Current simulated time, clamped to [0, max_minutes].
    pub elapsed_minutes: f64,
    /// Upper bound of the timeline. Always positive.
    pub max_minutes: f64,
    /// Simulated minutes advanced per real second while playing.
    pub speed_multiplier: f64,
    /// Whether the clock advances on tick.
    pub is_playing: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            elapsed_minutes: 0.0,
            max_minutes: DEFAULT_TIMELINE_MINUTES,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            is_playing: false,
        }
    }
}

impl PlaybackState {
    /// Whether the clock sits at (or beyond) the end of the timeline.
    pub fn at_end(&self) -> bool {
        self.elapsed_minutes >= self.max_minutes
    }
}

/// A closed polyline approximating a circle of constant angular distance
/// around a center point, in render space (unit-sphere scale). The first
/// point implicitly connects to the last; recomputed whenever center,
/// radius, or resolution changes, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodesicRing {
    pub points: Vec<DVec3>,
}

impl GeodesicRing {
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
