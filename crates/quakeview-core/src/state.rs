//! Geometry snapshot — the complete render input published after each frame.

use serde::{Deserialize, Serialize};

use crate::types::{GeodesicRing, GeoPoint, PlaybackState};

/// Everything the (external) renderer needs for one frame: the timeline
/// position plus static and live ring geometry. Static rings are built once
/// per simulation response; only the live pair is recomputed per tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    /// Propagation origin the geometry is centered on.
    pub epicenter: GeoPoint,
    /// Timeline position at the instant this snapshot was produced.
    pub playback: PlaybackState,
    /// One ring per P-wave sample in the current response.
    pub static_rings_p: Vec<GeodesicRing>,
    /// One ring per S-wave sample in the current response.
    pub static_rings_s: Vec<GeodesicRing>,
    /// Animated P wavefront at the current simulated time.
    pub live_ring_p: GeodesicRing,
    /// Animated S wavefront at the current simulated time.
    pub live_ring_s: GeodesicRing,
}
