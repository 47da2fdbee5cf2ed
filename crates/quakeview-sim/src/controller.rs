//! Visualization controller — composes projection, velocity fit, and the
//! playback clock into a frame-driven snapshot producer.
//!
//! `VisualizationController` owns the current simulation response, queues
//! playback commands for processing at the next frame boundary, and emits
//! `GeometrySnapshot`s. Completely headless (no render or network
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use quakeview_core::commands::PlaybackCommand;
use quakeview_core::constants::{
    DEFAULT_RING_SEGMENTS, DEFAULT_TIMELINE_MINUTES, SURFACE_LIFT, TEXTURE_LON_OFFSET_DEG,
    TIMELINE_MARGIN,
};
use quakeview_core::enums::WaveKind;
use quakeview_core::protocol::{RingSet, SimulationResponse};
use quakeview_core::state::GeometrySnapshot;
use quakeview_core::types::{GeodesicRing, GeoPoint, PlaybackState, WaveVelocity};
use quakeview_geo::RingProjector;

use crate::playback::PlaybackClock;
use crate::wavefront;

/// Configuration for the visualization controller.
pub struct ControllerConfig {
    /// Texture-seam longitude offset (degrees), applied uniformly.
    pub lon_offset_deg: f64,
    /// Radial lift of ring points above the unit sphere.
    pub surface_lift: f64,
    /// Ring resolution in samples per ring.
    pub ring_segments: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            lon_offset_deg: TEXTURE_LON_OFFSET_DEG,
            surface_lift: SURFACE_LIFT,
            ring_segments: DEFAULT_RING_SEGMENTS,
        }
    }
}

/// The controller. Owns the clock, the projector, and the geometry derived
/// from the current simulation response.
pub struct VisualizationController {
    projector: RingProjector,
    ring_segments: usize,
    clock: PlaybackClock,
    command_queue: VecDeque<PlaybackCommand>,

    epicenter: Option<GeoPoint>,
    velocity_p: WaveVelocity,
    velocity_s: WaveVelocity,
    // Static geometry is built once per response, never per tick.
    static_rings_p: Vec<GeodesicRing>,
    static_rings_s: Vec<GeodesicRing>,
}

impl VisualizationController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            projector: RingProjector::new(config.lon_offset_deg, config.surface_lift),
            ring_segments: config.ring_segments,
            clock: PlaybackClock::new(DEFAULT_TIMELINE_MINUTES),
            command_queue: VecDeque::new(),
            epicenter: None,
            velocity_p: WaveKind::P.default_velocity(),
            velocity_s: WaveKind::S.default_velocity(),
            static_rings_p: Vec::new(),
            static_rings_s: Vec::new(),
        }
    }

    /// Queue a playback command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlaybackCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlaybackCommand>) {
        self.command_queue.extend(commands);
    }

    /// Install a new simulation response for the given epicenter.
    ///
    /// Fully supersedes the previous timeline before any subsequent tick:
    /// static rings are rebuilt once, velocities refitted, the playback
    /// bound recomputed (10% headroom over the last arrival, or the
    /// 60-minute default when the response carries no samples), and the
    /// clock rewound to zero, paused.
    pub fn apply_response(&mut self, epicenter: GeoPoint, response: &SimulationResponse) {
        let rings = response.rings.clone().unwrap_or_default();

        self.velocity_p = wavefront::velocity_or_default(rings.samples(WaveKind::P), WaveKind::P);
        self.velocity_s = wavefront::velocity_or_default(rings.samples(WaveKind::S), WaveKind::S);

        self.static_rings_p = self.build_static_rings(epicenter, &rings, WaveKind::P);
        self.static_rings_s = self.build_static_rings(epicenter, &rings, WaveKind::S);

        self.clock.pause();
        self.clock.set_bounds(timeline_bound(&rings));
        self.clock.seek(0.0);

        self.epicenter = Some(epicenter);
        self.command_queue.clear();
    }

    /// Drop all geometry and playback state, e.g. after a failed
    /// user-initiated replacement. The controller goes back to emitting
    /// nothing until the next response arrives.
    pub fn clear(&mut self) {
        self.epicenter = None;
        self.static_rings_p.clear();
        self.static_rings_s.clear();
        self.velocity_p = WaveKind::P.default_velocity();
        self.velocity_s = WaveKind::S.default_velocity();
        self.clock = PlaybackClock::new(DEFAULT_TIMELINE_MINUTES);
        self.command_queue.clear();
    }

    /// Advance one frame and return the geometry to render.
    ///
    /// Drains queued commands, ticks the clock, recomputes the two live
    /// wavefront rings from the fitted velocities, and republishes the
    /// full geometry set. Static rings are cloned from the per-response
    /// build, never reprojected here. Without an epicenter the controller
    /// is inert: queued commands are discarded and no geometry is emitted.
    pub fn tick(&mut self, timestamp_secs: f64) -> Option<GeometrySnapshot> {
        let epicenter = match self.epicenter {
            Some(epicenter) => epicenter,
            None => {
                self.command_queue.clear();
                return None;
            }
        };

        self.process_commands();
        let playback = self.clock.tick(timestamp_secs);

        let live_p = self.velocity_p.radius_km_after(playback.elapsed_minutes);
        let live_s = self.velocity_s.radius_km_after(playback.elapsed_minutes);

        Some(GeometrySnapshot {
            epicenter,
            playback,
            static_rings_p: self.static_rings_p.clone(),
            static_rings_s: self.static_rings_s.clone(),
            live_ring_p: self.projector.project(epicenter, live_p, self.ring_segments),
            live_ring_s: self.projector.project(epicenter, live_s, self.ring_segments),
        })
    }

    /// Current playback state (read-only control surface for the UI layer).
    pub fn playback_state(&self) -> PlaybackState {
        self.clock.state()
    }

    /// Whether an epicenter has been chosen yet.
    pub fn has_epicenter(&self) -> bool {
        self.epicenter.is_some()
    }

    /// Fitted wavefront velocity for a wave class.
    pub fn velocity(&self, kind: WaveKind) -> WaveVelocity {
        match kind {
            WaveKind::P => self.velocity_p,
            WaveKind::S => self.velocity_s,
        }
    }

    fn build_static_rings(
        &self,
        epicenter: GeoPoint,
        rings: &RingSet,
        kind: WaveKind,
    ) -> Vec<GeodesicRing> {
        rings
            .samples(kind)
            .iter()
            .map(|sample| {
                self.projector
                    .project(epicenter, sample.radius_km, self.ring_segments)
            })
            .collect()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlaybackCommand::Play => self.clock.play(),
                PlaybackCommand::Pause => self.clock.pause(),
                PlaybackCommand::Seek { minutes } => self.clock.seek(minutes),
                PlaybackCommand::SetSpeed { multiplier } => self.clock.set_speed(multiplier),
            }
        }
    }
}

impl Default for VisualizationController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

/// Playback bound for a response: 10% headroom over the latest arrival so
/// the last static ring is not flush against the timeline's right edge,
/// rounded up to a whole minute; the 60-minute default when no usable
/// sample exists.
fn timeline_bound(rings: &RingSet) -> f64 {
    match rings.last_arrival_minutes() {
        Some(latest) if latest > 0.0 => (latest * TIMELINE_MARGIN).ceil(),
        _ => DEFAULT_TIMELINE_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakeview_core::types::RingSample;

    fn rings(p: Vec<RingSample>, s: Vec<RingSample>) -> RingSet {
        RingSet { p, s }
    }

    #[test]
    fn test_timeline_bound_with_samples() {
        let set = rings(
            vec![RingSample::new(2.0, 720.0)],
            vec![RingSample::new(4.0, 840.0)],
        );
        // ceil(4.0 * 1.1) = 5.
        assert_eq!(timeline_bound(&set), 5.0);
    }

    #[test]
    fn test_timeline_bound_defaults_without_samples() {
        assert_eq!(timeline_bound(&RingSet::default()), 60.0);
        let degenerate = rings(vec![RingSample::new(0.0, 100.0)], vec![]);
        assert_eq!(timeline_bound(&degenerate), 60.0);
    }

    #[test]
    fn test_timeline_bound_rounds_up() {
        let set = rings(vec![RingSample::new(10.0, 3600.0)], vec![]);
        // ceil(10 * 1.1) = 11.
        assert_eq!(timeline_bound(&set), 11.0);
    }
}
