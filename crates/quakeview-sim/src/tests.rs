//! Tests for the visualization controller: response handling, playback
//! command processing, and live/static ring consistency.

use quakeview_core::commands::PlaybackCommand;
use quakeview_core::constants::EARTH_RADIUS_KM;
use quakeview_core::enums::WaveKind;
use quakeview_core::protocol::SimulationResponse;
use quakeview_core::types::GeoPoint;
use quakeview_geo::to_unit_vector;

use crate::controller::{ControllerConfig, VisualizationController};

const EPICENTER: GeoPoint = GeoPoint {
    lat_deg: 10.5,
    lon_deg: 166.3,
};

fn sample_response() -> SimulationResponse {
    serde_json::from_str(
        r#"{
            "rings": {
                "P": [{"minutes": 2.0, "radiusKm": 720.0}],
                "S": [{"minutes": 4.0, "radiusKm": 840.0}]
            }
        }"#,
    )
    .unwrap()
}

/// Angular radius (radians) of a ring around the given center, measured at
/// its first point.
fn measured_angular_radius(
    ring: &quakeview_core::types::GeodesicRing,
    center: GeoPoint,
    lon_offset_deg: f64,
) -> f64 {
    let center_unit = to_unit_vector(center, lon_offset_deg);
    ring.points[0]
        .normalize()
        .dot(center_unit)
        .clamp(-1.0, 1.0)
        .acos()
}

// ---- Response handling ----

#[test]
fn test_apply_response_fits_velocities() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    assert_eq!(controller.velocity(WaveKind::P).km_per_second, 6.0);
    assert_eq!(controller.velocity(WaveKind::S).km_per_second, 3.5);
}

#[test]
fn test_apply_response_sets_timeline_bound() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    let state = controller.playback_state();
    assert_eq!(state.max_minutes, 5.0, "ceil(4 * 1.1) = 5");
    assert_eq!(state.elapsed_minutes, 0.0);
    assert!(!state.is_playing);
}

#[test]
fn test_empty_response_degrades_to_defaults() {
    let mut controller = VisualizationController::default();
    let response: SimulationResponse = serde_json::from_str("{}").unwrap();
    controller.apply_response(EPICENTER, &response);

    let state = controller.playback_state();
    assert_eq!(state.max_minutes, 60.0);
    assert_eq!(controller.velocity(WaveKind::P).km_per_second, 6.0);
    assert_eq!(controller.velocity(WaveKind::S).km_per_second, 3.5);

    let snapshot = controller.tick(0.0).unwrap();
    assert!(snapshot.static_rings_p.is_empty());
    assert!(snapshot.static_rings_s.is_empty());
    // Live rings still exist, collapsed at t = 0.
    assert_eq!(snapshot.live_ring_p.len(), 180);
}

#[test]
fn test_new_response_supersedes_old_timeline() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());
    controller.queue_command(PlaybackCommand::Play);
    controller.tick(0.0);
    controller.tick(3.0);
    assert_eq!(controller.playback_state().elapsed_minutes, 3.0);

    // A replacement response resets playback before any subsequent tick.
    let replacement: SimulationResponse = serde_json::from_str("{}").unwrap();
    controller.apply_response(GeoPoint::new(-33.4, -70.6), &replacement);

    let state = controller.playback_state();
    assert_eq!(state.elapsed_minutes, 0.0);
    assert!(!state.is_playing);

    let snapshot = controller.tick(4.0).unwrap();
    assert_eq!(snapshot.epicenter, GeoPoint::new(-33.4, -70.6));
    assert_eq!(snapshot.playback.elapsed_minutes, 0.0);
}

// ---- Epicenter gating ----

#[test]
fn test_no_epicenter_emits_no_geometry() {
    let mut controller = VisualizationController::default();
    assert!(!controller.has_epicenter());

    controller.queue_command(PlaybackCommand::Play);
    assert!(controller.tick(0.0).is_none());
    assert!(controller.tick(10.0).is_none());
    // Queued commands are discarded while inert; play never engaged.
    assert!(!controller.playback_state().is_playing);
}

#[test]
fn test_clear_returns_to_inert() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());
    assert!(controller.tick(0.0).is_some());

    controller.clear();
    assert!(!controller.has_epicenter());
    assert!(controller.tick(1.0).is_none());
    assert_eq!(controller.playback_state().max_minutes, 60.0);
}

// ---- Playback via commands ----

#[test]
fn test_play_then_scrub_end_to_end() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    controller.queue_command(PlaybackCommand::Play);
    let snapshot = controller.tick(0.0).unwrap();
    assert!(snapshot.playback.is_playing);
    assert_eq!(snapshot.playback.elapsed_minutes, 0.0);

    // Two real seconds at 1x = two simulated minutes.
    let snapshot = controller.tick(2.0).unwrap();
    assert_eq!(snapshot.playback.elapsed_minutes, 2.0);

    // At t = 2 min the live P front has traveled 2 * 60 * 6.0 = 720 km and
    // must coincide with the static ring sampled at the same instant.
    let config = ControllerConfig::default();
    let live = measured_angular_radius(&snapshot.live_ring_p, EPICENTER, config.lon_offset_deg);
    let fixed =
        measured_angular_radius(&snapshot.static_rings_p[0], EPICENTER, config.lon_offset_deg);
    let expected = 720.0 / EARTH_RADIUS_KM;
    assert!((live - expected).abs() < 1e-9, "live {live} vs {expected}");
    assert!((live - fixed).abs() < 1e-9, "live ring must match static ring");
}

#[test]
fn test_seek_during_play_keeps_playing() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    controller.queue_command(PlaybackCommand::Play);
    controller.tick(0.0);
    controller.tick(1.0);

    controller.queue_command(PlaybackCommand::Seek { minutes: 4.0 });
    let snapshot = controller.tick(1.5).unwrap();
    assert!(snapshot.playback.is_playing, "seek must not pause");
    // 4.0 from the seek plus 0.5 min from the tick.
    assert_eq!(snapshot.playback.elapsed_minutes, 4.5);

    // Scrubbing immediately reflects in emitted geometry.
    let radius = measured_angular_radius(
        &snapshot.live_ring_p,
        EPICENTER,
        ControllerConfig::default().lon_offset_deg,
    );
    let expected = (4.5 * 60.0 * 6.0) / EARTH_RADIUS_KM;
    assert!((radius - expected).abs() < 1e-9);
}

#[test]
fn test_auto_pause_at_timeline_end() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    controller.queue_command(PlaybackCommand::Play);
    controller.tick(0.0);
    let snapshot = controller.tick(100.0).unwrap();
    assert_eq!(snapshot.playback.elapsed_minutes, 5.0);
    assert!(!snapshot.playback.is_playing);
}

#[test]
fn test_set_speed_command() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    controller.queue_commands([
        PlaybackCommand::SetSpeed { multiplier: 0.5 },
        PlaybackCommand::Play,
    ]);
    controller.tick(0.0);
    let snapshot = controller.tick(4.0).unwrap();
    assert_eq!(snapshot.playback.elapsed_minutes, 2.0);
}

// ---- Determinism / static geometry stability ----

#[test]
fn test_static_rings_identical_across_ticks() {
    let mut controller = VisualizationController::default();
    controller.apply_response(EPICENTER, &sample_response());

    controller.queue_command(PlaybackCommand::Play);
    let first = controller.tick(0.0).unwrap();
    let second = controller.tick(1.0).unwrap();

    // Static geometry is built once per response; every tick republishes
    // the same points bit-for-bit.
    assert_eq!(first.static_rings_p, second.static_rings_p);
    assert_eq!(first.static_rings_s, second.static_rings_s);
    assert_eq!(first.static_rings_p.len(), 1);
    assert_eq!(first.static_rings_s.len(), 1);
}

#[test]
fn test_snapshots_deterministic_for_same_inputs() {
    let run = || {
        let mut controller = VisualizationController::default();
        controller.apply_response(EPICENTER, &sample_response());
        controller.queue_command(PlaybackCommand::Play);
        let mut out = Vec::new();
        for i in 0..120 {
            let snapshot = controller.tick(i as f64 / 60.0).unwrap();
            out.push(serde_json::to_string(&snapshot).unwrap());
        }
        out
    };
    assert_eq!(run(), run(), "snapshot streams diverged for same inputs");
}
