//! Playback engine for QUAKEVIEW.
//!
//! Owns the timeline clock and the wavefront velocity fit, and produces
//! GeometrySnapshots for the renderer. Completely headless (no render or
//! network dependency), enabling deterministic testing.

pub use quakeview_core as core;

pub mod controller;
pub mod playback;
pub mod wavefront;

pub use controller::VisualizationController;
pub use playback::PlaybackClock;

#[cfg(test)]
mod tests;
