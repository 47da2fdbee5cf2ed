//! Playback commands sent from the control surface to the visualization.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All user-driven playback actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaybackCommand {
    /// Start advancing simulated time. No-op while playing or at the end
    /// of the timeline.
    Play,
    /// Stop advancing simulated time. Idempotent.
    Pause,
    /// Jump to an absolute position on the timeline (minutes). Clamped to
    /// the timeline bounds; does not change play/pause state.
    Seek { minutes: f64 },
    /// Set the playback speed in simulated minutes per real second.
    /// Takes effect on the next tick.
    SetSpeed { multiplier: f64 },
}
