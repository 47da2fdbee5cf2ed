//! Shared state between the frame loop thread and its owner.

use std::sync::{Arc, Mutex};

use quakeview_core::commands::PlaybackCommand;
use quakeview_core::state::GeometrySnapshot;

/// Commands sent from the control surface to the frame loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    /// A playback command to forward to the visualization controller.
    Playback(PlaybackCommand),
    /// Shut down the frame loop thread gracefully. Mandatory on teardown:
    /// no tick may fire after disposal.
    Shutdown,
}

/// Latest published snapshot, shared with the frame loop thread for
/// synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<GeometrySnapshot>>>;

/// Fresh, empty snapshot slot.
pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}
