//! Frame loop thread — drives the visualization controller at a fixed
//! frame rate and publishes geometry snapshots.
//!
//! The controller is moved into the thread; commands arrive via `mpsc`
//! channel and snapshots land in shared state for synchronous polling.
//! Shutdown (or channel disconnect) stops the loop before the next tick —
//! the cancellation contract: nothing fires after disposal.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use quakeview_core::constants::FRAME_RATE;
use quakeview_sim::VisualizationController;

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawn the frame loop in a new thread.
///
/// Returns the command sender for the control surface plus the join
/// handle for teardown.
pub fn spawn_frame_loop(
    controller: VisualizationController,
    latest_snapshot: SharedSnapshot,
) -> (mpsc::Sender<LoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("quakeview-frame-loop".into())
        .spawn(move || {
            run_frame_loop(controller, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    (cmd_tx, handle)
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_frame_loop(
    mut controller: VisualizationController,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let started = Instant::now();
    let mut next_frame_time = Instant::now();
    debug!("frame loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Playback(cmd)) => {
                    controller.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => {
                    debug!("frame loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("frame loop command channel dropped");
                    return;
                }
            }
        }

        // 2. Advance one frame (controller handles pause/inert semantics)
        let timestamp_secs = started.elapsed().as_secs_f64();
        let snapshot = controller.tick(timestamp_secs);

        // 3. Publish the latest snapshot for synchronous polling
        if snapshot.is_some() {
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = snapshot;
            }
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
