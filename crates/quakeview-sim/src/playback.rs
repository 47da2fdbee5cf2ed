//! Playback clock — the scrubbable simulated-time state machine.
//!
//! A single-threaded, cooperatively-scheduled clock: some external driver
//! (a frame loop, a fixed-step test harness) calls `tick` with its own
//! timestamps and the clock advances a bounded `elapsed_minutes` value.
//! One simulated minute passes per real second at 1× speed; the mapping is
//! deliberately non-physical so a multi-hour propagation stays scrubbable
//! in real time.

use quakeview_core::types::PlaybackState;

/// Bounded, scrubbable playback clock. Owns its `PlaybackState`
/// exclusively; all mutation goes through this API.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    state: PlaybackState,
    /// Timestamp of the previous tick while playing. Cleared on play and
    /// pause so the next tick never sees a stale frame reference.
    last_timestamp_secs: Option<f64>,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            state: PlaybackState::default(),
            last_timestamp_secs: None,
        }
    }
}

impl PlaybackClock {
    /// Clock over a fresh `[0, max_minutes]` timeline, paused at zero.
    /// Non-positive or non-finite bounds fall back to the default.
    pub fn new(max_minutes: f64) -> Self {
        let mut clock = Self::default();
        clock.set_bounds(max_minutes);
        clock
    }

    /// Current timeline position and play state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Start advancing. No-op while already playing or when the clock sits
    /// at its bound (a finished timeline must be re-wound by `seek` first).
    pub fn play(&mut self) {
        if self.state.is_playing || self.state.at_end() {
            return;
        }
        self.state.is_playing = true;
        self.last_timestamp_secs = None;
    }

    /// Stop advancing. Idempotent.
    pub fn pause(&mut self) {
        self.state.is_playing = false;
        self.last_timestamp_secs = None;
    }

    /// Jump to an absolute timeline position, clamped to the bounds.
    /// Works in any state and does not change play/pause; scrubbing
    /// backward is the one sanctioned violation of monotonicity.
    /// Non-finite targets are ignored.
    pub fn seek(&mut self, target_minutes: f64) {
        if !target_minutes.is_finite() {
            return;
        }
        self.state.elapsed_minutes = target_minutes.clamp(0.0, self.state.max_minutes);
    }

    /// Set the playback speed (simulated minutes per real second). Takes
    /// effect on the next tick. Non-positive or non-finite values are
    /// ignored.
    pub fn set_speed(&mut self, multiplier: f64) {
        if multiplier.is_finite() && multiplier > 0.0 {
            self.state.speed_multiplier = multiplier;
        }
    }

    /// Replace the timeline bound, clamping `elapsed_minutes` down if the
    /// new bound is tighter. Non-positive or non-finite bounds are ignored.
    pub fn set_bounds(&mut self, max_minutes: f64) {
        if !max_minutes.is_finite() || max_minutes <= 0.0 {
            return;
        }
        self.state.max_minutes = max_minutes;
        if self.state.elapsed_minutes > max_minutes {
            self.state.elapsed_minutes = max_minutes;
        }
    }

    /// Advance the clock to the given driver timestamp (seconds).
    ///
    /// Only meaningful while playing; a paused clock returns its state
    /// unchanged. The first tick after `play()` has no prior frame
    /// reference and advances by zero instead of jumping. A timestamp
    /// behind the previous one (host clock hiccup) also advances by zero.
    /// Reaching the bound clamps and auto-pauses; the animation never
    /// loops.
    pub fn tick(&mut self, timestamp_secs: f64) -> PlaybackState {
        if !self.state.is_playing || !timestamp_secs.is_finite() {
            return self.state;
        }

        let delta_secs = match self.last_timestamp_secs {
            Some(last) => (timestamp_secs - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_secs = Some(timestamp_secs);

        self.state.elapsed_minutes += delta_secs * self.state.speed_multiplier;
        if self.state.at_end() {
            self.state.elapsed_minutes = self.state.max_minutes;
            self.state.is_playing = false;
            self.last_timestamp_secs = None;
        }

        self.state
    }
}
