//! Timing state of the single in-flight camera transition.

use glam::Vec3;

use crate::pose::CameraPose;

/// Standard camera transition length in seconds.
pub const DEFAULT_TRANSITION_SECONDS: f32 = 1.5;

/// Shortest accepted transition. Shorter or invalid requests are raised to this.
pub const MIN_TRANSITION_SECONDS: f32 = 1e-3;

/// Elapsed time within this many seconds of the duration counts as complete.
///
/// Durations are `f32` while the clock is `f64`, so a frame landing on the
/// nominal end time can fall a few ulps short of the widened duration.
pub const COMPLETION_TOLERANCE_SECONDS: f64 = 1e-6;

/// Destination and clock of a camera transition.
///
/// There is exactly one per choreographer. A new request replaces it
/// wholesale; nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    /// Eye position to arrive at.
    pub target_position: Vec3,
    /// Look-at point to arrive at.
    pub target_look_at: Vec3,
    /// Timestamp of the request, in seconds.
    pub start_time: f64,
    /// Length of the transition in seconds, always `>= MIN_TRANSITION_SECONDS`.
    pub duration_seconds: f32,
    /// Whether ticks still move the camera.
    pub active: bool,
}

impl TransitionState {
    /// An active transition starting at `now`.
    pub fn start(target: CameraPose, duration_seconds: f32, now: f64) -> Self {
        let duration_seconds = if duration_seconds.is_finite() {
            duration_seconds.max(MIN_TRANSITION_SECONDS)
        } else {
            DEFAULT_TRANSITION_SECONDS
        };
        Self {
            target_position: target.position,
            target_look_at: target.look_at,
            start_time: now,
            duration_seconds,
            active: true,
        }
    }

    /// A finished transition resting at `pose`, used at mount.
    pub fn idle(pose: CameraPose, now: f64) -> Self {
        Self {
            active: false,
            ..Self::start(pose, DEFAULT_TRANSITION_SECONDS, now)
        }
    }

    /// The destination pose.
    pub fn target(&self) -> CameraPose {
        CameraPose::new(self.target_position, self.target_look_at)
    }

    /// Whether the transition has run its full duration at `now`.
    pub fn is_complete_at(&self, now: f64) -> bool {
        now - self.start_time >= f64::from(self.duration_seconds) - COMPLETION_TOLERANCE_SECONDS
    }

    /// Linear progress at `now`, clamped to `[0, 1]`. Exactly 1 once
    /// [`is_complete_at`](Self::is_complete_at) holds.
    ///
    /// A clock running backwards yields 0 rather than a negative step.
    pub fn progress(&self, now: f64) -> f32 {
        if self.is_complete_at(now) {
            return 1.0;
        }
        let elapsed = now - self.start_time;
        let t = elapsed / f64::from(self.duration_seconds);
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, 1.0) as f32
    }
}
