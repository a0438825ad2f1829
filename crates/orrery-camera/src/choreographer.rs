//! Timed camera transitions reconciled with interactive drag input.

use glam::Vec3;
use orrery_config::{CameraConfig, ViewMode};
use tracing::{debug, trace};

use crate::constraints::{ViewConstraintProfile, preset_pose};
use crate::orbit_control::{DragInput, OrbitControl};
use crate::pose::CameraPose;
use crate::transition::TransitionState;

/// Outcome of one [`Choreographer::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStatus {
    /// No transition was running; nothing moved.
    Idle,
    /// The pose stepped toward the target.
    InProgress { progress: f32 },
    /// The pose snapped onto the target and the view-mode bounds were applied.
    Completed,
}

/// Owner of the single authoritative camera pose.
///
/// Requests replace the running transition; nothing is queued. Each tick
/// steps the live pose toward the target (so drag input mid-flight is
/// absorbed rather than fought) and mirrors the result into the control.
#[derive(Debug, Clone)]
pub struct Choreographer {
    pose: CameraPose,
    transition: TransitionState,
    control: OrbitControl,
    view_mode: ViewMode,
    default_duration: f32,
}

impl Choreographer {
    /// Mount at `view_mode`'s preset pose with no transition running.
    pub fn new(config: &CameraConfig, view_mode: ViewMode, now: f64) -> Self {
        let pose = preset_pose(view_mode);
        let mut control = OrbitControl::new(config, &ViewConstraintProfile::for_mode(view_mode));
        control.update(&pose);
        Self {
            pose,
            transition: TransitionState::idle(pose, now),
            control,
            view_mode,
            default_duration: config.transition_seconds,
        }
    }

    /// Start moving toward a new pose. Replaces any running transition and
    /// leaves the current pose untouched until the next tick.
    pub fn request_transition(
        &mut self,
        target_position: Vec3,
        target_look_at: Vec3,
        duration_seconds: f32,
        now: f64,
    ) {
        if self.transition.active {
            debug!(
                "Camera transition to {} superseded after {:.0}%",
                self.transition.target_position,
                self.transition.progress(now) * 100.0
            );
        }
        self.transition = TransitionState::start(
            CameraPose::new(target_position, target_look_at),
            duration_seconds,
            now,
        );
        debug!(
            "Camera transition to {} looking at {} over {:.2}s",
            target_position, target_look_at, self.transition.duration_seconds
        );
    }

    /// [`request_transition`](Self::request_transition) with the configured duration.
    pub fn request_pose(&mut self, target: CameraPose, now: f64) {
        self.request_transition(target.position, target.look_at, self.default_duration, now);
    }

    /// Advance the running transition to `now`.
    pub fn tick(&mut self, now: f64) -> TransitionStatus {
        if !self.transition.active {
            return TransitionStatus::Idle;
        }
        let target = self.transition.target();
        let progress = self.transition.progress(now);

        if progress >= 1.0 {
            self.pose = target;
            self.control.update(&self.pose);
            let profile = ViewConstraintProfile::for_mode(self.view_mode);
            self.control.apply_profile(&profile);
            self.transition.active = false;
            debug!(
                "Camera transition complete at {}, {} bounds applied",
                self.pose.position, self.view_mode
            );
            return TransitionStatus::Completed;
        }

        self.pose.step_toward(&target, progress);
        self.control.update(&self.pose);
        trace!("Camera at {} ({:.3})", self.pose.position, progress);
        TransitionStatus::InProgress { progress }
    }

    /// Record `mode` and, without a selection, head for its preset pose.
    ///
    /// Bounds tighten immediately; anything the new mode relaxes waits for
    /// the transition to complete. Returns whether a transition started.
    pub fn set_view_mode(&mut self, mode: ViewMode, has_selection: bool, now: f64) -> bool {
        let previous = self.view_mode;
        self.view_mode = mode;
        if has_selection {
            debug!("View mode {previous} -> {mode} recorded, selection keeps the camera");
            return false;
        }
        debug!("View mode {previous} -> {mode}");
        self.control.tighten_to(&ViewConstraintProfile::for_mode(mode));
        self.request_pose(preset_pose(mode), now);
        true
    }

    /// Apply user drag input to the current pose. The transition target is
    /// never touched.
    pub fn apply_drag(&mut self, input: DragInput) -> bool {
        self.control.apply(&mut self.pose, input)
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    pub fn control(&self) -> &OrbitControl {
        &self.control
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.active
    }

    /// Duration used by [`request_pose`](Self::request_pose).
    pub fn default_duration(&self) -> f32 {
        self.default_duration
    }
}
