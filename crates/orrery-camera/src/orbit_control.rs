//! Interactive drag-to-orbit control around a live target point.

use std::f32::consts::PI;

use glam::Vec3;
use orrery_config::CameraConfig;

use crate::constraints::ViewConstraintProfile;
use crate::pose::CameraPose;

/// Keeps the polar angle off the poles so the view direction never aligns
/// with the up axis.
const POLAR_EPSILON: f32 = 1e-6;

/// Offset of the eye from the target in spherical form.
///
/// `polar` is measured from +Y, `azimuth` about +Y from +Z toward +X.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Spherical {
    /// Decompose a cartesian offset. A zero offset yields all zeros.
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self::default();
        }
        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    /// Cartesian offset of this spherical coordinate.
    pub fn to_offset(self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }
}

/// One unit of user drag input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Pointer delta in pixels while orbiting.
    Rotate { dx: f32, dy: f32 },
    /// Scroll lines; positive zooms in.
    Zoom { lines: f32 },
    /// Pointer delta in pixels while panning.
    Pan { dx: f32, dy: f32 },
}

/// Orbit control state: live target, rotation bounds, pan flag and the
/// spherical offset last derived from the camera pose.
///
/// [`update`](Self::update) only re-derives state from a pose; it never
/// moves the camera. Bounds are enforced when user input rotates or zooms.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControl {
    /// Point the control orbits around.
    pub target: Vec3,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_azimuth_angle: f32,
    pub max_azimuth_angle: f32,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    spherical: Spherical,
    update_count: u64,
}

impl OrbitControl {
    /// Control with speeds and distance limits from `config`, bounded by `profile`.
    pub fn new(config: &CameraConfig, profile: &ViewConstraintProfile) -> Self {
        let min_distance = config.min_distance.max(0.0);
        let mut control = Self {
            target: Vec3::ZERO,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            enable_pan: true,
            min_distance,
            max_distance: config.max_distance.max(min_distance),
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            spherical: Spherical::default(),
            update_count: 0,
        };
        control.apply_profile(profile);
        control
    }

    /// The bounds currently enforced, as a profile.
    pub fn profile(&self) -> ViewConstraintProfile {
        ViewConstraintProfile {
            min_polar_angle: self.min_polar_angle,
            max_polar_angle: self.max_polar_angle,
            min_azimuth_angle: self.min_azimuth_angle,
            max_azimuth_angle: self.max_azimuth_angle,
            allow_pan: self.enable_pan,
        }
    }

    /// Replace every bound and the pan flag with `profile`'s.
    pub fn apply_profile(&mut self, profile: &ViewConstraintProfile) {
        self.min_polar_angle = profile.min_polar_angle;
        self.max_polar_angle = profile.max_polar_angle;
        self.min_azimuth_angle = profile.min_azimuth_angle;
        self.max_azimuth_angle = profile.max_azimuth_angle;
        self.enable_pan = profile.allow_pan;
    }

    /// Narrow the current bounds toward `profile` without widening any of them.
    pub fn tighten_to(&mut self, profile: &ViewConstraintProfile) {
        let tightened = self.profile().intersect(profile);
        self.apply_profile(&tightened);
    }

    /// Re-derive target and spherical state from `pose`.
    pub fn update(&mut self, pose: &CameraPose) {
        self.target = pose.look_at;
        self.spherical = Spherical::from_offset(pose.position - pose.look_at);
        self.update_count += 1;
    }

    /// Spherical offset as of the last [`update`](Self::update).
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Number of [`update`](Self::update) calls so far.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Apply one drag input to `pose`. Returns whether the pose changed.
    pub fn apply(&mut self, pose: &mut CameraPose, input: DragInput) -> bool {
        match input {
            DragInput::Rotate { dx, dy } => self.rotate(pose, dx, dy),
            DragInput::Zoom { lines } => self.zoom(pose, lines),
            DragInput::Pan { dx, dy } => self.pan(pose, dx, dy),
        }
    }

    /// Orbit the eye around the look-at point, clamped to the current bounds.
    ///
    /// A pose already outside the bounds, such as a body framing under the
    /// top-down limits, is not snapped back: the drag may move it toward the
    /// allowed range but never further out.
    pub fn rotate(&mut self, pose: &mut CameraPose, dx: f32, dy: f32) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        let mut spherical = Spherical::from_offset(pose.position - pose.look_at);
        spherical.azimuth = clamp_from(
            spherical.azimuth,
            spherical.azimuth - dx * self.rotate_speed,
            self.min_azimuth_angle,
            self.max_azimuth_angle,
        );
        spherical.polar = clamp_from(
            spherical.polar,
            spherical.polar - dy * self.rotate_speed,
            self.min_polar_angle,
            self.max_polar_angle,
        )
        .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.place(pose, spherical)
    }

    /// Scale the eye distance by the zoom factor per scroll line, clamped to
    /// `[min_distance, max_distance]`.
    pub fn zoom(&mut self, pose: &mut CameraPose, lines: f32) -> bool {
        if !lines.is_finite() || lines == 0.0 {
            return false;
        }
        let mut spherical = Spherical::from_offset(pose.position - pose.look_at);
        let scale = (1.0 + self.zoom_speed * 0.1).powf(lines);
        spherical.radius = (spherical.radius / scale)
            .max(self.min_distance)
            .min(self.max_distance);
        self.place(pose, spherical)
    }

    /// Slide eye and look-at together in the view plane. No-op when panning
    /// is disabled.
    pub fn pan(&mut self, pose: &mut CameraPose, dx: f32, dy: f32) -> bool {
        if !self.enable_pan || !dx.is_finite() || !dy.is_finite() {
            return false;
        }
        let rotation = pose.rotation();
        let delta = (rotation * Vec3::NEG_X * dx + rotation * Vec3::Y * dy) * self.pan_speed;
        if delta == Vec3::ZERO {
            return false;
        }
        pose.position += delta;
        pose.look_at += delta;
        self.update(pose);
        true
    }

    fn place(&mut self, pose: &mut CameraPose, spherical: Spherical) -> bool {
        let before = pose.position;
        pose.position = pose.look_at + spherical.to_offset();
        self.update(pose);
        pose.position != before
    }
}

/// Clamp `proposed` to `[min, max]` widened to include `current`.
fn clamp_from(current: f32, proposed: f32, min: f32, max: f32) -> f32 {
    proposed.max(min.min(current)).min(max.max(current))
}
