//! Camera position and look-at target.

use glam::{Mat3, Quat, Vec3};

/// Where the camera is and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in scene space.
    pub position: Vec3,
    /// Point the camera is aimed at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Create a pose from an eye position and a look-at point.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Distance between the eye and the look-at point.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_at)
    }

    /// One feedback step toward `target`: each component moves the fraction
    /// `progress` of its *remaining* distance.
    ///
    /// Applied from the live pose every frame, so motion decelerates as the
    /// pose closes in and stays stable when drag input perturbs it.
    pub fn step_toward(&mut self, target: &CameraPose, progress: f32) {
        self.position = self.position + (target.position - self.position) * progress;
        self.look_at = self.look_at + (target.look_at - self.look_at) * progress;
    }

    /// Orientation that looks from `position` toward `look_at` with +Y up.
    ///
    /// Falls back to identity when the two points coincide, and to a -Z up
    /// vector when looking straight down or up.
    pub fn rotation(&self) -> Quat {
        let to_target = self.look_at - self.position;
        if to_target.length_squared() <= 1e-12 {
            return Quat::IDENTITY;
        }
        // Camera looks down its local -Z.
        let back = -to_target.normalize();
        let mut right = Vec3::Y.cross(back);
        if right.length_squared() <= 1e-12 {
            right = Vec3::NEG_Z.cross(back);
        }
        let right = right.normalize();
        let up = back.cross(right);
        Quat::from_mat3(&Mat3::from_cols(right, up, back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_step_reaches_target() {
        let mut pose = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let target = CameraPose::new(Vec3::new(4.0, 8.0, -2.0), Vec3::new(1.0, 0.0, 0.0));
        pose.step_toward(&target, 1.0);
        assert!((pose.position - target.position).length() < 1e-6);
        assert!((pose.look_at - target.look_at).length() < 1e-6);
    }

    #[test]
    fn test_step_is_fraction_of_remaining_distance() {
        let mut pose = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let target = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        pose.step_toward(&target, 0.5);
        assert!((pose.position.x - 5.0).abs() < 1e-6);
        // Same progress again covers half of what is left, not half of the total.
        pose.step_toward(&target, 0.5);
        assert!((pose.position.x - 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_step_is_noop() {
        let mut pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let before = pose;
        pose.step_toward(&CameraPose::new(Vec3::splat(100.0), Vec3::ONE), 0.0);
        assert_eq!(pose, before);
    }

    #[test]
    fn test_rotation_faces_look_at() {
        let pose = CameraPose::new(Vec3::new(0.0, 15.0, 35.0), Vec3::ZERO);
        let forward = pose.rotation() * Vec3::NEG_Z;
        let expected = (pose.look_at - pose.position).normalize();
        assert!((forward - expected).length() < 1e-5, "{forward} vs {expected}");
    }

    #[test]
    fn test_rotation_straight_down_is_finite() {
        let pose = CameraPose::new(Vec3::new(0.0, 70.0, 0.0), Vec3::ZERO);
        let q = pose.rotation();
        assert!(q.is_finite());
        let forward = q * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_Y).length() < 1e-5, "{forward}");
    }

    #[test]
    fn test_degenerate_rotation_is_identity() {
        let pose = CameraPose::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(pose.rotation(), Quat::IDENTITY);
        assert_eq!(pose.distance(), 0.0);
    }
}
