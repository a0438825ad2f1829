//! Per-view-mode rotation bounds and preset poses.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6, PI};

use glam::Vec3;
use orrery_config::ViewMode;

use crate::pose::CameraPose;

/// Rotation and pan limits the interactive control enforces in a view mode.
///
/// Polar angles are measured from +Y (0 looks straight down); azimuth
/// angles are measured about +Y from +Z. Infinite azimuth bounds mean
/// unrestricted spinning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConstraintProfile {
    /// Smallest polar angle the user can rotate to.
    pub min_polar_angle: f32,
    /// Largest polar angle the user can rotate to.
    pub max_polar_angle: f32,
    /// Smallest azimuth angle the user can rotate to.
    pub min_azimuth_angle: f32,
    /// Largest azimuth angle the user can rotate to.
    pub max_azimuth_angle: f32,
    /// Whether panning moves the look-at target.
    pub allow_pan: bool,
}

impl ViewConstraintProfile {
    /// No rotation limits, panning allowed.
    pub const UNCONSTRAINED: Self = Self {
        min_polar_angle: 0.0,
        max_polar_angle: PI,
        min_azimuth_angle: f32::NEG_INFINITY,
        max_azimuth_angle: f32::INFINITY,
        allow_pan: true,
    };

    /// The profile for a view mode.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Free => Self::UNCONSTRAINED,
            ViewMode::TopDown => Self {
                min_polar_angle: 0.0,
                max_polar_angle: FRAC_PI_4,
                allow_pan: false,
                ..Self::UNCONSTRAINED
            },
            ViewMode::Side => Self {
                min_polar_angle: FRAC_PI_6,
                max_polar_angle: PI - FRAC_PI_6,
                allow_pan: false,
                ..Self::UNCONSTRAINED
            },
        }
    }

    /// The stricter combination of `self` and `other`: interval
    /// intersections for both angles, pan only if both allow it.
    ///
    /// An empty intersection takes `other`'s interval.
    pub fn intersect(&self, other: &Self) -> Self {
        let (min_polar_angle, max_polar_angle) = intersect_interval(
            (self.min_polar_angle, self.max_polar_angle),
            (other.min_polar_angle, other.max_polar_angle),
        );
        let (min_azimuth_angle, max_azimuth_angle) = intersect_interval(
            (self.min_azimuth_angle, self.max_azimuth_angle),
            (other.min_azimuth_angle, other.max_azimuth_angle),
        );
        Self {
            min_polar_angle,
            max_polar_angle,
            min_azimuth_angle,
            max_azimuth_angle,
            allow_pan: self.allow_pan && other.allow_pan,
        }
    }
}

fn intersect_interval(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    let lo = a.0.max(b.0);
    let hi = a.1.min(b.1);
    if lo <= hi { (lo, hi) } else { b }
}

/// Canonical camera pose for a view mode with no body selected.
pub fn preset_pose(mode: ViewMode) -> CameraPose {
    let position = match mode {
        ViewMode::Free => Vec3::new(0.0, 15.0, 35.0),
        ViewMode::TopDown => Vec3::new(0.0, 70.0, 0.0),
        ViewMode::Side => Vec3::new(60.0, 0.0, 0.0),
    };
    CameraPose::new(position, Vec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_is_unconstrained() {
        let p = ViewConstraintProfile::for_mode(ViewMode::Free);
        assert_eq!(p, ViewConstraintProfile::UNCONSTRAINED);
        assert!(p.allow_pan);
        assert!(p.min_azimuth_angle.is_infinite());
    }

    #[test]
    fn test_constrained_modes_forbid_pan() {
        assert!(!ViewConstraintProfile::for_mode(ViewMode::TopDown).allow_pan);
        assert!(!ViewConstraintProfile::for_mode(ViewMode::Side).allow_pan);
    }

    #[test]
    fn test_intersect_with_unconstrained_is_identity() {
        for mode in ViewMode::ALL {
            let p = ViewConstraintProfile::for_mode(mode);
            assert_eq!(ViewConstraintProfile::UNCONSTRAINED.intersect(&p), p);
            assert_eq!(p.intersect(&ViewConstraintProfile::UNCONSTRAINED), p);
        }
    }

    #[test]
    fn test_intersect_narrows_overlap() {
        let top = ViewConstraintProfile::for_mode(ViewMode::TopDown);
        let side = ViewConstraintProfile::for_mode(ViewMode::Side);
        let both = top.intersect(&side);
        assert!((both.min_polar_angle - FRAC_PI_6).abs() < 1e-6);
        assert!((both.max_polar_angle - FRAC_PI_4).abs() < 1e-6);
        assert!(!both.allow_pan);
    }

    #[test]
    fn test_disjoint_intersection_takes_other() {
        let a = ViewConstraintProfile {
            min_polar_angle: 0.0,
            max_polar_angle: 0.2,
            ..ViewConstraintProfile::UNCONSTRAINED
        };
        let b = ViewConstraintProfile {
            min_polar_angle: 1.0,
            max_polar_angle: 2.0,
            ..ViewConstraintProfile::UNCONSTRAINED
        };
        let r = a.intersect(&b);
        assert_eq!((r.min_polar_angle, r.max_polar_angle), (1.0, 2.0));
    }

    #[test]
    fn test_presets_look_at_origin() {
        for mode in ViewMode::ALL {
            let pose = preset_pose(mode);
            assert_eq!(pose.look_at, Vec3::ZERO);
            assert!(pose.distance() > 30.0, "{mode}");
        }
        assert_eq!(preset_pose(ViewMode::TopDown).position, Vec3::new(0.0, 70.0, 0.0));
        assert_eq!(preset_pose(ViewMode::Side).position, Vec3::new(60.0, 0.0, 0.0));
    }
}
