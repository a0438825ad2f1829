//! Circular orbit geometry.

use glam::{Quat, Vec3};

/// Segment count the scene uses when drawing an orbit ring.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 64;

/// Rotate a zero-angle offset about +Y by `angle` radians.
///
/// Positive angles move +X toward -Z, matching a right-handed Y-up scene.
pub fn circle_point(offset: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * offset
}

/// Closed polyline of `segments + 1` points tracing the orbit of `offset`
/// around `center`. The last point repeats the first.
///
/// Returns an empty path for `segments == 0`.
pub fn orbit_path(center: Vec3, offset: Vec3, segments: usize) -> Vec<Vec3> {
    if segments == 0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            center + circle_point(offset, angle)
        })
        .collect()
}
