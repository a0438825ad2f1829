//! Pointer picking against body spheres and the published hover state.

use glam::{Vec2, Vec3};
use orrery_bodies::{BodyDescriptor, BodyId};
use orrery_camera::CameraPose;
use tracing::trace;

/// A half-line in scene space with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Returns `None` when `direction` cannot be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Ray through a point on the screen.
    ///
    /// `ndc` is the pointer in normalized device coordinates (`-1..1` on
    /// both axes, +Y up), `fov_y` the vertical field of view in radians and
    /// `aspect` the viewport width over height.
    pub fn from_camera(pose: &CameraPose, fov_y: f32, aspect: f32, ndc: Vec2) -> Option<Self> {
        let rotation = pose.rotation();
        let half_height = (fov_y * 0.5).tan();
        let direction = rotation * Vec3::NEG_Z
            + rotation * Vec3::X * (ndc.x * half_height * aspect)
            + rotation * Vec3::Y * (ndc.y * half_height);
        Self::new(pose.position, direction)
    }

    /// Distance along the ray to the first point inside the sphere.
    ///
    /// An origin inside the sphere hits at 0. Spheres entirely behind the
    /// origin are misses.
    pub fn sphere_hit(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_far = -b + sqrt_disc;
        if t_far < 0.0 {
            return None;
        }
        Some((-b - sqrt_disc).max(0.0))
    }
}

/// The body under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub id: BodyId,
    pub distance: f32,
}

/// Nearest body whose sphere the ray enters.
pub fn pick<'a, I>(ray: &Ray, bodies: I) -> Option<PickHit>
where
    I: IntoIterator<Item = (&'a BodyDescriptor, Vec3)>,
{
    bodies
        .into_iter()
        .filter_map(|(body, center)| {
            ray.sphere_hit(center, body.radius).map(|distance| PickHit {
                id: body.id.clone(),
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Pointer cursor shape for the hover state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Default,
    Pointer,
}

/// The hovered body, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: Option<BodyId>,
}

impl HoverState {
    pub fn cursor(&self) -> CursorIcon {
        if self.hovered.is_some() {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }
}

/// Turns per-frame pick results into hover changes.
#[derive(Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's pick result. Returns the new state only when the
    /// hovered body changed.
    pub fn update(&mut self, hit: Option<&BodyId>) -> Option<&HoverState> {
        if self.state.hovered.as_ref() == hit {
            return None;
        }
        trace!("Hover {:?} -> {:?}", self.state.hovered, hit);
        self.state.hovered = hit.cloned();
        Some(&self.state)
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::BodyKind;

    fn bodies() -> Vec<BodyDescriptor> {
        vec![
            BodyDescriptor::new("sun", "Sun", BodyKind::Star).with_radius(3.0),
            BodyDescriptor::new("earth", "Earth", BodyKind::Planet).with_radius(1.0),
        ]
    }

    #[test]
    fn test_sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::NEG_Z).unwrap();
        let t = ray.sphere_hit(Vec3::ZERO, 3.0).unwrap();
        assert!((t - 47.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_behind_is_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::Z).unwrap();
        assert!(ray.sphere_hit(Vec3::ZERO, 3.0).is_none());
    }

    #[test]
    fn test_origin_inside_hits_at_zero() {
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::X).unwrap();
        assert_eq!(ray.sphere_hit(Vec3::ZERO, 3.0), Some(0.0));
    }

    #[test]
    fn test_zero_direction_has_no_ray() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_pick_returns_nearest() {
        let bodies = bodies();
        let ray = Ray::new(Vec3::new(30.0, 0.0, 0.0), Vec3::NEG_X).unwrap();
        let placed = vec![(&bodies[0], Vec3::ZERO), (&bodies[1], Vec3::new(14.0, 0.0, 0.0))];
        let hit = pick(&ray, placed).unwrap();
        assert_eq!(hit.id.as_str(), "earth");
        assert!((hit.distance - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_pick_miss() {
        let bodies = bodies();
        let ray = Ray::new(Vec3::new(0.0, 20.0, 0.0), Vec3::X).unwrap();
        assert!(pick(&ray, bodies.iter().map(|b| (b, Vec3::ZERO))).is_none());
    }

    #[test]
    fn test_screen_center_ray_hits_look_at() {
        let pose = CameraPose::new(Vec3::new(0.0, 15.0, 35.0), Vec3::ZERO);
        let ray = Ray::from_camera(&pose, 50f32.to_radians(), 16.0 / 9.0, Vec2::ZERO).unwrap();
        let expected = (pose.look_at - pose.position).normalize();
        assert!((ray.direction - expected).length() < 1e-5);
        assert!(ray.sphere_hit(Vec3::ZERO, 3.0).is_some());

        let corner = Ray::from_camera(&pose, 50f32.to_radians(), 16.0 / 9.0, Vec2::ONE).unwrap();
        assert!(corner.sphere_hit(Vec3::ZERO, 3.0).is_none());
    }

    #[test]
    fn test_hover_publishes_changes_once() {
        let mut tracker = HoverTracker::new();
        let earth = BodyId::from("earth");
        assert_eq!(tracker.update(None), None);

        let state = tracker.update(Some(&earth)).cloned().unwrap();
        assert_eq!(state.cursor(), CursorIcon::Pointer);
        assert!(tracker.update(Some(&earth)).is_none());

        let cleared = tracker.update(None).cloned().unwrap();
        assert_eq!(cleared.cursor(), CursorIcon::Default);
        assert_eq!(tracker.state(), &HoverState::default());
    }
}
