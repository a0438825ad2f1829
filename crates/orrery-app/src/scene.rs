//! Per-frame snapshot handed to the renderer.

use glam::{Quat, Vec3};
use orrery_bodies::BodyId;
use orrery_camera::{CameraPose, TransitionStatus};
use orrery_selection::CursorIcon;

/// Placement of one body in the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTransform {
    pub id: BodyId,
    pub position: Vec3,
    /// Axial spin.
    pub rotation: Quat,
    /// 1.0 except for the pulsing selected body.
    pub scale: f32,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub frame: u64,
    pub now: f64,
    pub camera: CameraPose,
    pub camera_rotation: Quat,
    pub transition: TransitionStatus,
    /// Bodies in registry order.
    pub bodies: Vec<BodyTransform>,
    pub selected: Option<BodyId>,
    pub hovered: Option<BodyId>,
    pub cursor: CursorIcon,
}

impl SceneFrame {
    pub fn body(&self, id: &str) -> Option<&BodyTransform> {
        self.bodies.iter().find(|b| b.id.as_str() == id)
    }
}
