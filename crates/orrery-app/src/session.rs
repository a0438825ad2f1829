//! One interactive orrery session.

use std::sync::Arc;

use glam::{Quat, Vec2, Vec3};
use orrery_bodies::{BodyId, BodyRegistry};
use orrery_camera::{Choreographer, DragInput};
use orrery_config::{Config, OrrerySettings, SpeedMode, ViewMode};
use orrery_motion::{MotionDriver, pulse_scale};
use orrery_selection::{
    CursorIcon, HoverTracker, Ray, SelectionController, SelectionObserver, pick,
};
use tracing::{debug, info, trace};

use crate::frame_clock::FrameTime;
use crate::scene::{BodyTransform, SceneFrame};

/// Motion, selection, camera and hover state of a running orrery.
///
/// Call [`frame`](Self::frame) once per rendered frame. Input handlers call
/// the setters between frames; their effects become visible on the next
/// frame.
pub struct OrrerySession {
    motion: MotionDriver,
    selection: SelectionController,
    hover: HoverTracker,
    fov_y: f32,
    aspect: f32,
}

impl OrrerySession {
    /// Start a session at time `now` with the speed and view from `config`.
    pub fn new(registry: Arc<BodyRegistry>, config: &Config, now: f64) -> Self {
        let settings = config.simulation.settings;
        let motion = MotionDriver::new(Arc::clone(&registry), settings.speed_mode);
        let choreographer = Choreographer::new(&config.camera, settings.view_mode, now);
        info!(
            "Orrery session with {} bodies, speed {}, view {}",
            registry.len(),
            settings.speed_mode,
            settings.view_mode
        );
        Self {
            motion,
            selection: SelectionController::new(registry, choreographer),
            hover: HoverTracker::new(),
            fov_y: config.camera.fov_degrees.to_radians(),
            aspect: 16.0 / 9.0,
        }
    }

    pub fn settings(&self) -> OrrerySettings {
        OrrerySettings {
            speed_mode: self.motion.speed_mode(),
            view_mode: self.selection.choreographer().view_mode(),
        }
    }

    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.motion.set_speed_mode(mode);
    }

    /// Returns whether the camera started moving.
    pub fn set_view_mode(&mut self, mode: ViewMode, now: f64) -> bool {
        self.selection.set_view_mode(mode, now)
    }

    pub fn select_body(&mut self, id: &str, now: f64) -> bool {
        self.selection.select_body(id, now)
    }

    pub fn clear_selection(&mut self, now: f64) {
        self.selection.clear_selection(now);
    }

    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) {
        self.selection.subscribe(observer);
    }

    pub fn apply_drag(&mut self, input: DragInput) -> bool {
        self.selection.apply_drag(input)
    }

    /// Viewport size in pixels, used to build picking rays.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Update hover from a pointer position in normalized device
    /// coordinates. Returns the new cursor only when the hovered body changed.
    pub fn pointer_moved(&mut self, ndc: Vec2) -> Option<CursorIcon> {
        let hit = self.pick_at(ndc);
        self.hover.update(hit.as_ref()).map(|state| state.cursor())
    }

    /// Select the body under the pointer. Clicking empty space does nothing.
    pub fn click(&mut self, ndc: Vec2, now: f64) -> bool {
        match self.pick_at(ndc) {
            Some(id) => self.selection.select_body(id.as_str(), now),
            None => false,
        }
    }

    /// Advance motion by `time.dt`, then the camera to `time.now`, and
    /// compose the frame snapshot.
    pub fn frame(&mut self, time: FrameTime) -> SceneFrame {
        self.motion.advance(time.dt);
        let transition = self.selection.tick(time.now);
        let camera = self.selection.choreographer().pose();
        trace!("Frame {} camera {}", time.frame, camera.position);

        let selected = self.selection.selection().cloned();
        let pulse = pulse_scale(time.now);
        let bodies = self
            .motion
            .world_positions()
            .into_iter()
            .map(|(body, position)| BodyTransform {
                id: body.id.clone(),
                position,
                rotation: self
                    .motion
                    .spin_rotation(body.id.as_str())
                    .unwrap_or(Quat::IDENTITY),
                scale: if selected.as_ref() == Some(&body.id) {
                    pulse
                } else {
                    1.0
                },
            })
            .collect();

        let hover = self.hover.state();
        SceneFrame {
            frame: time.frame,
            now: time.now,
            camera,
            camera_rotation: camera.rotation(),
            transition,
            bodies,
            selected,
            hovered: hover.hovered.clone(),
            cursor: hover.cursor(),
        }
    }

    /// Orbit rings of every orbiting body around its primary's current position.
    pub fn orbit_paths(&self, segments: usize) -> Vec<(BodyId, Vec<Vec3>)> {
        self.motion
            .registry()
            .iter()
            .filter_map(|body| {
                self.motion
                    .orbit_path(body.id.as_str(), segments)
                    .map(|path| (body.id.clone(), path))
            })
            .collect()
    }

    pub fn motion(&self) -> &MotionDriver {
        &self.motion
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    fn pick_at(&self, ndc: Vec2) -> Option<BodyId> {
        let pose = self.selection.choreographer().pose();
        let ray = Ray::from_camera(&pose, self.fov_y, self.aspect, ndc)?;
        let hit = pick(&ray, self.motion.world_positions());
        if let Some(hit) = &hit {
            debug!("Pointer over {} at {:.2}", hit.id, hit.distance);
        }
        hit.map(|hit| hit.id)
    }
}
