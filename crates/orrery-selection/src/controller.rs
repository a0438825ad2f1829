//! Selection state and the camera framing of a selected body.

use std::sync::Arc;

use glam::Vec3;
use orrery_bodies::{BodyDescriptor, BodyId, BodyKind, BodyRegistry};
use orrery_camera::{CameraPose, Choreographer, DragInput, TransitionStatus, preset_pose};
use orrery_config::ViewMode;
use tracing::debug;

use crate::observer::SelectionObserver;

/// Body radii of eye distance beyond a selected star.
pub const STAR_FRAMING_FACTOR: f32 = 12.0;

/// Body radii of eye distance beyond any other selected body.
pub const BODY_FRAMING_FACTOR: f32 = 8.0;

/// Fixed lift added to every framing so the body is seen slightly from above.
pub const FRAMING_LIFT: Vec3 = Vec3::new(0.0, 3.0, 0.5);

/// Camera pose that frames `id` at its zero-angle anchor.
///
/// The anchor is the body's catalog position composed with its primaries'
/// positions. The eye sits beyond it along the direction away from the
/// origin, scaled by the body radius.
/// Returns `None` for an unknown id.
pub fn framing_for(registry: &BodyRegistry, id: &str) -> Option<CameraPose> {
    let body = registry.get(id)?;
    let anchor = registry.anchor_position(id)?;
    let outward = anchor.try_normalize().unwrap_or(Vec3::X);
    let factor = match body.kind {
        BodyKind::Star => STAR_FRAMING_FACTOR,
        _ => BODY_FRAMING_FACTOR,
    };
    let position = anchor + outward * (body.radius * factor) + FRAMING_LIFT;
    Some(CameraPose::new(position, anchor))
}

/// Owns the selection and the camera choreographer it drives.
pub struct SelectionController {
    registry: Arc<BodyRegistry>,
    choreographer: Choreographer,
    selection: Option<BodyId>,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionController {
    pub fn new(registry: Arc<BodyRegistry>, choreographer: Choreographer) -> Self {
        Self {
            registry,
            choreographer,
            selection: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer of selection changes.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Select a body and fly the camera to its framing.
    ///
    /// Unknown ids are ignored. Selecting the already-selected body restarts
    /// the transition. Returns whether the selection was applied.
    pub fn select_body(&mut self, id: &str, now: f64) -> bool {
        let Some(framing) = framing_for(&self.registry, id) else {
            debug!("Ignoring selection of unknown body '{id}'");
            return false;
        };
        let registry = Arc::clone(&self.registry);
        let Some(body) = registry.get(id) else {
            return false;
        };
        debug!("Selected {} ({})", body.name, body.id);
        self.selection = Some(body.id.clone());
        self.choreographer.request_pose(framing, now);
        self.notify(Some(body));
        true
    }

    /// Drop the selection and return to the current view mode's preset.
    pub fn clear_selection(&mut self, now: f64) {
        if let Some(previous) = self.selection.take() {
            debug!("Cleared selection of {previous}");
        }
        let preset = preset_pose(self.choreographer.view_mode());
        self.choreographer.request_pose(preset, now);
        self.notify(None);
    }

    /// Record a view mode. The camera only moves when nothing is selected.
    pub fn set_view_mode(&mut self, mode: ViewMode, now: f64) -> bool {
        self.choreographer
            .set_view_mode(mode, self.selection.is_some(), now)
    }

    /// Advance the camera transition.
    pub fn tick(&mut self, now: f64) -> TransitionStatus {
        self.choreographer.tick(now)
    }

    /// Forward user drag input to the camera.
    pub fn apply_drag(&mut self, input: DragInput) -> bool {
        self.choreographer.apply_drag(input)
    }

    /// Id of the selected body.
    pub fn selection(&self) -> Option<&BodyId> {
        self.selection.as_ref()
    }

    /// Descriptor of the selected body.
    pub fn selected(&self) -> Option<&BodyDescriptor> {
        self.selection
            .as_ref()
            .and_then(|id| self.registry.get(id.as_str()))
    }

    pub fn registry(&self) -> &Arc<BodyRegistry> {
        &self.registry
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn choreographer_mut(&mut self) -> &mut Choreographer {
        &mut self.choreographer
    }

    fn notify(&mut self, body: Option<&BodyDescriptor>) {
        for observer in &mut self.observers {
            observer.on_selection_changed(body);
        }
    }
}
