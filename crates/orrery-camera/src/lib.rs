//! Camera choreography: timed pose transitions reconciled with an
//! interactive drag-to-orbit control.
//!
//! The [`Choreographer`] owns the single authoritative [`CameraPose`]. New
//! destinations arrive through [`Choreographer::request_transition`]; every
//! frame [`Choreographer::tick`] steps the pose toward the destination and
//! mirrors it into the [`OrbitControl`]. Drag input goes through
//! [`Choreographer::apply_drag`] and only ever moves the current pose.

mod choreographer;
mod constraints;
mod orbit_control;
mod pose;
mod transition;

pub use choreographer::{Choreographer, TransitionStatus};
pub use constraints::{ViewConstraintProfile, preset_pose};
pub use orbit_control::{DragInput, OrbitControl, Spherical};
pub use pose::CameraPose;
pub use transition::{
    COMPLETION_TOLERANCE_SECONDS, DEFAULT_TRANSITION_SECONDS, MIN_TRANSITION_SECONDS,
    TransitionState,
};
