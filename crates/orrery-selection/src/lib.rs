//! Body selection, camera framing, and pointer hover picking.
//!
//! The [`SelectionController`] is the single entry point for "look at this
//! body" and "change the view mode" requests. It owns the camera
//! [`Choreographer`](orrery_camera::Choreographer), so a view-mode change
//! always sees the current selection.

mod controller;
mod observer;
mod picking;

pub use controller::{
    BODY_FRAMING_FACTOR, FRAMING_LIFT, STAR_FRAMING_FACTOR, SelectionController, framing_for,
};
pub use observer::SelectionObserver;
pub use picking::{CursorIcon, HoverState, HoverTracker, PickHit, Ray, pick};
