//! Orrery session: couples orbit motion, selection, and camera choreography
//! into one per-frame update and publishes a [`SceneFrame`] snapshot for
//! the renderer.

pub mod error;
pub mod frame_clock;
pub mod scene;
pub mod session;

pub use error::AppError;
pub use frame_clock::{FrameClock, FrameTime, MAX_FRAME_TIME};
pub use scene::{BodyTransform, SceneFrame};
pub use session::OrrerySession;
