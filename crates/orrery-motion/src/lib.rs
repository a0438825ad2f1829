//! Orbit motion driver: per-frame revolution and axial spin of every body.
//!
//! Orbits are circles at fixed radii. Each body keeps its own orbit angle,
//! measured in its primary's frame, and a spin angle. Only revolution is
//! scaled by the [`SpeedMode`](orrery_config::SpeedMode) multiplier.

mod driver;
mod path;

pub use driver::{BodyMotion, MotionDriver, pulse_scale};
pub use path::{DEFAULT_ORBIT_SEGMENTS, circle_point, orbit_path};
