//! Immutable catalog of celestial bodies.
//!
//! A [`BodyRegistry`] is built once at startup, either from the built-in
//! [`solar_system`] catalog or from a RON file, and shared read-only with the
//! motion driver and the selection controller.

mod catalog;
mod descriptor;
mod error;
mod registry;

pub use catalog::solar_system;
pub use descriptor::{Appearance, BodyDescriptor, BodyFacts, BodyId, BodyKind};
pub use error::RegistryError;
pub use registry::{BodyCatalog, BodyRegistry, MAX_SATELLITE_DEPTH};
