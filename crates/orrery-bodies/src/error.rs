//! Registry construction errors.

use crate::BodyId;

/// Errors raised while building or loading a [`BodyRegistry`](crate::BodyRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two descriptors share an identifier.
    #[error("duplicate body id `{0}`")]
    DuplicateId(BodyId),

    /// A body radius is negative or not finite.
    #[error("body `{id}` has invalid radius {radius}")]
    InvalidRadius {
        /// Offending body.
        id: BodyId,
        /// The rejected radius.
        radius: f32,
    },

    /// A position or rate is NaN or infinite.
    #[error("body `{0}` has a non-finite position or rate")]
    NonFinite(BodyId),

    /// `orbits_around` names a body that is not in the catalog.
    #[error("body `{id}` orbits unknown body `{parent}`")]
    UnknownParent {
        /// Offending body.
        id: BodyId,
        /// The missing primary.
        parent: BodyId,
    },

    /// Following `orbits_around` from this body never reaches a root.
    #[error("body `{0}` is part of an orbit cycle or nests too deeply")]
    ParentCycle(BodyId),

    /// Failed to read a catalog file.
    #[error("failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse a RON catalog.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[source] ron::error::SpannedError),
}
