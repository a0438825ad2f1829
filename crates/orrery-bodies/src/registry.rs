//! Validated, immutable body registry.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::descriptor::{BodyDescriptor, BodyId};
use crate::error::RegistryError;

/// Deepest allowed chain of `orbits_around` links (moon of a moon of ...).
pub const MAX_SATELLITE_DEPTH: usize = 8;

/// Serialized form of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    /// Bodies in display order.
    pub bodies: Vec<BodyDescriptor>,
}

/// Read-only collection of body descriptors, indexed by id.
///
/// Construction validates every invariant the rest of the engine relies on:
/// unique ids, finite data, non-negative radii, and an acyclic parent graph
/// whose links all resolve.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<BodyDescriptor>,
    index: HashMap<BodyId, usize>,
}

impl BodyRegistry {
    /// Build a registry from descriptors, preserving their order.
    pub fn new(bodies: Vec<BodyDescriptor>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if index.insert(body.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(body.id.clone()));
            }
            if !body.radius.is_finite() || body.radius < 0.0 {
                return Err(RegistryError::InvalidRadius {
                    id: body.id.clone(),
                    radius: body.radius,
                });
            }
            if !body.position.is_finite()
                || !body.orbital_rate.is_finite()
                || !body.rotation_rate.is_finite()
            {
                return Err(RegistryError::NonFinite(body.id.clone()));
            }
        }

        let registry = Self { bodies, index };
        for body in &registry.bodies {
            registry.validate_parent_chain(body)?;
        }
        Ok(registry)
    }

    /// Parse a RON [`BodyCatalog`] and validate it.
    pub fn from_ron_str(source: &str) -> Result<Self, RegistryError> {
        let catalog: BodyCatalog = ron::from_str(source).map_err(RegistryError::ParseError)?;
        Self::new(catalog.bodies)
    }

    /// Load a RON catalog from disk.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path).map_err(RegistryError::ReadError)?;
        let registry = Self::from_ron_str(&contents)?;
        info!(
            "Loaded {} bodies from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    fn validate_parent_chain(&self, body: &BodyDescriptor) -> Result<(), RegistryError> {
        let mut current = body;
        for _ in 0..=MAX_SATELLITE_DEPTH {
            let Some(parent_id) = &current.orbits_around else {
                return Ok(());
            };
            current = self
                .get(parent_id.as_str())
                .ok_or_else(|| RegistryError::UnknownParent {
                    id: current.id.clone(),
                    parent: parent_id.clone(),
                })?;
        }
        Err(RegistryError::ParentCycle(body.id.clone()))
    }

    /// Look up a body by id.
    pub fn get(&self, id: &str) -> Option<&BodyDescriptor> {
        self.index.get(id).map(|&i| &self.bodies[i])
    }

    /// Whether a body with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a body in catalog order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyDescriptor> {
        self.bodies.iter()
    }

    /// All bodies as a slice, in catalog order.
    pub fn as_slice(&self) -> &[BodyDescriptor] {
        &self.bodies
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The primary a body orbits, if any.
    pub fn primary_of(&self, id: &str) -> Option<&BodyDescriptor> {
        let parent = self.get(id)?.orbits_around.as_ref()?;
        self.get(parent.as_str())
    }

    /// Walk from a body's primary up to its root primary.
    pub fn ancestors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a BodyDescriptor> + 'a {
        let mut next = self.primary_of(id);
        std::iter::from_fn(move || {
            let current = next?;
            next = current
                .orbits_around
                .as_ref()
                .and_then(|parent| self.get(parent.as_str()));
            Some(current)
        })
    }

    /// Bodies that orbit `id` directly.
    pub fn satellites_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a BodyDescriptor> {
        self.bodies
            .iter()
            .filter(move |b| b.orbits_around.as_ref().is_some_and(|p| p.as_str() == id))
    }

    /// Number of `orbits_around` links between a body and its root.
    pub fn depth(&self, id: &str) -> Option<usize> {
        self.get(id)?;
        Some(self.ancestors(id).count())
    }

    /// Scene position of a body when every orbit angle is zero: its own
    /// catalog position plus the positions of every primary above it.
    pub fn anchor_position(&self, id: &str) -> Option<Vec3> {
        let body = self.get(id)?;
        let inherited: Vec3 = self.ancestors(id).map(|primary| primary.position).sum();
        Some(body.position + inherited)
    }

    /// The serializable catalog form of this registry.
    pub fn to_catalog(&self) -> BodyCatalog {
        BodyCatalog {
            bodies: self.bodies.clone(),
        }
    }
}
