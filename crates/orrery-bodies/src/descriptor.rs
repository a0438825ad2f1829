//! Per-body descriptor types.

use std::borrow::Borrow;
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique identifier of a body within a registry (e.g. `"earth"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(String);

impl BodyId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for BodyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Broad classification of a body. Drives camera framing distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// The central star. Framed from farther away than other bodies.
    Star,
    /// A planet orbiting the star.
    Planet,
    /// A dwarf planet orbiting the star.
    DwarfPlanet,
    /// A body orbiting another body that is not the star.
    Satellite,
}

/// How a body looks. Consumed only by rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Hex display color, used until a texture is available.
    pub color: String,
    /// Texture reference. A missing or failed texture falls back to `color`.
    pub texture: Option<String>,
    /// Whether a ring system is drawn around the body.
    pub has_rings: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: "#FFFFFF".to_string(),
            texture: None,
            has_rings: false,
        }
    }
}

impl Appearance {
    /// Parse [`color`](Self::color) as `#RRGGBB` into linear-ish `[0, 1]` RGB.
    ///
    /// Returns `None` for malformed strings.
    pub fn rgb(&self) -> Option<[f32; 3]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| f32::from(v) / 255.0)
        };
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

/// Free-text information shown by the info panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyFacts {
    /// One-paragraph description.
    pub description: String,
    /// Short fact bullets.
    pub facts: Vec<String>,
    /// Human-readable distance from the star.
    pub distance_from_sun: Option<String>,
    /// Human-readable temperature range.
    pub temperature: Option<String>,
    /// Number of known natural satellites.
    pub moons: Option<u32>,
    /// Human-readable orbital period.
    pub orbit_period: Option<String>,
    /// Human-readable diameter.
    pub diameter: Option<String>,
}

/// Immutable description of a single body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique identifier.
    pub id: BodyId,
    /// Display name.
    pub name: String,
    /// Classification.
    pub kind: BodyKind,
    /// Position at orbit angle zero, relative to the primary (or the origin).
    pub position: Vec3,
    /// Body radius in scene units.
    pub radius: f32,
    /// Axial spin in radians per second.
    #[serde(default)]
    pub rotation_rate: f32,
    /// Revolution around the primary in radians per second at normal speed.
    #[serde(default)]
    pub orbital_rate: f32,
    /// The body this one orbits. `None` orbits the scene origin.
    #[serde(default)]
    pub orbits_around: Option<BodyId>,
    /// Rendering hints.
    #[serde(default)]
    pub appearance: Appearance,
    /// Info panel content.
    #[serde(default)]
    pub facts: BodyFacts,
}

impl BodyDescriptor {
    /// Minimal descriptor with default appearance and empty facts.
    pub fn new(id: impl Into<BodyId>, name: impl Into<String>, kind: BodyKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            position: Vec3::ZERO,
            radius: 1.0,
            rotation_rate: 0.0,
            orbital_rate: 0.0,
            orbits_around: None,
            appearance: Appearance::default(),
            facts: BodyFacts::default(),
        }
    }

    /// Set the position at orbit angle zero.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the body radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set orbital and axial angular rates.
    pub fn with_rates(mut self, orbital_rate: f32, rotation_rate: f32) -> Self {
        self.orbital_rate = orbital_rate;
        self.rotation_rate = rotation_rate;
        self
    }

    /// Attach this body to a primary.
    pub fn orbiting(mut self, primary: impl Into<BodyId>) -> Self {
        self.orbits_around = Some(primary.into());
        self
    }

    /// Distance from the primary (or origin), derived from [`position`](Self::position).
    pub fn orbit_radius(&self) -> f32 {
        self.position.length()
    }

    /// Whether this body orbits another body rather than the origin.
    pub fn is_satellite(&self) -> bool {
        self.orbits_around.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_radius_is_position_magnitude() {
        let body = BodyDescriptor::new("earth", "Earth", BodyKind::Planet)
            .with_position(Vec3::new(14.0, 0.0, 0.0));
        assert!((body.orbit_radius() - 14.0).abs() < 1e-6);

        let tilted = BodyDescriptor::new("x", "X", BodyKind::Planet)
            .with_position(Vec3::new(3.0, 0.0, 4.0));
        assert!((tilted.orbit_radius() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_origin_body_has_zero_orbit_radius() {
        let sun = BodyDescriptor::new("sun", "Sun", BodyKind::Star);
        assert_eq!(sun.orbit_radius(), 0.0);
        assert!(!sun.is_satellite());
    }

    #[test]
    fn test_orbiting_marks_satellite() {
        let moon = BodyDescriptor::new("moon", "Moon", BodyKind::Satellite).orbiting("earth");
        assert!(moon.is_satellite());
        assert_eq!(moon.orbits_around.as_ref().map(BodyId::as_str), Some("earth"));
    }

    #[test]
    fn test_hex_color_parses() {
        let appearance = Appearance {
            color: "#FF8000".to_string(),
            ..Default::default()
        };
        let [r, g, b] = appearance.rgb().unwrap();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }

    #[test]
    fn test_malformed_color_is_none() {
        for color in ["FF8000", "#FF80", "#GG0000", "#FF80001"] {
            let appearance = Appearance {
                color: color.to_string(),
                ..Default::default()
            };
            assert!(appearance.rgb().is_none(), "{color}");
        }
    }

    #[test]
    fn test_body_id_borrows_as_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(BodyId::from("mars"), 4);
        assert_eq!(map.get("mars"), Some(&4));
    }
}
