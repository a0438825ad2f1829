//! Built-in stylized solar system.
//!
//! Distances and sizes are scene units chosen for legibility, not to scale.
//! Rates are radians per second at normal speed.

use glam::Vec3;

use crate::descriptor::{Appearance, BodyDescriptor, BodyFacts, BodyKind};
use crate::error::RegistryError;
use crate::registry::BodyRegistry;

struct Entry {
    id: &'static str,
    name: &'static str,
    kind: BodyKind,
    orbits_around: Option<&'static str>,
    distance: f32,
    radius: f32,
    orbital_rate: f32,
    rotation_rate: f32,
    color: &'static str,
    texture: Option<&'static str>,
    has_rings: bool,
    description: &'static str,
    facts: &'static [&'static str],
    distance_from_sun: Option<&'static str>,
    temperature: &'static str,
    moons: u32,
    orbit_period: Option<&'static str>,
    diameter: Option<&'static str>,
}

impl Entry {
    fn into_descriptor(self) -> BodyDescriptor {
        BodyDescriptor {
            id: self.id.into(),
            name: self.name.to_string(),
            kind: self.kind,
            position: Vec3::new(self.distance, 0.0, 0.0),
            radius: self.radius,
            rotation_rate: self.rotation_rate,
            orbital_rate: self.orbital_rate,
            orbits_around: self.orbits_around.map(Into::into),
            appearance: Appearance {
                color: self.color.to_string(),
                texture: self.texture.map(str::to_string),
                has_rings: self.has_rings,
            },
            facts: BodyFacts {
                description: self.description.to_string(),
                facts: self.facts.iter().map(|f| f.to_string()).collect(),
                distance_from_sun: self.distance_from_sun.map(str::to_string),
                temperature: Some(self.temperature.to_string()),
                moons: Some(self.moons),
                orbit_period: self.orbit_period.map(str::to_string),
                diameter: self.diameter.map(str::to_string),
            },
        }
    }
}

const ENTRIES: [Entry; 11] = [
    Entry {
        id: "sun",
        name: "Sun",
        kind: BodyKind::Star,
        orbits_around: None,
        distance: 0.0,
        radius: 3.0,
        orbital_rate: 0.0,
        rotation_rate: 0.005,
        color: "#FDB813",
        texture: Some("textures/2k_sun.jpg"),
        has_rings: false,
        description: "The Sun is the star at the center of the Solar System, a nearly perfect \
                      sphere of hot plasma holding about 99.86% of the system's mass.",
        facts: &[
            "The Sun is 109 times wider than Earth and 330,000 times as massive.",
            "Light from the Sun takes about 8 minutes to reach Earth.",
            "Its magnetic field drives sunspots and solar flares.",
        ],
        distance_from_sun: None,
        temperature: "5,500°C (surface), 15,000,000°C (core)",
        moons: 0,
        orbit_period: None,
        diameter: Some("1,392,700 km"),
    },
    Entry {
        id: "mercury",
        name: "Mercury",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 7.0,
        radius: 0.38,
        orbital_rate: 0.03,
        rotation_rate: 0.005,
        color: "#B5A192",
        texture: Some("textures/2k_mercury.jpg"),
        has_rings: false,
        description: "Mercury is the smallest planet and the closest to the Sun. It spins three \
                      times on its axis for every two orbits.",
        facts: &[
            "Mercury has almost no atmosphere, giving it extreme temperature swings.",
            "Its large iron core makes up about 60% of its mass.",
        ],
        distance_from_sun: Some("36-70 million km"),
        temperature: "-173°C to 427°C",
        moons: 0,
        orbit_period: Some("88 days"),
        diameter: Some("4,879.4 km"),
    },
    Entry {
        id: "venus",
        name: "Venus",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 10.5,
        radius: 0.95,
        orbital_rate: 0.02,
        rotation_rate: 0.002,
        color: "#E6C498",
        texture: Some("textures/2k_venus_surface.jpg"),
        has_rings: false,
        description: "Venus is the hottest planet, wrapped in a thick carbon dioxide atmosphere \
                      with clouds of sulfuric acid.",
        facts: &[
            "Venus rotates retrograde, opposite to most planets.",
            "A day on Venus is longer than its year.",
        ],
        distance_from_sun: Some("108 million km"),
        temperature: "462°C (average)",
        moons: 0,
        orbit_period: Some("225 days"),
        diameter: Some("12,104 km"),
    },
    Entry {
        id: "earth",
        name: "Earth",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 14.0,
        radius: 1.0,
        orbital_rate: 0.015,
        rotation_rate: 0.01,
        color: "#2A82C9",
        texture: Some("textures/2k_earth_daymap.jpg"),
        has_rings: false,
        description: "Earth is the third planet from the Sun and the only known world to \
                      harbor life. Water covers 71% of its surface.",
        facts: &[
            "Earth is the only planet not named after a god.",
            "Its magnetic field comes from liquid iron moving in the outer core.",
        ],
        distance_from_sun: Some("149.6 million km"),
        temperature: "-88°C to 58°C",
        moons: 1,
        orbit_period: Some("365.25 days"),
        diameter: Some("12,742 km"),
    },
    Entry {
        id: "moon",
        name: "Moon",
        kind: BodyKind::Satellite,
        orbits_around: Some("earth"),
        distance: 1.8,
        radius: 0.27,
        orbital_rate: 0.2,
        rotation_rate: 0.01,
        color: "#CCCCCC",
        texture: Some("textures/2k_moon.jpg"),
        has_rings: false,
        description: "The Moon is Earth's only natural satellite and the fifth largest moon in \
                      the Solar System.",
        facts: &[
            "The Moon drifts away from Earth by about 3.8 cm per year.",
            "Tidal locking keeps the same face turned toward Earth.",
            "Surface gravity is about 1/6 of Earth's.",
        ],
        distance_from_sun: Some("150 million km (same as Earth)"),
        temperature: "-173°C to 127°C",
        moons: 0,
        orbit_period: Some("27.3 days (around Earth)"),
        diameter: Some("3,474 km"),
    },
    Entry {
        id: "mars",
        name: "Mars",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 18.0,
        radius: 0.53,
        orbital_rate: 0.012,
        rotation_rate: 0.008,
        color: "#E27B58",
        texture: Some("textures/2k_mars.jpg"),
        has_rings: false,
        description: "Mars is the fourth planet from the Sun, a cold desert world with a thin \
                      atmosphere and polar ice caps.",
        facts: &[
            "Olympus Mons is the tallest known volcano in the Solar System.",
            "Iron oxide on its surface gives Mars its red color.",
        ],
        distance_from_sun: Some("227.9 million km"),
        temperature: "-153°C to 20°C",
        moons: 2,
        orbit_period: Some("687 days"),
        diameter: Some("6,779 km"),
    },
    Entry {
        id: "jupiter",
        name: "Jupiter",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 25.0,
        radius: 2.5,
        orbital_rate: 0.008,
        rotation_rate: 0.04,
        color: "#E6A479",
        texture: Some("textures/2k_jupiter.jpg"),
        has_rings: true,
        description: "Jupiter is the largest planet, a gas giant more than twice as massive as \
                      all other planets combined.",
        facts: &[
            "Jupiter has the shortest day, about 9.8 hours.",
            "The Great Red Spot has raged for at least 350 years.",
        ],
        distance_from_sun: Some("778.5 million km"),
        temperature: "-145°C (cloud tops)",
        moons: 79,
        orbit_period: Some("11.86 years"),
        diameter: Some("139,820 km"),
    },
    Entry {
        id: "saturn",
        name: "Saturn",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 33.0,
        radius: 2.2,
        orbital_rate: 0.006,
        rotation_rate: 0.03,
        color: "#E6CDC3",
        texture: Some("textures/2k_saturn.jpg"),
        has_rings: true,
        description: "Saturn is the second-largest planet, known for its prominent ring system \
                      of ice and rock.",
        facts: &[
            "Saturn is less dense than water.",
            "Its moon Titan has a thick atmosphere.",
        ],
        distance_from_sun: Some("1.4 billion km"),
        temperature: "-178°C (cloud tops)",
        moons: 82,
        orbit_period: Some("29.45 years"),
        diameter: Some("116,460 km"),
    },
    Entry {
        id: "uranus",
        name: "Uranus",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 40.0,
        radius: 1.8,
        orbital_rate: 0.004,
        rotation_rate: 0.02,
        color: "#CAF8FF",
        texture: Some("textures/2k_uranus.jpg"),
        has_rings: true,
        description: "Uranus is an ice giant that rotates on its side, tinted blue-green by \
                      methane.",
        facts: &[
            "Its axial tilt is 98 degrees.",
            "It was the first planet discovered with a telescope, in 1781.",
        ],
        distance_from_sun: Some("2.9 billion km"),
        temperature: "-224°C (cloud tops)",
        moons: 27,
        orbit_period: Some("84 years"),
        diameter: Some("50,724 km"),
    },
    Entry {
        id: "neptune",
        name: "Neptune",
        kind: BodyKind::Planet,
        orbits_around: None,
        distance: 47.0,
        radius: 1.7,
        orbital_rate: 0.003,
        rotation_rate: 0.01,
        color: "#5089F3",
        texture: Some("textures/2k_neptune.jpg"),
        has_rings: true,
        description: "Neptune is the farthest planet from the Sun and the densest giant planet.",
        facts: &[
            "Neptune was found by mathematical prediction before it was observed.",
            "Its winds reach 2,100 km/h.",
        ],
        distance_from_sun: Some("4.5 billion km"),
        temperature: "-214°C (cloud tops)",
        moons: 14,
        orbit_period: Some("164.8 years"),
        diameter: Some("49,244 km"),
    },
    Entry {
        id: "pluto",
        name: "Pluto (Dwarf Planet)",
        kind: BodyKind::DwarfPlanet,
        orbits_around: None,
        distance: 54.0,
        radius: 0.2,
        orbital_rate: 0.002,
        rotation_rate: 0.004,
        color: "#B3B3B3",
        texture: None,
        has_rings: false,
        description: "Pluto is a dwarf planet in the Kuiper belt, reclassified from planet \
                      status in 2006.",
        facts: &[
            "Its orbit sometimes brings it closer to the Sun than Neptune.",
            "New Horizons flew past Pluto in 2015.",
        ],
        distance_from_sun: Some("5.9 billion km (average)"),
        temperature: "-233°C (average)",
        moons: 5,
        orbit_period: Some("248.09 years"),
        diameter: Some("2,376 km"),
    },
];

/// Build the built-in solar system registry: the Sun, eight planets, Pluto,
/// and Earth's Moon.
pub fn solar_system() -> Result<BodyRegistry, RegistryError> {
    BodyRegistry::new(ENTRIES.into_iter().map(Entry::into_descriptor).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_is_valid() {
        let registry = solar_system().unwrap();
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn test_earth_matches_reference_values() {
        let registry = solar_system().unwrap();
        let earth = registry.get("earth").unwrap();
        assert!((earth.orbit_radius() - 14.0).abs() < 1e-6);
        assert!((earth.radius - 1.0).abs() < 1e-6);
        assert_eq!(earth.kind, BodyKind::Planet);
    }

    #[test]
    fn test_sun_is_stationary_star() {
        let registry = solar_system().unwrap();
        let sun = registry.get("sun").unwrap();
        assert_eq!(sun.kind, BodyKind::Star);
        assert_eq!(sun.orbital_rate, 0.0);
        assert!(sun.rotation_rate > 0.0);
        assert_eq!(sun.orbit_radius(), 0.0);
    }

    #[test]
    fn test_moon_orbits_earth() {
        let registry = solar_system().unwrap();
        let primary = registry.primary_of("moon").unwrap();
        assert_eq!(primary.id.as_str(), "earth");
        assert_eq!(registry.satellites_of("earth").count(), 1);
    }

    #[test]
    fn test_every_body_has_facts_and_valid_color() {
        let registry = solar_system().unwrap();
        for body in registry.iter() {
            assert!(!body.facts.description.is_empty(), "{}", body.id);
            assert!(!body.facts.facts.is_empty(), "{}", body.id);
            assert!(body.appearance.rgb().is_some(), "{}", body.id);
        }
    }

    #[test]
    fn test_planets_ordered_by_distance() {
        let registry = solar_system().unwrap();
        let distances: Vec<f32> = registry
            .iter()
            .filter(|b| !b.is_satellite())
            .map(|b| b.orbit_radius())
            .collect();
        for pair in distances.windows(2) {
            assert!(pair[0] < pair[1], "{distances:?}");
        }
    }
}
