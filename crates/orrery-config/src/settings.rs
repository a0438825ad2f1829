//! Enumerated user-facing settings: orbit speed and camera view mode.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How fast bodies revolve around their primaries.
///
/// Only orbital revolution is scaled; axial spin always runs at its
/// catalog rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SpeedMode {
    /// Revolution frozen.
    Paused,
    /// Quarter speed.
    Slow,
    /// Catalog rates.
    #[default]
    Normal,
    /// Five times catalog rates.
    Fast,
    /// Fifteen times catalog rates.
    VeryFast,
}

impl SpeedMode {
    /// All speed modes in UI order.
    pub const ALL: [SpeedMode; 5] = [
        SpeedMode::Paused,
        SpeedMode::Slow,
        SpeedMode::Normal,
        SpeedMode::Fast,
        SpeedMode::VeryFast,
    ];

    /// Multiplier applied to orbital angular rates.
    pub fn multiplier(self) -> f32 {
        match self {
            SpeedMode::Paused => 0.0,
            SpeedMode::Slow => 0.25,
            SpeedMode::Normal => 1.0,
            SpeedMode::Fast => 5.0,
            SpeedMode::VeryFast => 15.0,
        }
    }
}

impl fmt::Display for SpeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeedMode::Paused => "paused",
            SpeedMode::Slow => "slow",
            SpeedMode::Normal => "normal",
            SpeedMode::Fast => "fast",
            SpeedMode::VeryFast => "very-fast",
        };
        f.write_str(name)
    }
}

/// Camera angle preset and the rotation constraints that go with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Angled overview with unconstrained rotation and panning.
    #[default]
    Free,
    /// Overhead view looking down the orbital plane normal.
    TopDown,
    /// Edge-on view of the orbital plane.
    Side,
}

impl ViewMode {
    /// All view modes in UI order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Free, ViewMode::TopDown, ViewMode::Side];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Free => "free",
            ViewMode::TopDown => "top-down",
            ViewMode::Side => "side",
        };
        f.write_str(name)
    }
}

/// The user-adjustable settings of a running orrery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrrerySettings {
    /// Orbital speed multiplier preset.
    pub speed_mode: SpeedMode,
    /// Camera view preset.
    pub view_mode: ViewMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_multiplier_is_zero() {
        assert_eq!(SpeedMode::Paused.multiplier(), 0.0);
    }

    #[test]
    fn test_multipliers_increase_monotonically() {
        let values: Vec<f32> = SpeedMode::ALL.iter().map(|m| m.multiplier()).collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{values:?}");
        }
    }

    #[test]
    fn test_normal_is_catalog_rate() {
        assert!((SpeedMode::Normal.multiplier() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_settings_ron_uses_snake_case() {
        let settings = OrrerySettings {
            speed_mode: SpeedMode::VeryFast,
            view_mode: ViewMode::TopDown,
        };
        let ron_str = ron::to_string(&settings).unwrap();
        assert!(ron_str.contains("very_fast"), "{ron_str}");
        assert!(ron_str.contains("top_down"), "{ron_str}");
        let back: OrrerySettings = ron::from_str(&ron_str).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_display_matches_cli_names() {
        for mode in ViewMode::ALL {
            let parsed = ViewMode::from_str(&mode.to_string(), false).unwrap();
            assert_eq!(parsed, mode);
        }
        for mode in SpeedMode::ALL {
            let parsed = SpeedMode::from_str(&mode.to_string(), false).unwrap();
            assert_eq!(parsed, mode);
        }
    }
}
