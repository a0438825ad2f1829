//! Per-body angle accumulators advanced once per frame.

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::{Quat, Vec3};
use orrery_bodies::{BodyDescriptor, BodyRegistry};
use orrery_config::SpeedMode;
use tracing::debug;

use crate::path::{circle_point, orbit_path};

/// Scale factor of the selected body's highlight pulse at `now` seconds.
pub fn pulse_scale(now: f64) -> f32 {
    1.0 + 0.2 * (3.0 * now).sin() as f32
}

/// Accumulated angles of one body, in radians within `[0, TAU)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyMotion {
    /// Revolution around the primary.
    pub orbit_angle: f32,
    /// Rotation about the body's own Y axis.
    pub spin_angle: f32,
}

/// Advances revolution and spin of every registered body.
///
/// Motion state is indexed in registry order, so lookups by id go through
/// [`BodyRegistry::index_of`].
#[derive(Debug, Clone)]
pub struct MotionDriver {
    registry: Arc<BodyRegistry>,
    motions: Vec<BodyMotion>,
    speed_mode: SpeedMode,
}

impl MotionDriver {
    /// All bodies start at angle zero, i.e. at their catalog positions.
    pub fn new(registry: Arc<BodyRegistry>, speed_mode: SpeedMode) -> Self {
        let motions = vec![BodyMotion::default(); registry.len()];
        Self {
            registry,
            motions,
            speed_mode,
        }
    }

    /// The registry this driver animates.
    pub fn registry(&self) -> &Arc<BodyRegistry> {
        &self.registry
    }

    /// Current speed preset.
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Change the speed preset. Takes effect on the next [`advance`](Self::advance).
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        if mode != self.speed_mode {
            debug!("Speed mode {} -> {}", self.speed_mode, mode);
        }
        self.speed_mode = mode;
    }

    /// Advance every body by `dt` seconds.
    ///
    /// Revolution is scaled by the speed multiplier; spin is not.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let multiplier = self.speed_mode.multiplier();
        for (body, motion) in self.registry.iter().zip(self.motions.iter_mut()) {
            motion.orbit_angle =
                (motion.orbit_angle + dt * body.orbital_rate * multiplier).rem_euclid(TAU);
            motion.spin_angle = (motion.spin_angle + dt * body.rotation_rate).rem_euclid(TAU);
        }
    }

    /// Angles of a body, or `None` for an unknown id.
    pub fn motion(&self, id: &str) -> Option<BodyMotion> {
        self.registry.index_of(id).map(|i| self.motions[i])
    }

    /// Axial orientation of a body.
    pub fn spin_rotation(&self, id: &str) -> Option<Quat> {
        self.motion(id).map(|m| Quat::from_rotation_y(m.spin_angle))
    }

    /// Position relative to the primary's center (or the origin).
    pub fn local_position(&self, id: &str) -> Option<Vec3> {
        let body = self.registry.get(id)?;
        let motion = self.motion(id)?;
        Some(circle_point(body.position, motion.orbit_angle))
    }

    /// Scene-space position: the primary's world position plus this body's
    /// local position, composed up the whole parent chain.
    pub fn world_position(&self, id: &str) -> Option<Vec3> {
        let own = self.local_position(id)?;
        let inherited: Vec3 = self
            .registry
            .ancestors(id)
            .filter_map(|primary| self.local_position(primary.id.as_str()))
            .sum();
        Some(own + inherited)
    }

    /// World positions of every body, in registry order.
    pub fn world_positions(&self) -> Vec<(&BodyDescriptor, Vec3)> {
        self.registry
            .iter()
            .filter_map(|body| {
                self.world_position(body.id.as_str())
                    .map(|position| (body, position))
            })
            .collect()
    }

    /// Orbit ring of a body around its primary's current position.
    ///
    /// Bodies with zero orbit radius have no ring and yield `None`.
    pub fn orbit_path(&self, id: &str, segments: usize) -> Option<Vec<Vec3>> {
        let body = self.registry.get(id)?;
        if body.orbit_radius() <= f32::EPSILON {
            return None;
        }
        let center = match self.registry.primary_of(id) {
            Some(primary) => self.world_position(primary.id.as_str())?,
            None => Vec3::ZERO,
        };
        Some(orbit_path(center, body.position, segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::BodyKind;

    fn registry() -> Arc<BodyRegistry> {
        let bodies = vec![
            BodyDescriptor::new("sun", "Sun", BodyKind::Star)
                .with_radius(3.0)
                .with_rates(0.0, 0.005),
            BodyDescriptor::new("earth", "Earth", BodyKind::Planet)
                .with_position(Vec3::new(14.0, 0.0, 0.0))
                .with_rates(0.015, 0.01),
            BodyDescriptor::new("moon", "Moon", BodyKind::Satellite)
                .with_position(Vec3::new(1.8, 0.0, 0.0))
                .with_rates(0.2, 0.01)
                .orbiting("earth"),
        ];
        Arc::new(BodyRegistry::new(bodies).unwrap())
    }

    #[test]
    fn test_pulse_scale_oscillates_around_one() {
        assert_eq!(pulse_scale(0.0), 1.0);
        let peak = pulse_scale(std::f64::consts::FRAC_PI_6);
        assert!((peak - 1.2).abs() < 1e-6);
        for i in 0..100 {
            let s = pulse_scale(f64::from(i) * 0.07);
            assert!((0.8..=1.2).contains(&s), "{s}");
        }
    }

    #[test]
    fn test_orbit_advances_by_rate_times_multiplier() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Fast);
        driver.advance(2.0);
        let earth = driver.motion("earth").unwrap();
        assert!((earth.orbit_angle - 2.0 * 0.015 * 5.0).abs() < 1e-6);
        // Spin ignores the multiplier.
        assert!((earth.spin_angle - 2.0 * 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_paused_freezes_orbit_but_not_spin() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Paused);
        for _ in 0..60 {
            driver.advance(1.0 / 60.0);
        }
        let earth = driver.motion("earth").unwrap();
        assert_eq!(earth.orbit_angle, 0.0);
        assert!(earth.spin_angle > 0.0);
        assert_eq!(
            driver.world_position("earth").unwrap(),
            Vec3::new(14.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_star_with_zero_rate_stays_at_origin() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::VeryFast);
        driver.advance(10.0);
        let sun = driver.motion("sun").unwrap();
        assert_eq!(sun.orbit_angle, 0.0);
        assert!((sun.spin_angle - 0.05).abs() < 1e-6);
        assert_eq!(driver.world_position("sun"), Some(Vec3::ZERO));
    }

    #[test]
    fn test_speed_mode_change_applies_to_next_advance() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Normal);
        driver.advance(1.0);
        driver.set_speed_mode(SpeedMode::Paused);
        driver.advance(1.0);
        let earth = driver.motion("earth").unwrap();
        assert!((earth.orbit_angle - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_satellite_orbits_in_primary_frame() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Normal);
        for _ in 0..100 {
            driver.advance(0.1);
        }
        let earth = driver.world_position("earth").unwrap();
        let moon = driver.world_position("moon").unwrap();
        assert!(((moon - earth).length() - 1.8).abs() < 1e-4);

        let earth_angle = driver.motion("earth").unwrap().orbit_angle;
        let moon_angle = driver.motion("moon").unwrap().orbit_angle;
        assert!((earth_angle - 0.15).abs() < 1e-4);
        assert!((moon_angle - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_angles_wrap_into_one_turn() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::VeryFast);
        for _ in 0..1000 {
            driver.advance(1.0);
        }
        for body in ["sun", "earth", "moon"] {
            let m = driver.motion(body).unwrap();
            assert!((0.0..TAU).contains(&m.orbit_angle), "{body}: {m:?}");
            assert!((0.0..TAU).contains(&m.spin_angle), "{body}: {m:?}");
        }
    }

    #[test]
    fn test_non_positive_dt_is_ignored() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Normal);
        driver.advance(0.0);
        driver.advance(-1.0);
        driver.advance(f32::NAN);
        assert_eq!(driver.motion("earth"), Some(BodyMotion::default()));
    }

    #[test]
    fn test_unknown_body_is_none() {
        let driver = MotionDriver::new(registry(), SpeedMode::Normal);
        assert!(driver.motion("vulcan").is_none());
        assert!(driver.world_position("vulcan").is_none());
    }

    #[test]
    fn test_orbit_path_follows_primary() {
        let mut driver = MotionDriver::new(registry(), SpeedMode::Normal);
        driver.advance(5.0);
        let earth = driver.world_position("earth").unwrap();
        let ring = driver.orbit_path("moon", 16).unwrap();
        assert_eq!(ring.len(), 17);
        for p in &ring {
            assert!(((*p - earth).length() - 1.8).abs() < 1e-4);
        }
        assert!(driver.orbit_path("sun", 16).is_none());
    }
}
