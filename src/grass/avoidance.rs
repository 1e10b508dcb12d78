//! Object avoidance: blades near a dynamic actor bend away from it.

use crate::core::types::Vec2;
use crate::math::smoothstep;
use super::config::AvoidanceConfig;

/// Avoidance influence around a single anchor on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Avoidance {
    pub anchor: Vec2,
    pub radius: f32,
    pub falloff: f32,
    /// Tip bend angle when fully pushed.
    pub bend: f32,
}

impl Avoidance {
    pub fn new(config: &AvoidanceConfig) -> Self {
        Self {
            anchor: Vec2::from(config.anchor),
            radius: config.radius,
            falloff: config.falloff,
            bend: config.bend,
        }
    }

    /// Influence in `[0, 1]`: exactly 1 within `radius`, 0 beyond
    /// `radius + falloff`, smooth in between.
    pub fn object_influence(&self, ground: Vec2) -> f32 {
        let distance = ground.distance(self.anchor);
        if self.falloff > 0.0 {
            1.0 - smoothstep(self.radius, self.radius + self.falloff, distance)
        } else if distance <= self.radius {
            1.0
        } else {
            0.0
        }
    }

    /// Unit direction pointing away from the anchor; zero at the anchor itself.
    pub fn radial_direction(&self, ground: Vec2) -> Vec2 {
        (ground - self.anchor).normalize_or_zero()
    }
}

impl Default for Avoidance {
    fn default() -> Self {
        Self::new(&AvoidanceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_radius_is_full() {
        let a = Avoidance::default();
        assert_eq!(a.object_influence(Vec2::ZERO), 1.0);
        assert_eq!(a.object_influence(Vec2::new(0.1, -0.2)), 1.0);
        assert_eq!(a.object_influence(Vec2::new(0.3, 0.0)), 1.0);
    }

    #[test]
    fn test_outside_falloff_is_zero() {
        let a = Avoidance::default();
        assert_eq!(a.object_influence(Vec2::new(0.36, 0.0)), 0.0);
        assert_eq!(a.object_influence(Vec2::new(-0.9, 0.9)), 0.0);
    }

    #[test]
    fn test_soft_edge_is_monotonic() {
        let a = Avoidance::default();
        let mut prev = 1.0;
        for i in 0..=20 {
            let d = 0.3 + 0.05 * i as f32 / 20.0;
            let v = a.object_influence(Vec2::new(d, 0.0));
            assert!(v <= prev + 1e-6);
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn test_hard_edge() {
        let a = Avoidance {
            falloff: 0.0,
            ..Avoidance::default()
        };
        assert_eq!(a.object_influence(Vec2::new(0.29, 0.0)), 1.0);
        assert_eq!(a.object_influence(Vec2::new(0.31, 0.0)), 0.0);
    }

    #[test]
    fn test_radial_direction() {
        let a = Avoidance {
            anchor: Vec2::new(1.0, 1.0),
            ..Avoidance::default()
        };
        let r = a.radial_direction(Vec2::new(1.0, 3.0));
        assert_eq!(r, Vec2::new(0.0, 1.0));
        assert_eq!(a.radial_direction(Vec2::new(1.0, 1.0)), Vec2::ZERO);
    }
}
