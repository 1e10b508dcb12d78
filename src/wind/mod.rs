//! Procedural wind field.
//!
//! A hash-seeded Worley noise scrolled over the ground plane. Identical
//! inputs always give identical wind, so motion is continuous from frame to
//! frame and reproducible for a given time.

pub mod config;
pub mod hash;
pub mod worley;

pub use config::WindConfig;
pub use hash::hash2d;
pub use worley::worley;

use crate::core::types::Vec2;

/// Evaluates wind strength at ground-plane positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindField {
    direction: Vec2,
    scale: f32,
    time_scale: f32,
}

impl WindField {
    /// Build from config. A zero direction is rejected by
    /// [`crate::grass::GrassConfig::validate`]; here it would produce NaN.
    pub fn new(config: &WindConfig) -> Self {
        Self {
            direction: Vec2::from(config.direction).normalize(),
            scale: config.scale,
            time_scale: config.time_scale,
        }
    }

    /// Unit ground-plane wind direction.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Noise-space sample position. Time moves the sample, never the seed.
    pub fn sample_position(&self, ground: Vec2, time: f32) -> Vec2 {
        ground * self.scale + self.direction * (time * self.time_scale)
    }

    /// Wind strength: `worley(sample)^2 * height_fraction`.
    ///
    /// Squaring sharpens gust peaks; the height factor anchors blade roots.
    pub fn strength(&self, ground: Vec2, height_fraction: f32, time: f32) -> f32 {
        let w = worley(self.sample_position(ground, time));
        w * w * height_fraction
    }
}

impl Default for WindField {
    fn default() -> Self {
        Self::new(&WindConfig::default())
    }
}
