//! Wind field configuration.

use serde::{Deserialize, Serialize};

/// Parameters of the procedural wind field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Ground-plane direction the wind blows towards (XZ). Normalized on use.
    pub direction: [f32; 2],
    /// Spatial frequency: noise cells per world unit.
    pub scale: f32,
    /// How fast the noise pattern scrolls along `direction`.
    pub time_scale: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            direction: [1.0, 0.35],
            scale: 4.0,
            time_scale: 0.6,
        }
    }
}
