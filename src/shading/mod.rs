//! Directional Blinn-Phong shading.
//!
//! Consumes interpolated fragments from either vertex stage and produces the
//! final color. The light is a fixed world-space direction, not attached to
//! any scene object; its parameters are injected through [`LightingParams`].

pub mod blinn_phong;

pub use blinn_phong::{combine_terms, light_factor, shade, Lighting, LightingUniform};

use serde::{Deserialize, Serialize};

/// Default direction towards the light (normalized on use).
pub const DEFAULT_LIGHT_DIRECTION: [f32; 3] = [0.4, 1.0, 0.6];
/// Default ambient term added to the diffuse factor.
pub const DEFAULT_AMBIENT_STRENGTH: f32 = 0.1;
/// Default specular exponent.
pub const DEFAULT_SHININESS: f32 = 32.0;

/// User-facing lighting parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    /// World-space direction pointing towards the light.
    pub light_direction: [f32; 3],
    pub ambient_strength: f32,
    pub shininess: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            light_direction: DEFAULT_LIGHT_DIRECTION,
            ambient_strength: DEFAULT_AMBIENT_STRENGTH,
            shininess: DEFAULT_SHININESS,
        }
    }
}
