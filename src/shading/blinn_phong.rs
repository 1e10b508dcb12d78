//! Blinn-Phong lighting factor and final fragment color

use bytemuck::{Pod, Zeroable};

use crate::core::types::{Vec3, Vec4};
use crate::render::vertex::Fragment;
use super::LightingParams;

/// Lighting parameters ready for evaluation (unit light direction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub light_direction: Vec3,
    pub ambient_strength: f32,
    pub shininess: f32,
}

impl Lighting {
    pub fn new(params: &LightingParams) -> Self {
        Self {
            light_direction: Vec3::from(params.light_direction).normalize(),
            ambient_strength: params.ambient_strength,
            shininess: params.shininess,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::new(&LightingParams::default())
    }
}

/// Combine the two alignment terms into the pigment multiplier:
/// `max(diffuse_dot, 0) + ambient + max(specular_dot, 0)^shininess`.
#[inline]
pub fn combine_terms(diffuse_dot: f32, specular_dot: f32, lighting: &Lighting) -> f32 {
    let diffuse = diffuse_dot.max(0.0) + lighting.ambient_strength;
    let specular = specular_dot.max(0.0).powf(lighting.shininess);
    diffuse + specular
}

/// Scalar multiplier applied to the pigment: `diffuse + ambient + specular`.
///
/// Diffuse aligns the normal with the light, specular aligns the view
/// direction with the view/light half vector. Inputs are not guarded: a zero
/// normal, an eye exactly at the surface point, or a view exactly opposite
/// the light produces NaN.
pub fn light_factor(normal: Vec3, world_position: Vec3, view_position: Vec3, lighting: &Lighting) -> f32 {
    let normal = normal.normalize();
    let light_dir = lighting.light_direction;

    let view_dir = (view_position - world_position).normalize();
    let half_dir = (view_dir + light_dir).normalize();

    combine_terms(normal.dot(light_dir), view_dir.dot(half_dir), lighting)
}

/// Final color of a fragment. Alpha passes through and nothing is clamped.
pub fn shade(fragment: &Fragment, view_position: Vec3, lighting: &Lighting) -> Vec4 {
    let factor = light_factor(fragment.world_normal, fragment.world_position, view_position, lighting);
    (fragment.color.truncate() * factor).extend(fragment.color.w)
}

/// GPU uniform for the shading stage (32 bytes).
/// Must match `Lighting` in blinn_phong.wgsl.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightingUniform {
    pub light_direction: [f32; 3],
    pub ambient_strength: f32,
    // -- 16 bytes --
    pub shininess: f32,
    pub _pad: [f32; 3],
    // -- 16 bytes --
}

impl From<&Lighting> for LightingUniform {
    fn from(l: &Lighting) -> Self {
        Self {
            light_direction: l.light_direction.to_array(),
            ambient_strength: l.ambient_strength,
            shininess: l.shininess,
            _pad: [0.0; 3],
        }
    }
}
