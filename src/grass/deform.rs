//! Wind-driven blade deformation.
//!
//! Per vertex: sample the wind field at the blade's ground position, mix the
//! wind bend with the object-avoidance bend, turn the result into a rotation
//! about the blade root, and carry position and normal through the model
//! transform. The whole thing is a pure function of
//! (vertex, instance, frame uniforms, config).

use glam::Vec3Swizzles;

use crate::core::types::{Mat3, Vec2, Vec3, Vec4};
use crate::math::bend_rotation;
use crate::render::frame::FrameUniforms;
use crate::render::instance::PreparedInstance;
use crate::render::vertex::{DeformedVertex, VertexInput};
use crate::wind::WindField;
use super::avoidance::Avoidance;
use super::config::{BladeConfig, GrassConfig};

/// Bend state of one vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BladeBend {
    /// Wind strength (already scaled by height).
    pub wind: f32,
    /// Object influence in `[0, 1]`.
    pub object_influence: f32,
    /// Unit world XZ direction the blade leans towards.
    pub direction: Vec2,
    /// Lean angle in radians.
    pub pitch: f32,
    /// Twist about the blade axis in radians.
    pub yaw: f32,
}

/// Blade bending limits and pigment, ready for evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BladeShape {
    max_bend: f32,
    pitch_jitter: f32,
    yaw_jitter: f32,
    root_color: Vec4,
    tip_color: Vec4,
}

impl BladeShape {
    fn new(config: &BladeConfig) -> Self {
        Self {
            max_bend: config.max_bend,
            pitch_jitter: config.pitch_jitter,
            yaw_jitter: config.yaw_jitter,
            root_color: Vec4::from_array(config.root_color),
            tip_color: Vec4::from_array(config.tip_color),
        }
    }
}

/// The grass vertex stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassDeformer {
    wind: WindField,
    avoidance: Avoidance,
    blade: BladeShape,
}

impl GrassDeformer {
    pub fn new(config: &GrassConfig) -> Self {
        Self {
            wind: WindField::new(&config.wind),
            avoidance: Avoidance::new(&config.avoidance),
            blade: BladeShape::new(&config.blade),
        }
    }

    pub fn wind(&self) -> &WindField {
        &self.wind
    }

    pub fn avoidance(&self) -> &Avoidance {
        &self.avoidance
    }

    /// Compute the bend for a vertex at `ground` with the given height fraction.
    ///
    /// `jitter` is the per-blade value in `[-1, 1)^2`. Every angle carries a
    /// factor of `height_fraction`, so at the root the bend is exactly zero.
    pub fn bend(&self, ground: Vec2, height_fraction: f32, jitter: Vec2, time: f32) -> BladeBend {
        let h = height_fraction;
        let wind = self.wind.strength(ground, h, time);
        let influence = self.avoidance.object_influence(ground);
        let wind_dir = self.wind.direction();

        let wind_pitch = wind.min(1.0) * self.blade.max_bend + jitter.y * self.blade.pitch_jitter * h;
        let push_pitch = self.avoidance.bend * h;

        let lean = wind_dir * (wind_pitch * (1.0 - influence))
            + self.avoidance.radial_direction(ground) * (push_pitch * influence);

        BladeBend {
            wind,
            object_influence: influence,
            direction: lean.try_normalize().unwrap_or(wind_dir),
            pitch: lean.length(),
            yaw: jitter.x * self.blade.yaw_jitter * h * (1.0 - influence),
        }
    }

    /// Local-space rotation for `bend` on `instance`.
    ///
    /// The world lean direction is taken into instance space with the inverse
    /// model transform and flattened onto the local ground plane.
    pub fn rotation(&self, instance: &PreparedInstance, bend: &BladeBend) -> Mat3 {
        let local = instance.linear_inverse * Vec3::new(bend.direction.x, 0.0, bend.direction.y);
        let forward = Vec3::new(local.x, 0.0, local.z).normalize();
        bend_rotation(forward, bend.pitch, bend.yaw)
    }

    /// Pigment along the blade.
    pub fn blade_color(&self, height_fraction: f32) -> Vec4 {
        self.blade.root_color.lerp(self.blade.tip_color, height_fraction)
    }

    /// Deform one vertex of one instance for one frame.
    pub fn deform(&self, vertex: &VertexInput, instance: &PreparedInstance, frame: &FrameUniforms) -> DeformedVertex {
        let h = vertex.height_fraction();
        let p = vertex.position;
        let ground = instance.model.transform_point3(Vec3::new(p.x, 0.0, p.z)).xz();

        let bend = self.bend(ground, h, instance.jitter, frame.time);
        let rotation = self.rotation(instance, &bend);

        // Rotations are orthonormal, so R is its own inverse-transpose; the
        // full normal map is inverse-transpose(M * R) = N * R.
        let world_position = instance.model.transform_point3(rotation * p);
        let world_normal = instance.normal_matrix * (rotation * vertex.normal);

        DeformedVertex {
            world_position,
            world_normal,
            color: self.blade_color(h),
            clip_position: frame.view_projection * world_position.extend(1.0),
        }
    }
}

impl Default for GrassDeformer {
    fn default() -> Self {
        Self::new(&GrassConfig::default())
    }
}
