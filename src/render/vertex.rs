//! Per-vertex attributes and the transient values derived from them

use bytemuck::{Pod, Zeroable};
use crate::core::types::{Vec2, Vec3, Vec4};

/// Static mesh vertex (32 bytes). `uv.y` is the height along the blade,
/// 0 at the root and 1 at the tip.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct VertexInput {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl VertexInput {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    pub const fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self { position, normal, uv }
    }

    /// Normalized position along the blade.
    #[inline]
    pub fn height_fraction(&self) -> f32 {
        self.uv.y
    }

    /// Per-vertex buffer layout (shader locations 0-2).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Output of a vertex stage. Recomputed every invocation, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeformedVertex {
    pub world_position: Vec3,
    /// Not normalized; the shading stage normalizes after interpolation.
    pub world_normal: Vec3,
    /// Pigment only, lighting is applied by the shading stage.
    pub color: Vec4,
    pub clip_position: Vec4,
}

impl DeformedVertex {
    /// The attributes the rasterizer interpolates.
    pub fn fragment(&self) -> Fragment {
        Fragment {
            world_position: self.world_position,
            world_normal: self.world_normal,
            color: self.color,
        }
    }
}

/// Interpolated vertex attributes for one raster sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub world_position: Vec3,
    pub world_normal: Vec3,
    pub color: Vec4,
}

impl Fragment {
    /// Linear interpolation between two fragments.
    pub fn lerp(&self, other: &Fragment, t: f32) -> Fragment {
        Fragment {
            world_position: self.world_position.lerp(other.world_position, t),
            world_normal: self.world_normal.lerp(other.world_normal, t),
            color: self.color.lerp(other.color, t),
        }
    }

    /// Barycentric interpolation over a triangle. Weights are expected to sum to 1.
    pub fn barycentric(triangle: [&DeformedVertex; 3], weights: Vec3) -> Fragment {
        let [a, b, c] = triangle;
        Fragment {
            world_position: a.world_position * weights.x
                + b.world_position * weights.y
                + c.world_position * weights.z,
            world_normal: a.world_normal * weights.x
                + b.world_normal * weights.y
                + c.world_normal * weights.z,
            color: a.color * weights.x + b.color * weights.y + c.color * weights.z,
        }
    }
}
