//! Per-instance transforms and their GPU attribute layouts
//!
//! The instance-rate attribute convention delivers a model matrix as four
//! `vec4` columns. That is purely marshalling: raw instances are reassembled
//! into one [`Mat4`] here, before anything reaches the deformer.

use bytemuck::{Pod, Zeroable};
use glam::Vec4Swizzles;

use crate::core::types::{Mat3, Mat4, Vec2, Vec4};
use crate::wind::hash2d;

/// Model transform of one rendered instance, plus an optional flat tint
/// used by the non-animated path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub model: Mat4,
    pub tint: Option<Vec4>,
}

impl InstanceTransform {
    pub fn new(model: Mat4) -> Self {
        Self { model, tint: None }
    }

    pub fn with_tint(model: Mat4, tint: Vec4) -> Self {
        Self { model, tint: Some(tint) }
    }

    /// Precompute everything that is constant across the instance's vertices.
    ///
    /// The model's linear part must be invertible; a singular matrix yields
    /// non-finite normals and bend directions.
    pub fn prepare(&self) -> PreparedInstance {
        let linear_inverse = Mat3::from_mat4(self.model).inverse();
        let root = self.model.w_axis.xz();
        PreparedInstance {
            model: self.model,
            linear_inverse,
            normal_matrix: linear_inverse.transpose(),
            tint: self.tint.unwrap_or(Vec4::ONE),
            root,
            jitter: hash2d(root) * 2.0 - Vec2::ONE,
        }
    }

    pub fn to_raw(&self) -> GrassInstanceRaw {
        GrassInstanceRaw {
            model: self.model.to_cols_array_2d(),
        }
    }

    pub fn to_tinted_raw(&self) -> TintedInstanceRaw {
        TintedInstanceRaw {
            model: self.model.to_cols_array_2d(),
            color: self.tint.unwrap_or(Vec4::ONE).to_array(),
        }
    }
}

impl From<GrassInstanceRaw> for InstanceTransform {
    fn from(raw: GrassInstanceRaw) -> Self {
        Self::new(Mat4::from_cols_array_2d(&raw.model))
    }
}

impl From<TintedInstanceRaw> for InstanceTransform {
    fn from(raw: TintedInstanceRaw) -> Self {
        Self::with_tint(Mat4::from_cols_array_2d(&raw.model), Vec4::from_array(raw.color))
    }
}

/// Instance data amortized over all of its vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreparedInstance {
    pub model: Mat4,
    /// Inverse of the model's upper 3x3; takes world directions to local space.
    pub linear_inverse: Mat3,
    /// Inverse-transpose of the model's upper 3x3.
    pub normal_matrix: Mat3,
    /// Flat color for the static path (white when the instance has none).
    pub tint: Vec4,
    /// World XZ of the instance origin (the blade root).
    pub root: Vec2,
    /// Per-blade jitter in `[-1, 1)^2`, hashed from `root`.
    pub jitter: Vec2,
}

/// Instance buffer entry for grass blades (64 bytes, locations 5-8).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GrassInstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl GrassInstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Instance buffer entry for flat-colored static geometry (80 bytes, locations 5-9).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TintedInstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl TintedInstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
        9 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
