//! Per-frame uniforms shared by every vertex and fragment invocation

use bytemuck::{Pod, Zeroable};
use crate::core::types::{Mat4, Vec3, Vec4};

/// Read-only inputs for one frame.
///
/// Owned by the host and immutable while a frame is evaluated; every
/// invocation borrows the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub view_projection: Mat4,
    /// Eye position. Only `xyz` carries meaning.
    pub view_position: Vec4,
    /// Elapsed time in seconds.
    pub time: f32,
}

impl FrameUniforms {
    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        self.view_position.truncate()
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            view_position: Vec4::W,
            time: 0.0,
        }
    }
}

/// Frame uniform data for GPU (must match `FrameUniforms` in the WGSL shaders)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniformsGpu {
    /// View-projection matrix, column major (64 bytes, offset 0)
    pub view_proj: [[f32; 4]; 4],
    /// Camera position, homogeneous (16 bytes, offset 64)
    pub view_position: [f32; 4],
    /// Elapsed seconds (4 bytes, offset 80)
    pub time: f32,
    /// Pad to a 16-byte multiple (12 bytes, offset 84)
    pub _pad: [f32; 3],
}

impl From<&FrameUniforms> for FrameUniformsGpu {
    fn from(frame: &FrameUniforms) -> Self {
        Self {
            view_proj: frame.view_projection.to_cols_array_2d(),
            view_position: frame.view_position.to_array(),
            time: frame.time,
            _pad: [0.0; 3],
        }
    }
}

impl From<&FrameUniformsGpu> for FrameUniforms {
    fn from(gpu: &FrameUniformsGpu) -> Self {
        Self {
            view_projection: Mat4::from_cols_array_2d(&gpu.view_proj),
            view_position: Vec4::from_array(gpu.view_position),
            time: gpu.time,
        }
    }
}
