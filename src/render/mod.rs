//! GPU-facing data: uniforms, vertex/instance layouts and shader sources

pub mod frame;
pub mod instance;
pub mod shaders;
pub mod vertex;

pub use frame::{FrameUniforms, FrameUniformsGpu};
pub use instance::{GrassInstanceRaw, InstanceTransform, PreparedInstance, TintedInstanceRaw};
pub use shaders::ShaderKind;
pub use vertex::{DeformedVertex, Fragment, VertexInput};

/// Sky blue the host clears the color target to before drawing.
pub const BACKGROUND_CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.5,
    b: 1.0,
    a: 1.0,
};
