//! Look-at perspective camera producing per-frame uniforms

use crate::core::types::{Mat4, Vec3, Vec4};
use crate::render::frame::FrameUniforms;

/// Camera with position, orientation, and projection parameters.
///
/// Camera control is the host's business; this only turns a pose into the
/// view-projection matrix and eye position the grass stages consume.
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position (the eye)
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// World up
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create camera looking at a target
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 1024.0 / 720.0,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get forward direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Update aspect ratio (call on window resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    /// Snapshot this camera into the read-only uniforms for one frame.
    pub fn frame_uniforms(&self, time: f32) -> FrameUniforms {
        FrameUniforms {
            view_projection: self.view_projection(),
            view_position: Vec4::from((self.position, 1.0)),
            time,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 1.0, 4.0), Vec3::ZERO, Vec3::Y)
    }
}
