//! Built-in meshes: the grass blade and the ground quad.

use crate::core::types::{Mat4, Vec2, Vec3, Vec4};
use crate::render::instance::InstanceTransform;
use crate::render::vertex::VertexInput;

const BLADE_NORMAL: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const GROUND_NORMAL: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// A single upright triangle, one unit tall and wide, root on the origin.
/// The tip comes first.
pub const BLADE_VERTICES: [VertexInput; 3] = [
    VertexInput::new(Vec3::new(0.0, 1.0, 0.0), BLADE_NORMAL, Vec2::new(0.5, 1.0)),
    VertexInput::new(Vec3::new(-0.5, 0.0, 0.0), BLADE_NORMAL, Vec2::new(0.0, 0.0)),
    VertexInput::new(Vec3::new(0.5, 0.0, 0.0), BLADE_NORMAL, Vec2::new(1.0, 0.0)),
];

/// Unit quad on the XZ plane, two triangles.
pub const GROUND_VERTICES: [VertexInput; 6] = [
    VertexInput::new(Vec3::new(-0.5, 0.0, -0.5), GROUND_NORMAL, Vec2::new(0.0, 0.0)),
    VertexInput::new(Vec3::new(0.5, 0.0, 0.5), GROUND_NORMAL, Vec2::new(1.0, 1.0)),
    VertexInput::new(Vec3::new(0.5, 0.0, -0.5), GROUND_NORMAL, Vec2::new(1.0, 0.0)),
    VertexInput::new(Vec3::new(-0.5, 0.0, -0.5), GROUND_NORMAL, Vec2::new(0.0, 0.0)),
    VertexInput::new(Vec3::new(-0.5, 0.0, 0.5), GROUND_NORMAL, Vec2::new(0.0, 1.0)),
    VertexInput::new(Vec3::new(0.5, 0.0, 0.5), GROUND_NORMAL, Vec2::new(1.0, 1.0)),
];

/// Dark soil green.
pub const GROUND_TINT: Vec4 = Vec4::new(20.0 / 255.0, 40.0 / 255.0, 0.0, 1.0);

/// The ground patch under the default field: the unit quad scaled to 2x2.
pub fn ground_instance() -> InstanceTransform {
    InstanceTransform::with_tint(Mat4::from_scale(Vec3::splat(2.0)), GROUND_TINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blade_height_fractions() {
        let h: Vec<f32> = BLADE_VERTICES.iter().map(|v| v.height_fraction()).collect();
        assert_eq!(h, vec![1.0, 0.0, 0.0]);
        // uv.y tracks the local height of the unit blade
        for v in &BLADE_VERTICES {
            assert_eq!(v.position.y, v.height_fraction());
        }
    }

    #[test]
    fn test_ground_triangles_face_up() {
        for tri in GROUND_VERTICES.chunks_exact(3) {
            let n = (tri[1].position - tri[0].position).cross(tri[2].position - tri[0].position);
            assert!(n.y.abs() > 0.0);
            assert_eq!(n.x, 0.0);
            assert_eq!(n.z, 0.0);
        }
        assert!(GROUND_VERTICES.iter().all(|v| v.normal == Vec3::Y));
    }

    #[test]
    fn test_ground_covers_field() {
        let prepared = ground_instance().prepare();
        let corner = prepared.model.transform_point3(GROUND_VERTICES[1].position);
        assert_eq!(corner, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(prepared.tint, GROUND_TINT);
    }
}
