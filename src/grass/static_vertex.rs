//! Non-animated vertex stage for flat-tinted geometry such as the ground.

use crate::render::frame::FrameUniforms;
use crate::render::instance::PreparedInstance;
use crate::render::vertex::{DeformedVertex, VertexInput};

/// Transform a vertex with its instance, no deformation.
///
/// The color is the instance tint. The normal goes through the same
/// inverse-transpose as on the grass path.
pub fn transform_static(vertex: &VertexInput, instance: &PreparedInstance, frame: &FrameUniforms) -> DeformedVertex {
    let world_position = instance.model.transform_point3(vertex.position);
    DeformedVertex {
        world_position,
        world_normal: instance.normal_matrix * vertex.normal,
        color: instance.tint,
        clip_position: frame.view_projection * world_position.extend(1.0),
    }
}
