//! Animated grass field.
//!
//! Blades are instanced triangles scattered over a ground patch. Each frame
//! every blade vertex is bent by the procedural wind and pushed away from the
//! avoidance object, then shaded with Blinn-Phong. The CPU path here mirrors
//! the WGSL in `shaders/grass.wgsl` and runs data-parallel with rayon.

pub mod avoidance;
pub mod config;
pub mod deform;
pub mod field;
pub mod mesh;
pub mod params;
pub mod static_vertex;

pub use avoidance::Avoidance;
pub use config::{AvoidanceConfig, BladeConfig, FieldConfig, GrassConfig};
pub use deform::{BladeBend, GrassDeformer};
pub use field::FieldScatter;
pub use params::GrassParams;
pub use static_vertex::transform_static;

use rayon::prelude::*;

use crate::core::types::Vec4;
use crate::core::Result;
use crate::render::frame::FrameUniforms;
use crate::render::instance::{GrassInstanceRaw, InstanceTransform, PreparedInstance, TintedInstanceRaw};
use crate::render::vertex::{DeformedVertex, Fragment};
use crate::shading::{shade, Lighting, LightingUniform};

/// Owns the blade instances and evaluates whole frames.
pub struct GrassSystem {
    config: GrassConfig,
    deformer: GrassDeformer,
    lighting: Lighting,
    instances: Vec<InstanceTransform>,
    prepared: Vec<PreparedInstance>,
    ground: InstanceTransform,
}

impl GrassSystem {
    /// Validate `config` and scatter its field.
    pub fn new(config: GrassConfig) -> Result<Self> {
        config.validate()?;
        let instances = FieldScatter::new(&config.field).scatter();
        Ok(Self::build(config, instances))
    }

    /// Use caller-provided blade instances instead of the scattered field.
    pub fn with_instances(config: GrassConfig, instances: Vec<InstanceTransform>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, instances))
    }

    /// `config` must already be validated.
    fn build(config: GrassConfig, instances: Vec<InstanceTransform>) -> Self {
        let prepared = instances.par_iter().map(InstanceTransform::prepare).collect();
        log::info!("Grass system ready: {} blades", instances.len());
        Self {
            deformer: GrassDeformer::new(&config),
            lighting: Lighting::new(&config.lighting),
            config,
            instances,
            prepared,
            ground: mesh::ground_instance(),
        }
    }

    pub fn config(&self) -> &GrassConfig {
        &self.config
    }

    pub fn deformer(&self) -> &GrassDeformer {
        &self.deformer
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn instances(&self) -> &[InstanceTransform] {
        &self.instances
    }

    pub fn blade_count(&self) -> usize {
        self.instances.len()
    }

    /// Deform every blade vertex for one frame.
    ///
    /// Output is grouped per instance in instance order, vertices in mesh
    /// order within each group.
    pub fn deform_frame(&self, frame: &FrameUniforms) -> Vec<DeformedVertex> {
        let deformer = &self.deformer;
        let vertices: Vec<_> = self
            .prepared
            .par_iter()
            .flat_map_iter(|instance| {
                mesh::BLADE_VERTICES
                    .iter()
                    .map(move |v| deformer.deform(v, instance, frame))
            })
            .collect();
        log::debug!("Deformed {} grass vertices at t={:.3}", vertices.len(), frame.time);
        vertices
    }

    /// Ground quad vertices through the static stage.
    pub fn ground_vertices(&self, frame: &FrameUniforms) -> Vec<DeformedVertex> {
        let ground = self.ground.prepare();
        mesh::GROUND_VERTICES
            .iter()
            .map(|v| transform_static(v, &ground, frame))
            .collect()
    }

    /// Shade fragments in parallel; output order matches input order.
    pub fn shade_fragments(&self, fragments: &[Fragment], frame: &FrameUniforms) -> Vec<Vec4> {
        let eye = frame.eye();
        let lighting = &self.lighting;
        fragments.par_iter().map(|f| shade(f, eye, lighting)).collect()
    }

    /// GPU mirror of the deformer configuration.
    pub fn build_params(&self) -> GrassParams {
        GrassParams::from(&self.config)
    }

    pub fn lighting_uniform(&self) -> LightingUniform {
        LightingUniform::from(&self.lighting)
    }

    /// Blade instance buffer contents.
    pub fn instance_data(&self) -> Vec<GrassInstanceRaw> {
        self.instances.iter().map(InstanceTransform::to_raw).collect()
    }

    /// Ground instance buffer contents.
    pub fn ground_instance_data(&self) -> TintedInstanceRaw {
        self.ground.to_tinted_raw()
    }
}
