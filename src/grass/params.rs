//! GPU-ready grass uniform (80 bytes, 16-byte aligned).
//!
//! Mirrors the deformer's configuration so the WGSL vertex stage evaluates
//! the same wind, avoidance and bend as [`super::GrassDeformer`].

use bytemuck::{Pod, Zeroable};

use super::config::GrassConfig;

/// GPU uniform for the grass vertex stage. Must match `GrassParams` in grass.wgsl.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GrassParams {
    pub wind_direction: [f32; 2],
    pub wind_scale: f32,
    pub wind_time_scale: f32,
    // -- 16 bytes --
    pub avoidance_anchor: [f32; 2],
    pub avoidance_radius: f32,
    pub avoidance_falloff: f32,
    // -- 16 bytes --
    pub avoidance_bend: f32,
    pub max_bend: f32,
    pub pitch_jitter: f32,
    pub yaw_jitter: f32,
    // -- 16 bytes --
    pub root_color: [f32; 4],
    // -- 16 bytes --
    pub tip_color: [f32; 4],
    // -- 16 bytes --
    // Total: 80 bytes
}

impl From<&GrassConfig> for GrassParams {
    fn from(cfg: &GrassConfig) -> Self {
        let dir = glam::Vec2::from(cfg.wind.direction).normalize_or_zero();
        Self {
            wind_direction: dir.to_array(),
            wind_scale: cfg.wind.scale,
            wind_time_scale: cfg.wind.time_scale,
            avoidance_anchor: cfg.avoidance.anchor,
            avoidance_radius: cfg.avoidance.radius,
            avoidance_falloff: cfg.avoidance.falloff,
            avoidance_bend: cfg.avoidance.bend,
            max_bend: cfg.blade.max_bend,
            pitch_jitter: cfg.blade.pitch_jitter,
            yaw_jitter: cfg.blade.yaw_jitter,
            root_color: cfg.blade.root_color,
            tip_color: cfg.blade.tip_color,
        }
    }
}
