//! Verdant - wind-animated instanced grass with Blinn-Phong shading

pub mod core;
pub mod math;
pub mod wind;
pub mod grass;
pub mod shading;
pub mod render;
