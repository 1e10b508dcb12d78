//! Mathematical utilities

pub mod rotation;
pub mod scalar;

pub use rotation::{axis_angle, bend_rotation};
pub use scalar::smoothstep;
