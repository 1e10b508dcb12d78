//! Position hash used to seed the cellular wind noise.
//!
//! A PCG-style 2D integer hash over the f32 bit patterns of the input.
//! Integer arithmetic keeps the CPU and WGSL versions bit-identical, which a
//! `fract(sin(x) * k)` hash cannot promise across drivers.

use crate::core::types::Vec2;

pub(crate) const PCG_MUL: u32 = 1_664_525;
pub(crate) const PCG_INC: u32 = 1_013_904_223;

/// 2^-24: maps the top 24 bits of a u32 onto `[0, 1)` exactly.
const UNIT_SCALE: f32 = 1.0 / 16_777_216.0;

/// Two rounds of the PCG 2D mix.
#[inline]
fn pcg2d(mut x: u32, mut y: u32) -> (u32, u32) {
    x = x.wrapping_mul(PCG_MUL).wrapping_add(PCG_INC);
    y = y.wrapping_mul(PCG_MUL).wrapping_add(PCG_INC);

    x = x.wrapping_add(y.wrapping_mul(PCG_MUL));
    y = y.wrapping_add(x.wrapping_mul(PCG_MUL));
    x ^= x >> 16;
    y ^= y >> 16;

    x = x.wrapping_add(y.wrapping_mul(PCG_MUL));
    y = y.wrapping_add(x.wrapping_mul(PCG_MUL));
    x ^= x >> 16;
    y ^= y >> 16;

    (x, y)
}

/// Deterministic pseudo-random point in `[0, 1)^2` for `p`.
///
/// `-0.0` and `+0.0` hash identically.
#[inline]
pub fn hash2d(p: Vec2) -> Vec2 {
    let (x, y) = pcg2d((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits());
    Vec2::new((x >> 8) as f32, (y >> 8) as f32) * UNIT_SCALE
}
