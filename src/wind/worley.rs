//! Cellular (Worley) noise, F1 distance.

use crate::core::types::Vec2;
use super::hash::hash2d;

/// Distance from `p` to the nearest seed point.
///
/// Each unit cell owns one seed at `cell + hash2d(cell)`; only the 3x3 block
/// of cells around `p` is searched. The result is `>= 0` and, because the
/// seeds depend only on absolute cell coordinates, continuous across cell
/// boundaries.
pub fn worley(p: Vec2) -> f32 {
    let cell = p.floor();
    let local = p - cell;

    let mut nearest = f32::MAX;
    for y in -1..=1 {
        for x in -1..=1 {
            let neighbor = Vec2::new(x as f32, y as f32);
            let seed = neighbor + hash2d(cell + neighbor);
            nearest = nearest.min((seed - local).length());
        }
    }
    nearest
}
