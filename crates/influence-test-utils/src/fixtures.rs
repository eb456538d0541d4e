//! Reusable map fixtures.
//!
//! - [`ramp`]: 3x3 map holding `0.1 ..= 0.9` row-major.
//! - [`spike`]: 3x3 zero map with a single value in the centre.
//! - [`checkerboard`]: alternating `0.0` / `high` cells of any size.

use influence_map::InfluenceMap;

/// Row-major contents of [`ramp`].
pub const RAMP_VALUES: [f32; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// 3x3 map with cells `0.1, 0.2, 0.3 / 0.4, 0.5, 0.6 / 0.7, 0.8, 0.9`.
pub fn ramp(clamped: bool) -> InfluenceMap {
    let mut map = InfluenceMap::new(3, 3, clamped, 0.0).expect("3x3 is a valid size");
    for (i, v) in RAMP_VALUES.into_iter().enumerate() {
        map.set(i % 3, i / 3, v);
    }
    map
}

/// 3x3 zero map with `value` written (clamp-adjusted) at the centre.
pub fn spike(clamped: bool, value: f32) -> InfluenceMap {
    let mut map = InfluenceMap::new(3, 3, clamped, 0.0).expect("3x3 is a valid size");
    map.set(1, 1, value);
    map
}

/// `width x height` map with `high` on cells where `x + y` is even.
pub fn checkerboard(width: usize, height: usize, clamped: bool, high: f32) -> InfluenceMap {
    let mut map =
        InfluenceMap::new(width, height, clamped, 0.0).expect("fixture dimensions are non-zero");
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                map.set(x, y, high);
            }
        }
    }
    map
}
