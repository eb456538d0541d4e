//! Invariant checks shared by the unit test modules.

use crate::map::InfluenceMap;

/// Assert that a clamped map holds only values in `[0.0, 1.0]`.
pub fn assert_clamp_invariant(map: &InfluenceMap) {
    if !map.values_clamped() {
        return;
    }
    for (i, &v) in map.cells().iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&v),
            "cell {i} = {v} violates the clamp invariant"
        );
    }
}

/// Assert that if `b` is `a`'s neighbour in slot `s`, then `a` is `b`'s
/// neighbour in slot `s.opposite()`.
pub fn assert_slot_symmetry(map: &InfluenceMap) {
    let width = map.width();
    for y in 0..map.height() {
        for x in 0..width {
            let here = y * width + x;
            for (slot, there) in map.neighbours(x, y) {
                let back = map.neighbours(there % width, there / width);
                assert!(
                    back.contains(&(slot.opposite(), here)),
                    "({x}, {y}) sees cell {there} at {slot}, but not vice versa"
                );
            }
        }
    }
}
