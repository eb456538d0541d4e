//! Moore-neighbourhood extraction.
//!
//! Neighbours are resolved purely from `(x, y)` and the map extent: there
//! is no wraparound, so border cells simply have fewer in-bounds slots
//! (five on an edge, three in a corner).

use influence_core::{ConnectionIndex, Connections, CONNECTION_COUNT};
use smallvec::SmallVec;

use crate::bounds::assert_in_bounds;
use crate::map::InfluenceMap;

/// In-bounds neighbour slots of a cell, each paired with the neighbour's
/// row-major cell index, in slot order.
pub type Neighbours = SmallVec<[(ConnectionIndex, usize); CONNECTION_COUNT]>;

/// Resolve the in-bounds neighbours of `(x, y)` on a `width x height` grid.
///
/// `(x, y)` itself is assumed to be in bounds.
pub(crate) fn resolve(x: usize, y: usize, width: usize, height: usize) -> Neighbours {
    let mut result = Neighbours::new();
    for slot in ConnectionIndex::ALL {
        let (dx, dy) = slot.offset();
        let nx = x.checked_add_signed(dx).filter(|&nx| nx < width);
        let ny = y.checked_add_signed(dy).filter(|&ny| ny < height);
        if let (Some(nx), Some(ny)) = (nx, ny) {
            result.push((slot, ny * width + nx));
        }
    }
    result
}

/// Overwrite semantics: every slot is written, out-of-bounds slots with
/// `oob_value` (unweighted).
pub(crate) fn gather(
    cells: &[f32],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    weight: f32,
    oob_value: f32,
) -> Connections {
    let mut out = [oob_value; CONNECTION_COUNT];
    for (slot, i) in resolve(x, y, width, height) {
        out[slot.index()] = cells[i] * weight;
    }
    out
}

/// Accumulate semantics: in-bounds slots gain `neighbour * weight`,
/// out-of-bounds slots are left alone.
pub(crate) fn accumulate(
    cells: &[f32],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    out: &mut Connections,
    weight: f32,
) {
    for (slot, i) in resolve(x, y, width, height) {
        out[slot.index()] += cells[i] * weight;
    }
}

impl InfluenceMap {
    /// Weighted values of the eight neighbours of `(x, y)`.
    ///
    /// Each in-bounds slot holds `neighbour * weight`. Slots that fall
    /// outside the map hold `oob_value` exactly; it is **not** multiplied
    /// by `weight`. Index the result with [`ConnectionIndex::index`].
    ///
    /// # Panics
    ///
    /// If `x >= width()` or `y >= height()`.
    #[track_caller]
    pub fn connections(&self, x: usize, y: usize, weight: f32, oob_value: f32) -> Connections {
        assert_in_bounds(x, y, self.width(), self.height());
        gather(
            self.cells(),
            self.width(),
            self.height(),
            x,
            y,
            weight,
            oob_value,
        )
    }

    /// Add the weighted values of the eight neighbours of `(x, y)` into `out`.
    ///
    /// Only in-bounds slots are touched. `out` must already hold valid
    /// numbers in every slot; seed it (e.g. with zeros) before the first call.
    ///
    /// # Panics
    ///
    /// If `x >= width()` or `y >= height()`.
    #[track_caller]
    pub fn add_connections(&self, x: usize, y: usize, out: &mut Connections, weight: f32) {
        assert_in_bounds(x, y, self.width(), self.height());
        accumulate(
            self.cells(),
            self.width(),
            self.height(),
            x,
            y,
            out,
            weight,
        );
    }

    /// In-bounds neighbour slots of `(x, y)` with their row-major cell indices.
    ///
    /// # Panics
    ///
    /// If `x >= width()` or `y >= height()`.
    #[track_caller]
    pub fn neighbours(&self, x: usize, y: usize) -> Neighbours {
        assert_in_bounds(x, y, self.width(), self.height());
        resolve(x, y, self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use influence_core::ConnectionIndex::*;
    use proptest::prelude::*;

    /// 3x3 clamped map holding 0.1 .. 0.9 in row-major order.
    fn ramp() -> InfluenceMap {
        let mut map = InfluenceMap::new(3, 3, true, 0.0).unwrap();
        let values = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
        for (i, v) in values.into_iter().enumerate() {
            map.set(i % 3, i / 3, v);
        }
        map
    }

    fn assert_slots(c: &Connections, expected: [(ConnectionIndex, f32); 8]) {
        for (slot, value) in expected {
            assert!(
                (c[slot.index()] - value).abs() < 1e-6,
                "slot {slot}: got {}, expected {value}",
                c[slot.index()]
            );
        }
    }

    // ── Resolution ──────────────────────────────────────────────

    #[test]
    fn interior_has_all_eight() {
        let n = resolve(2, 2, 5, 5);
        assert_eq!(n.len(), 8);
        let slots: Vec<_> = n.iter().map(|&(s, _)| s).collect();
        assert_eq!(slots, ConnectionIndex::ALL.to_vec());
    }

    #[test]
    fn interior_indices() {
        let n = resolve(1, 1, 3, 3);
        let idx: Vec<_> = n.iter().map(|&(_, i)| i).collect();
        // TL, TM, TR, MR, BR, BM, BL, ML
        assert_eq!(idx, vec![0, 1, 2, 5, 8, 7, 6, 3]);
    }

    #[test]
    fn edge_has_five() {
        assert_eq!(resolve(2, 0, 5, 5).len(), 5);
        assert_eq!(resolve(0, 2, 5, 5).len(), 5);
        assert_eq!(resolve(4, 2, 5, 5).len(), 5);
        assert_eq!(resolve(2, 4, 5, 5).len(), 5);
    }

    #[test]
    fn corner_has_three() {
        let n = resolve(0, 0, 5, 5);
        assert_eq!(n.len(), 3);
        let slots: Vec<_> = n.iter().map(|&(s, _)| s).collect();
        assert_eq!(slots, vec![MiddleRight, BottomRight, BottomMiddle]);
    }

    #[test]
    fn single_row_has_only_sideways() {
        let slots: Vec<_> = resolve(1, 0, 3, 1).iter().map(|&(s, _)| s).collect();
        assert_eq!(slots, vec![MiddleRight, MiddleLeft]);
    }

    #[test]
    fn single_cell_has_none() {
        assert!(resolve(0, 0, 1, 1).is_empty());
    }

    // ── connections ─────────────────────────────────────────────

    #[test]
    fn around_top_left() {
        let c = ramp().connections(0, 0, 1.0, 0.0);
        assert_slots(
            &c,
            [
                (TopLeft, 0.0),
                (TopMiddle, 0.0),
                (TopRight, 0.0),
                (MiddleRight, 0.2),
                (BottomRight, 0.5),
                (BottomMiddle, 0.4),
                (BottomLeft, 0.0),
                (MiddleLeft, 0.0),
            ],
        );
    }

    #[test]
    fn around_top_middle() {
        let c = ramp().connections(1, 0, 1.0, 0.0);
        assert_slots(
            &c,
            [
                (TopLeft, 0.0),
                (TopMiddle, 0.0),
                (TopRight, 0.0),
                (MiddleRight, 0.3),
                (BottomRight, 0.6),
                (BottomMiddle, 0.5),
                (BottomLeft, 0.4),
                (MiddleLeft, 0.1),
            ],
        );
    }

    #[test]
    fn around_middle_middle() {
        let c = ramp().connections(1, 1, 1.0, 0.0);
        assert_slots(
            &c,
            [
                (TopLeft, 0.1),
                (TopMiddle, 0.2),
                (TopRight, 0.3),
                (MiddleRight, 0.6),
                (BottomRight, 0.9),
                (BottomMiddle, 0.8),
                (BottomLeft, 0.7),
                (MiddleLeft, 0.4),
            ],
        );
    }

    #[test]
    fn around_bottom_right() {
        let c = ramp().connections(2, 2, 1.0, 0.0);
        assert_slots(
            &c,
            [
                (TopLeft, 0.5),
                (TopMiddle, 0.6),
                (TopRight, 0.0),
                (MiddleRight, 0.0),
                (BottomRight, 0.0),
                (BottomMiddle, 0.0),
                (BottomLeft, 0.0),
                (MiddleLeft, 0.8),
            ],
        );
    }

    #[test]
    fn out_of_bounds_value_is_not_weighted() {
        let c = ramp().connections(0, 1, 10.0, -1.0);
        assert_slots(
            &c,
            [
                (TopLeft, -1.0),
                (TopMiddle, 1.0),
                (TopRight, 2.0),
                (MiddleRight, 5.0),
                (BottomRight, 8.0),
                (BottomMiddle, 7.0),
                (BottomLeft, -1.0),
                (MiddleLeft, -1.0),
            ],
        );
    }

    #[test]
    #[should_panic(expected = "is outside map width")]
    fn connections_out_of_bounds_panics() {
        ramp().connections(3, 1, 1.0, 0.0);
    }

    // ── add_connections ─────────────────────────────────────────

    #[test]
    fn add_connections_leaves_out_of_bounds_slots() {
        let map = ramp();
        let mut c = [7.0; 8];
        map.add_connections(2, 0, &mut c, 1.0);
        assert_slots(
            &c,
            [
                (TopLeft, 7.0),
                (TopMiddle, 7.0),
                (TopRight, 7.0),
                (MiddleRight, 7.0),
                (BottomRight, 7.0),
                (BottomMiddle, 7.6),
                (BottomLeft, 7.5),
                (MiddleLeft, 7.2),
            ],
        );
    }

    #[test]
    fn add_connections_accumulates_across_calls() {
        let map = ramp();
        let mut c = [0.0; 8];
        map.add_connections(1, 1, &mut c, 1.0);
        map.add_connections(1, 1, &mut c, 2.0);
        assert!((c[TopLeft.index()] - 0.3).abs() < 1e-6);
        assert!((c[BottomRight.index()] - 2.7).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "is outside map height")]
    fn add_connections_out_of_bounds_panics() {
        let mut c = [0.0; 8];
        ramp().add_connections(0, 3, &mut c, 1.0);
    }

    // ── Properties ──────────────────────────────────────────────

    #[test]
    fn slot_symmetry_on_small_grids() {
        for (w, h) in [(1, 1), (1, 4), (4, 1), (3, 3), (5, 2)] {
            let map = InfluenceMap::new(w, h, false, 0.0).unwrap();
            compliance::assert_slot_symmetry(&map);
        }
    }

    proptest! {
        #[test]
        fn connections_and_add_connections_agree(
            w in 1usize..7,
            h in 1usize..7,
            x in 0usize..7,
            y in 0usize..7,
            weight in -3f32..3.0,
            seed in -2f32..2.0,
        ) {
            let x = x % w;
            let y = y % h;
            let mut map = InfluenceMap::new(w, h, false, 0.0).unwrap();
            for i in 0..w * h {
                map.set(i % w, i / w, i as f32 * 0.5 - 1.0);
            }
            let overwrite = map.connections(x, y, weight, seed);
            let mut added = [seed; 8];
            let mut zeroed = [0.0; 8];
            map.add_connections(x, y, &mut zeroed, weight);
            for &(slot, _) in &map.neighbours(x, y) {
                added[slot.index()] = zeroed[slot.index()];
            }
            prop_assert_eq!(overwrite, added);
        }
    }
}
