//! Benchmark profiles for influence maps.
//!
//! Shared setup used by the criterion benches so every bench measures the
//! same map shapes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use influence_core::PropagationParams;
use influence_map::InfluenceMap;

/// Side length of the square "reference" map.
pub const REFERENCE_SIDE: usize = 100;

/// Propagation settings used by every propagation bench.
pub fn reference_params() -> PropagationParams {
    PropagationParams::new(0.5, 0.8)
}

/// `side x side` clamped map seeded with a deterministic scatter of sources.
pub fn reference_map(side: usize) -> InfluenceMap {
    let mut map = InfluenceMap::new(side, side, true, 0.0).expect("side must be non-zero");
    // Deterministic scatter: roughly one source per 64 cells.
    for i in 0..(side * side) / 64 {
        let h = (i as u64).wrapping_mul(6364136223846793007);
        let x = (h % side as u64) as usize;
        let y = ((h >> 32) % side as u64) as usize;
        map.set(x, y, 1.0);
    }
    map
}
