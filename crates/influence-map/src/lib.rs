//! Dense, double-buffered influence maps.
//!
//! An [`InfluenceMap`] is a fixed-size rectangular grid of `f32` influence
//! values. Influence is written into individual cells and then spread
//! across the grid by [`InfluenceMap::propagate`], which pulls each cell
//! toward the strongest decayed value in its 8-connected neighbourhood.
//!
//! ```
//! use influence_map::InfluenceMap;
//! use influence_core::ConnectionIndex;
//!
//! let mut map = InfluenceMap::new(3, 3, true, 0.0).unwrap();
//! map.set(1, 1, 1.0);
//! map.propagate(0.5, 1.0);
//!
//! assert_eq!(map.get(1, 1), 0.5);
//! let around = map.connections(1, 1, 1.0, -1.0);
//! assert!(around[ConnectionIndex::TopMiddle.index()] > around[ConnectionIndex::TopLeft.index()]);
//! ```
//!
//! # Preconditions
//!
//! Coordinates passed to [`InfluenceMap::get`], [`InfluenceMap::set`] and
//! the neighbourhood queries must lie inside the map. Violations are
//! programmer errors and panic at the call site; use
//! [`InfluenceMap::try_get`] / [`InfluenceMap::try_set`] when coordinates
//! come from untrusted input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bounds;
mod buffer;
pub mod map;
pub mod neighbourhood;
mod propagate;

#[cfg(test)]
pub(crate) mod compliance;

pub use map::InfluenceMap;
pub use neighbourhood::Neighbours;
