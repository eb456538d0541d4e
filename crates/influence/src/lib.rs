//! Influence: dense influence maps for spatial reasoning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the influence sub-crates. Adding `influence` as a single dependency is
//! enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use influence::prelude::*;
//!
//! // A 16x16 map whose values saturate to [0, 1].
//! let mut map = InfluenceMap::from_config(
//!     &MapConfig::new(16, 16).clamp_to_unit(true),
//! ).unwrap();
//!
//! // Two sources of influence.
//! map.set(2, 3, 1.0);
//! map.set(12, 10, 0.8);
//!
//! // Let them spread for a few generations.
//! map.propagate_for(&PropagationParams::new(0.6, 0.5), 4);
//! assert_eq!(map.generation(), 4);
//!
//! // Read the neighbourhood around a cell; off-map slots read -1.
//! let around = map.connections(0, 0, 1.0, -1.0);
//! assert_eq!(around[ConnectionIndex::TopLeft.index()], -1.0);
//! assert!(around[ConnectionIndex::BottomRight.index()] >= 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `influence-core` | Neighbourhood slots, decay factors, configuration, errors |
//! | [`map`] | `influence-map` | The [`InfluenceMap`](map::InfluenceMap) grid |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`influence-core`).
///
/// Contains [`types::ConnectionIndex`], [`types::DecayFactors`],
/// [`types::MapConfig`], [`types::PropagationParams`] and
/// [`types::MapError`].
pub use influence_core as types;

/// The influence map itself (`influence-map`).
pub use influence_map as map;

/// Common imports for typical usage.
///
/// ```rust
/// use influence::prelude::*;
/// ```
pub mod prelude {
    pub use influence_core::{
        ConnectionIndex, Connections, DecayFactors, MapConfig, MapError, PropagationParams,
        CONNECTION_COUNT,
    };
    pub use influence_map::{InfluenceMap, Neighbours};
}
