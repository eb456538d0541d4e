//! Core types for the influence map workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: the fixed Moore-neighbourhood
//! slot layout ([`ConnectionIndex`]), the decay factors used by
//! propagation, map configuration, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod connection;
pub mod decay;
pub mod error;

pub use config::{cell_count, MapConfig, PropagationParams};
pub use connection::{ConnectionIndex, Connections, CONNECTION_COUNT};
pub use decay::DecayFactors;
pub use error::MapError;
