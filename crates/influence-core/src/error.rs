//! Error types for influence map construction and checked access.
//!
//! Out-of-range coordinates passed to the panicking accessors are
//! programmer errors and never surface here; [`MapError::CoordOutOfBounds`]
//! is only returned by the explicitly fallible `try_*` accessors.

use std::error::Error;
use std::fmt;

/// Errors from map construction, configuration, or checked access.
#[derive(Clone, Debug, PartialEq)]
pub enum MapError {
    /// Width or height is zero.
    EmptyMap {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A coordinate lies outside `[0, width) x [0, height)`.
    CoordOutOfBounds {
        /// Offending column.
        x: usize,
        /// Offending row.
        y: usize,
        /// Map width.
        width: usize,
        /// Map height.
        height: usize,
    },
    /// A configuration value failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap { width, height } => {
                write!(f, "map must have at least one cell (got {width}x{height})")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count {width}x{height} overflows usize")
            }
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for MapError {}
