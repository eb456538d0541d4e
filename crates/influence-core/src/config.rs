//! Map and propagation configuration.
//!
//! [`MapConfig`] describes a map before it is allocated and
//! [`PropagationParams`] bundles the per-step propagation settings.
//! Both validate at the boundary so that values loaded from settings
//! files are rejected before they reach the hot loop.

use crate::decay::DecayFactors;
use crate::error::MapError;

/// Number of cells in a `width x height` map.
///
/// Returns `Err(MapError::EmptyMap)` if either dimension is zero, or
/// `Err(MapError::CellCountOverflow)` if the product does not fit in `usize`.
pub fn cell_count(width: usize, height: usize) -> Result<usize, MapError> {
    if width == 0 || height == 0 {
        return Err(MapError::EmptyMap { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(MapError::CellCountOverflow { width, height })
}

// ── MapConfig ──────────────────────────────────────────────────────

/// Construction parameters for an influence map.
///
/// ```
/// use influence_core::MapConfig;
///
/// let config = MapConfig::new(16, 9).clamp_to_unit(true).initial_value(0.25);
/// assert_eq!(config.validate(), Ok(144));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// Number of columns. Must be non-zero.
    pub width: usize,
    /// Number of rows. Must be non-zero.
    pub height: usize,
    /// Saturate every stored value to `[0.0, 1.0]`. Default: `false`.
    pub clamp_to_unit: bool,
    /// Value every cell starts with (clamp-adjusted). Default: `0.0`.
    pub initial_value: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            clamp_to_unit: false,
            initial_value: 0.0,
        }
    }
}

impl MapConfig {
    /// A `width x height` unclamped, zero-filled configuration.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set whether stored values saturate to `[0.0, 1.0]`.
    pub fn clamp_to_unit(mut self, clamp: bool) -> Self {
        self.clamp_to_unit = clamp;
        self
    }

    /// Set the initial cell value.
    pub fn initial_value(mut self, value: f32) -> Self {
        self.initial_value = value;
        self
    }

    /// Check structural invariants and return the cell count.
    pub fn validate(&self) -> Result<usize, MapError> {
        let cells = cell_count(self.width, self.height)?;
        if !self.initial_value.is_finite() {
            return Err(MapError::InvalidConfig {
                reason: format!("initial_value must be finite (got {})", self.initial_value),
            });
        }
        Ok(cells)
    }
}

// ── PropagationParams ──────────────────────────────────────────────

/// Settings for one propagation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationParams {
    /// Blend factor toward the neighbourhood maximum, in `[0, 1]`.
    /// `0` freezes the map, `1` replaces each cell outright. Default: 0.5.
    pub momentum: f32,
    /// Exponential falloff per unit of neighbour distance, `>= 0`. Default: 1.0.
    pub decay: f32,
}

impl Default for PropagationParams {
    fn default() -> Self {
        Self {
            momentum: 0.5,
            decay: 1.0,
        }
    }
}

impl PropagationParams {
    /// Parameters with the given momentum and decay.
    pub fn new(momentum: f32, decay: f32) -> Self {
        Self { momentum, decay }
    }

    /// Precomputed orthogonal and diagonal decay factors.
    pub fn decay_factors(&self) -> DecayFactors {
        DecayFactors::new(self.decay)
    }

    /// Reject NaN, infinities, momentum outside `[0, 1]`, and negative decay.
    pub fn validate(&self) -> Result<(), MapError> {
        if !self.momentum.is_finite() || !(0.0..=1.0).contains(&self.momentum) {
            return Err(MapError::InvalidConfig {
                reason: format!("momentum must be in [0, 1] (got {})", self.momentum),
            });
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(MapError::InvalidConfig {
                reason: format!("decay must be finite and >= 0 (got {})", self.decay),
            });
        }
        Ok(())
    }
}
