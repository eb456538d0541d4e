//! The [`InfluenceMap`] grid: storage, accessors and clamping.

use influence_core::config::cell_count;
use influence_core::{MapConfig, MapError};

use crate::bounds::{checked_index, linear_index};
use crate::buffer::DoubleBuffer;

/// A dense `width x height` grid of influence values.
///
/// Cells are stored row-major (`index = y * width + x`) in the front half
/// of a [`DoubleBuffer`]; the back half is scratch space for
/// [`propagate`](InfluenceMap::propagate) and is never observable between
/// calls.
///
/// When constructed with `clamp_to_unit`, every stored value saturates to
/// `[0.0, 1.0]`: on construction, on [`set`](InfluenceMap::set), and on
/// every propagation step.
#[derive(Clone, Debug)]
pub struct InfluenceMap {
    width: usize,
    height: usize,
    clamp_to_unit: bool,
    pub(crate) buffers: DoubleBuffer,
    pub(crate) generation: u64,
}

impl InfluenceMap {
    /// Allocate a `width x height` map with every cell set to
    /// `initial_value` (clamp-adjusted when `clamp_to_unit` is set).
    ///
    /// Returns `Err(MapError::EmptyMap)` if either dimension is zero, or
    /// `Err(MapError::CellCountOverflow)` if `width * height` overflows `usize`.
    pub fn new(
        width: usize,
        height: usize,
        clamp_to_unit: bool,
        initial_value: f32,
    ) -> Result<Self, MapError> {
        let cells = cell_count(width, height)?;
        let initial = clamp_value(clamp_to_unit, initial_value);
        tracing::debug!(width, height, clamp_to_unit, initial, "allocating influence map");
        Ok(Self {
            width,
            height,
            clamp_to_unit,
            buffers: DoubleBuffer::filled(cells, initial),
            generation: 0,
        })
    }

    /// Allocate a map from a validated [`MapConfig`].
    ///
    /// Unlike [`new`](Self::new), this also rejects a non-finite initial value.
    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        Self::new(
            config.width,
            config.height,
            config.clamp_to_unit,
            config.initial_value,
        )
    }

    /// Total number of cells (`width * height`).
    pub fn num_cells(&self) -> usize {
        self.buffers.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether stored values saturate to `[0.0, 1.0]`.
    pub fn values_clamped(&self) -> bool {
        self.clamp_to_unit
    }

    /// Number of completed propagation steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[f32] {
        self.buffers.front()
    }

    /// Influence at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x >= width()` or `y >= height()`.
    #[track_caller]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.buffers.front()[linear_index(x, y, self.width, self.height)]
    }

    /// Store `value` at `(x, y)`, clamp-adjusted.
    ///
    /// # Panics
    ///
    /// If `x >= width()` or `y >= height()`.
    #[track_caller]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = linear_index(x, y, self.width, self.height);
        self.buffers.front_mut()[i] = self.clamp(value);
    }

    /// Influence at `(x, y)`, or `Err(MapError::CoordOutOfBounds)`.
    pub fn try_get(&self, x: usize, y: usize) -> Result<f32, MapError> {
        let i = checked_index(x, y, self.width, self.height)?;
        Ok(self.buffers.front()[i])
    }

    /// Store `value` at `(x, y)`, or `Err(MapError::CoordOutOfBounds)`.
    pub fn try_set(&mut self, x: usize, y: usize, value: f32) -> Result<(), MapError> {
        let i = checked_index(x, y, self.width, self.height)?;
        self.buffers.front_mut()[i] = self.clamp(value);
        Ok(())
    }

    /// `value` as this map would store it.
    ///
    /// Identity when clamping is off; otherwise saturates to `[0.0, 1.0]`.
    pub fn clamp(&self, value: f32) -> f32 {
        clamp_value(self.clamp_to_unit, value)
    }
}

/// Saturating clamp to `[0.0, 1.0]` when `enabled`.
///
/// Anything that is neither in range nor above `1.0` maps to `0.0`, NaN
/// included.
pub(crate) fn clamp_value(enabled: bool, value: f32) -> f32 {
    if !enabled || (0.0..=1.0).contains(&value) {
        value
    } else if value > 1.0 {
        1.0
    } else {
        0.0
    }
}
