//! Coordinate-to-index translation with bounds enforcement.

use influence_core::MapError;

/// Fail fast unless `(x, y)` lies inside a `width x height` grid.
///
/// # Panics
///
/// If `x >= width` or `y >= height`. The panic is reported at the
/// caller's location.
#[track_caller]
pub(crate) fn assert_in_bounds(x: usize, y: usize, width: usize, height: usize) {
    assert!(x < width, "x ({x}) is outside map width {width}");
    assert!(y < height, "y ({y}) is outside map height {height}");
}

/// Row-major index of `(x, y)`.
///
/// # Panics
///
/// As [`assert_in_bounds`].
#[track_caller]
pub(crate) fn linear_index(x: usize, y: usize, width: usize, height: usize) -> usize {
    assert_in_bounds(x, y, width, height);
    y * width + x
}

/// Row-major index of `(x, y)`, or `CoordOutOfBounds`.
pub(crate) fn checked_index(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<usize, MapError> {
    if x >= width || y >= height {
        return Err(MapError::CoordOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(y * width + x)
}
