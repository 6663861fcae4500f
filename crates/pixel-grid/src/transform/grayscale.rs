//! Grayscale reduction.

use crate::grid::Grid;

/// Replace every pixel with the truncated mean of its channels, in place.
///
/// See [`Pixel::to_gray`](crate::Pixel::to_gray). The reduction is lossy and
/// idempotent; the grid's shape is unchanged.
///
/// # Example
///
/// ```
/// use pixel_grid::{grayscale, Grid};
///
/// let mut grid = Grid::from(vec![vec![[233, 100, 115], [1, 9, 0]]]);
/// grayscale(&mut grid);
/// assert_eq!(grid, Grid::from(vec![vec![[149, 149, 149], [3, 3, 3]]]));
/// ```
pub fn grayscale(grid: &mut Grid) {
    for pixel in grid.pixels_mut() {
        *pixel = pixel.to_gray();
    }
}
