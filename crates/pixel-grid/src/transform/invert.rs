//! Min/max channel inversion.

use crate::grid::Grid;

/// Swap each pixel's maximum and minimum channel values, in place.
///
/// See [`Pixel::inverted`](crate::Pixel::inverted) for the tie-break rule:
/// a channel equal to the maximum always becomes the minimum, so uniform
/// pixels are fixed points.
///
/// # Example
///
/// ```
/// use pixel_grid::{invert, Grid};
///
/// let mut grid = Grid::from(vec![vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]]]);
/// invert(&mut grid);
/// assert_eq!(grid, Grid::from(vec![vec![[100, 233, 115], [0, 0, 0], [0, 0, 255]]]));
/// ```
pub fn invert(grid: &mut Grid) {
    for pixel in grid.pixels_mut() {
        *pixel = pixel.inverted();
    }
}
