//! Horizontal mirror.

use crate::grid::Grid;

/// Reverse the pixel order of every row in place.
///
/// Each row is reversed using its own length, so ragged grids keep their
/// shape. Pixel values are never changed, only their positions.
///
/// # Example
///
/// ```
/// use pixel_grid::{mirror, Grid};
///
/// let mut grid = Grid::from(vec![vec![[233, 100, 115], [0, 0, 0], [255, 255, 255]]]);
/// mirror(&mut grid);
/// assert_eq!(grid, Grid::from(vec![vec![[255, 255, 255], [0, 0, 0], [233, 100, 115]]]));
/// ```
pub fn mirror(grid: &mut Grid) {
    for row in grid.rows_mut() {
        row.reverse();
    }
}
