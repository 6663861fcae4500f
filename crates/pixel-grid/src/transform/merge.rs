//! Merging two grids of independent shape.

use crate::grid::{Grid, Pixel};

/// Combine `first` and `second` into a new grid.
///
/// The output has the larger of the two heights and the larger of the two
/// nominal widths (row 0 lengths). For output row `i`, `first` has priority
/// on even rows and `second` on odd rows. Each cell takes the priority
/// grid's pixel if that cell exists there, else the other grid's pixel, else
/// [`Pixel::MAX_INTENSITY`].
///
/// Missing cells are looked up per row, so ragged inputs are fine. Neither
/// input is modified.
///
/// # Example
///
/// ```
/// use pixel_grid::{merge, Grid, Pixel};
///
/// let a = Grid::from(vec![vec![[233, 100, 115], [0, 0, 0], [255, 255, 0], [1, 2, 3]]]);
/// let b = Grid::from(vec![
///     vec![[199, 201, 116]],
///     vec![[1, 9, 0]],
///     vec![[255, 100, 100]],
/// ]);
///
/// let merged = merge(&a, &b);
/// assert_eq!((merged.height(), merged.width()), (3, 4));
/// assert_eq!(merged.get(0, 1), a.get(0, 1));
/// assert_eq!(merged.get(1, 0), b.get(1, 0));
/// assert_eq!(merged.get(1, 1), Some(&Pixel::MAX_INTENSITY));
/// ```
pub fn merge(first: &Grid, second: &Grid) -> Grid {
    let height = first.height().max(second.height());
    let width = first.width().max(second.width());

    let rows = (0..height)
        .map(|i| {
            let (primary, fallback) = if i % 2 == 0 {
                (first, second)
            } else {
                (second, first)
            };
            (0..width)
                .map(|j| {
                    primary
                        .get(i, j)
                        .or_else(|| fallback.get(i, j))
                        .copied()
                        .unwrap_or(Pixel::MAX_INTENSITY)
                })
                .collect()
        })
        .collect();

    Grid::new(rows)
}
