//! 2×2 block-average compression.

use crate::grid::{Grid, Pixel, CHANNELS};

/// Offsets of the pixels averaged into one output pixel, relative to the
/// block's top-left corner.
const BLOCK: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Downsample `grid` by averaging non-overlapping 2×2 blocks.
///
/// Blocks start at every even row `i` and, within it, every even column `j`
/// below the length of row `i`. Each output channel is the truncated mean of
/// the block pixels that exist; pixels past the end of a row or past the
/// last row are left out of both the sum and the count. A lone corner pixel
/// is therefore copied unchanged, and an edge pixel is averaged with its one
/// neighbor.
///
/// The column bound always comes from row `i`, the top row of the block,
/// even when row `i + 1` is shorter or longer. The input is not modified.
///
/// # Example
///
/// ```
/// use pixel_grid::{compress, Grid};
///
/// let grid = Grid::from(vec![
///     vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]],
///     vec![[199, 201, 116], [1, 9, 0], [255, 100, 100]],
///     vec![[123, 233, 151], [111, 99, 10], [0, 1, 1]],
/// ]);
///
/// assert_eq!(
///     compress(&grid),
///     Grid::from(vec![
///         vec![[108, 77, 57], [255, 177, 50]],
///         vec![[117, 166, 80], [0, 1, 1]],
///     ])
/// );
/// ```
pub fn compress(grid: &Grid) -> Grid {
    let rows = grid
        .rows()
        .iter()
        .enumerate()
        .step_by(2)
        .map(|(i, row)| {
            (0..row.len())
                .step_by(2)
                .map(|j| average_block(grid, i, j))
                .collect()
        })
        .collect();

    Grid::new(rows)
}

/// Truncated per-channel mean of the block anchored at `(i, j)`.
///
/// `(i, j)` itself always exists, so the count is at least 1.
fn average_block(grid: &Grid, i: usize, j: usize) -> Pixel {
    let mut sums = [0i64; CHANNELS];
    let mut count = 0i64;

    for pixel in BLOCK.iter().filter_map(|&(di, dj)| grid.get(i + di, j + dj)) {
        for (sum, c) in sums.iter_mut().zip(pixel.channels()) {
            *sum += c as i64;
        }
        count += 1;
    }

    Pixel::from(sums.map(|s| (s / count) as i32))
}
