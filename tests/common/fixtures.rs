//! Test fixtures: sample grids and encoded images.

use rawpix::codec::{ImageCodec, PngCodec};
use rawpix::Grid;

/// The 4x4 grid whose compressed form is documented in the compress tests.
pub fn sample_4x4() -> Grid {
    Grid::from(vec![
        vec![[233, 100, 115], [0, 0, 0], [255, 255, 0], [3, 6, 7]],
        vec![[199, 201, 116], [1, 9, 0], [255, 100, 100], [99, 99, 0]],
        vec![[200, 200, 200], [1, 9, 0], [255, 100, 100], [99, 99, 0]],
        vec![[50, 100, 150], [1, 9, 0], [211, 5, 22], [199, 0, 10]],
    ])
}

/// Expected `compress(sample_4x4())`.
pub fn sample_4x4_compressed() -> Grid {
    Grid::from(vec![
        vec![[108, 77, 57], [153, 115, 26]],
        vec![[63, 79, 87], [191, 51, 33]],
    ])
}

/// A 3x3 grid exercising right, bottom and corner edge blocks.
pub fn sample_3x3() -> Grid {
    Grid::from(vec![
        vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]],
        vec![[199, 201, 116], [1, 9, 0], [255, 100, 100]],
        vec![[123, 233, 151], [111, 99, 10], [0, 1, 1]],
    ])
}

/// A width x height gradient with every channel in 0..=255.
pub fn gradient(width: usize, height: usize) -> Grid {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    [
                        (x * 255 / width.max(1)) as i32,
                        (y * 255 / height.max(1)) as i32,
                        ((x + y) * 7 % 256) as i32,
                    ]
                })
                .collect()
        })
        .collect::<Vec<Vec<[i32; 3]>>>();
    Grid::from(rows)
}

/// Encode `grid` as PNG bytes with the default codec.
pub fn png_bytes(grid: &Grid) -> Vec<u8> {
    let mut bytes = Vec::new();
    PngCodec::new()
        .encode(grid, &mut bytes)
        .expect("fixture grid should encode");
    bytes
}
