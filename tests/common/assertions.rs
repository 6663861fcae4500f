//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use rawpix::Grid;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a grid has the given row lengths
pub fn assert_shape(grid: &Grid, expected: &[usize]) {
    let actual: Vec<usize> = grid.rows().iter().map(Vec::len).collect();
    assert_eq!(actual, expected, "Unexpected grid shape");
}

/// Assert every channel of every pixel lies in 0..=255
pub fn assert_u8_range(grid: &Grid) {
    for (i, row) in grid.rows().iter().enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            assert!(
                pixel.is_in_u8_range(),
                "Pixel ({}, {}) out of range: {:?}",
                i,
                j,
                pixel
            );
        }
    }
}
