//! Image codec boundary.
//!
//! The transformations in `pixel_grid` never touch image files. A codec
//! turns an encoded image into a [`Grid`] and back; this is the only I/O in
//! the crate.

mod png_codec;

pub use png_codec::PngCodec;

use std::io::{Read, Write};

use pixel_grid::Grid;

use crate::error::CodecError;

/// Decodes images into pixel grids and encodes grids back into images.
///
/// Sources and destinations are opaque byte streams; choosing files or
/// paths is up to the caller.
pub trait ImageCodec {
    /// Decode `source` into a grid with one row per image row and three
    /// 0..=255 channels per pixel.
    fn decode<R: Read>(&self, source: R) -> Result<Grid, CodecError>;

    /// Encode `grid` into `destination`.
    ///
    /// The grid must be rectangular; its height is the image height and its
    /// row 0 length the image width. Nothing is written if validation fails.
    fn encode<W: Write>(&self, grid: &Grid, destination: W) -> Result<(), CodecError>;
}
