use std::io::{Read, Write};

use pixel_grid::{Grid, Pixel};

use super::ImageCodec;
use crate::error::CodecError;
use crate::models::Compression;

/// PNG codec backed by the `png` crate.
///
/// Decoding accepts every PNG color type: palettes and low bit depths are
/// expanded, 16-bit samples are stripped to 8 bits, gray samples are copied
/// into all three channels, and alpha is discarded.
///
/// Encoding always writes 8-bit RGB. Channels outside 0..=255 are clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec {
    compression: Compression,
}

impl PngCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given zlib compression level when encoding.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}

impl ImageCodec for PngCodec {
    fn decode<R: Read>(&self, source: R) -> Result<Grid, CodecError> {
        let mut decoder = png::Decoder::new(source);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        if info.bit_depth != png::BitDepth::Eight {
            return Err(CodecError::UnsupportedColor(format!(
                "{:?} at {:?} bits",
                info.color_type, info.bit_depth
            )));
        }

        let samples = info.color_type.samples();
        let width = info.width as usize;
        let height = info.height as usize;

        let rows = buf
            .chunks(info.line_size)
            .take(height)
            .map(|line| {
                line[..width * samples]
                    .chunks_exact(samples)
                    .map(|px| sample_to_pixel(info.color_type, px))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            width,
            height,
            color_type = ?info.color_type,
            "Decoded PNG"
        );

        Ok(Grid::new(rows))
    }

    fn encode<W: Write>(&self, grid: &Grid, destination: W) -> Result<(), CodecError> {
        grid.ensure_rectangular()?;
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(CodecError::EmptyImage);
        }
        let too_large = || CodecError::TooLarge { width, height };
        let png_width = u32::try_from(width).map_err(|_| too_large())?;
        let png_height = u32::try_from(height).map_err(|_| too_large())?;

        let mut clamped = 0usize;
        let mut data = Vec::with_capacity(width * height * 3);
        for pixel in grid.pixels() {
            if !pixel.is_in_u8_range() {
                clamped += 1;
            }
            data.extend_from_slice(&pixel.to_u8_clamped());
        }
        if clamped > 0 {
            tracing::debug!(clamped, "Clamped out-of-range pixels to 0..=255");
        }

        let mut encoder = png::Encoder::new(destination, png_width, png_height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.compression.into());
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;

        tracing::debug!(width, height, "Encoded PNG");
        Ok(())
    }
}

/// Convert one expanded 8-bit sample group to a pixel, dropping alpha.
fn sample_to_pixel(color_type: png::ColorType, px: &[u8]) -> Result<Pixel, CodecError> {
    match color_type {
        png::ColorType::Grayscale | png::ColorType::GrayscaleAlpha => {
            Ok(Pixel::from_u8(px[0], px[0], px[0]))
        }
        png::ColorType::Rgb | png::ColorType::Rgba => Ok(Pixel::from_u8(px[0], px[1], px[2])),
        other => Err(CodecError::UnsupportedColor(format!("{:?}", other))),
    }
}

impl From<Compression> for png::Compression {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best,
        }
    }
}
