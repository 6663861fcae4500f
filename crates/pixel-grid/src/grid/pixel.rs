//! RGB pixel type
//!
//! A pixel is exactly three integer channels in (red, green, blue) order.
//! Channels are conventionally 0..=255 but nothing here enforces that.

/// Number of channels in every [`Pixel`].
pub const CHANNELS: usize = 3;

/// A pixel with three integer channels.
///
/// Values outside 0..=255 are carried through every transformation
/// unchanged; only [`to_u8_clamped()`](Pixel::to_u8_clamped) narrows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel([i32; CHANNELS]);

impl Pixel {
    /// The fixed pixel substituted by [`merge`](crate::merge) when neither
    /// input has data for a cell.
    pub const MAX_INTENSITY: Pixel = Pixel([255, 255, 255]);

    /// Create a pixel from red, green and blue channel values.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b])
    }

    /// Create a pixel from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pixel_grid::Pixel;
    /// assert_eq!(Pixel::from_u8(1, 2, 3), Pixel::new(1, 2, 3));
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self([r as i32, g as i32, b as i32])
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub fn channels(&self) -> [i32; CHANNELS] {
        self.0
    }

    /// Mutable access to the channels.
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [i32; CHANNELS] {
        &mut self.0
    }

    /// Convert to `[R, G, B]` bytes, clamping each channel to 0..=255.
    #[inline]
    pub fn to_u8_clamped(&self) -> [u8; CHANNELS] {
        self.0.map(|c| c.clamp(0, 255) as u8)
    }

    /// Whether every channel already lies in 0..=255.
    #[inline]
    pub fn is_in_u8_range(&self) -> bool {
        self.0.iter().all(|&c| (0..=255).contains(&c))
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(&self) -> i32 {
        self.0[0].max(self.0[1]).max(self.0[2])
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(&self) -> i32 {
        self.0[0].min(self.0[1]).min(self.0[2])
    }

    /// The pixel with every channel set to the truncated mean of its channels.
    ///
    /// The sum is taken in `i64`, so no channel combination can overflow.
    ///
    /// # Example
    /// ```
    /// use pixel_grid::Pixel;
    /// // 233 + 100 + 115 = 448, 448 / 3 = 149
    /// assert_eq!(Pixel::new(233, 100, 115).to_gray(), Pixel::new(149, 149, 149));
    /// ```
    #[inline]
    pub fn to_gray(&self) -> Self {
        let sum: i64 = self.0.iter().map(|&c| c as i64).sum();
        let gray = (sum / CHANNELS as i64) as i32;
        Self([gray; CHANNELS])
    }

    /// The pixel with its maximum and minimum channel values swapped.
    ///
    /// `max` and `min` are read once, before any channel changes. A channel
    /// equal to `max` becomes `min`; otherwise a channel equal to `min`
    /// becomes `max`; anything else is kept. Because the `max` test runs
    /// first, a uniform pixel maps to itself.
    ///
    /// # Example
    /// ```
    /// use pixel_grid::Pixel;
    /// assert_eq!(Pixel::new(100, 200, 100).inverted(), Pixel::new(200, 100, 200));
    /// assert_eq!(Pixel::new(7, 7, 7).inverted(), Pixel::new(7, 7, 7));
    /// ```
    #[inline]
    pub fn inverted(&self) -> Self {
        let max = self.max_channel();
        let min = self.min_channel();
        Self(self.0.map(|c| {
            if c == max {
                min
            } else if c == min {
                max
            } else {
                c
            }
        }))
    }
}

impl From<[i32; CHANNELS]> for Pixel {
    #[inline]
    fn from(channels: [i32; CHANNELS]) -> Self {
        Self(channels)
    }
}

impl From<[u8; CHANNELS]> for Pixel {
    #[inline]
    fn from(bytes: [u8; CHANNELS]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Pixel> for [i32; CHANNELS] {
    #[inline]
    fn from(pixel: Pixel) -> Self {
        pixel.0
    }
}
