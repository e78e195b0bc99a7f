//! SampleImage: three 8-bit channel planes in row-major order.

use crate::error::GridError;

/// A three-channel 8-bit image.
///
/// Pixels are stored one `[u8; 3]` per pixel in row-major order, so every
/// channel value is a valid 8-bit unsigned integer by construction. The
/// image carries no color-space tag: callers know which encoding they asked
/// the generator for and pass that to [`to_display_rgb`](crate::to_display_rgb).
///
/// # Example
///
/// ```
/// use color_grid::{generate, Channel};
///
/// let image = generate(Channel::First, 127, 256).unwrap();
/// assert_eq!(image.width(), 256);
/// assert_eq!(image.height(), 256);
/// assert_eq!(image.pixel(10, 20), [127, 20, 10]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleImage {
    pixels: Vec<[u8; 3]>,
    width: usize,
    height: usize,
}

impl SampleImage {
    /// Wrap an existing pixel buffer.
    ///
    /// Fails with [`GridError::InvalidInput`] when the buffer length does not
    /// match `width * height`.
    pub fn from_pixels(pixels: Vec<[u8; 3]>, width: usize, height: usize) -> Result<Self, GridError> {
        if pixels.len() != width * height {
            return Err(GridError::InvalidInput(format!(
                "pixel buffer holds {} pixels, expected {}x{}={}",
                pixels.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image by evaluating `f(row, col)` for every pixel.
    pub(crate) fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Apply a per-pixel transform, producing a new image of the same size.
    pub(crate) fn map(&self, f: impl Fn([u8; 3]) -> [u8; 3]) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) outside {}x{} image",
            row,
            col,
            self.width,
            self.height
        );
        self.pixels[row * self.width + col]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// One channel plane (0, 1 or 2) in row-major order.
    pub fn channel(&self, index: usize) -> Vec<u8> {
        self.pixels.iter().map(|p| p[index]).collect()
    }

    /// Interleaved `[c0, c1, c2, c0, c1, c2, ...]` bytes, ready for an
    /// 8-bit RGB encoder.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.iter().copied()).collect()
    }

    /// Upper-left, lower-right and center pixels.
    ///
    /// The center is `(height / 2, width / 2)`.
    pub fn landmarks(&self) -> [[u8; 3]; 3] {
        [
            self.pixel(0, 0),
            self.pixel(self.height - 1, self.width - 1),
            self.pixel(self.height / 2, self.width / 2),
        ]
    }
}
