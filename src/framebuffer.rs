//! In-memory RGBA framebuffer.
//!
//! The reference [`PixelSurface`]: a tightly packed, row-major RGBA buffer
//! that silently drops writes outside its bounds.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::surface::PixelSurface;

/// Bytes per RGBA pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each, no row padding.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyraster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(320, 240).unwrap();
    /// assert_eq!(fb.width(), 320);
    /// assert_eq!(fb.height(), 240);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        log::debug!("allocating {width}x{height} framebuffer ({size} bytes)");

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = (self.width as usize) * BYTES_PER_PIXEL;
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.pixel_index(x, y)?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Number of pixels currently holding exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|chunk| *chunk == rgba)
            .count()
    }

    /// Byte index of a pixel, or `None` when out of bounds.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL)
    }
}

impl PixelSurface for Framebuffer {
    type Color = Rgba;

    /// Does nothing if the coordinates are out of bounds.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
        }
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
