//! The pixel-surface capability consumed by the rasterizers.
//!
//! Rasterizers only ever write. They do not read pixels back, do not clip,
//! and do not assume any storage layout: a surface may be an in-memory
//! buffer, a memory-mapped display, or a recorder used in tests.

use std::collections::HashSet;

use crate::geometry::Point;

/// A write-only pixel target.
///
/// Coordinates arrive exactly as the rasterizers computed them, including
/// negative values and values past [`size`](Self::size). Whether such
/// writes are ignored, clamped, or wrapped is up to the implementation.
pub trait PixelSurface {
    /// Color value written to each pixel. Never inspected by the rasterizers.
    type Color: Copy;

    /// Write one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color);

    /// Surface size in pixels as `(width, height)`.
    ///
    /// Informational only; callers use it for layout.
    fn size(&self) -> (u32, u32);
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    type Color = S::Color;

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color) {
        (**self).set_pixel(x, y, color);
    }

    #[inline]
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }
}

/// A surface that records every write in call order.
///
/// Useful for asserting exact write counts and pixel sets, which a
/// framebuffer cannot show (it forgets overdraw and drops out-of-bounds
/// writes).
#[derive(Debug, Clone)]
pub struct PixelRecorder<C> {
    width: u32,
    height: u32,
    writes: Vec<(Point, C)>,
}

impl<C: Copy> PixelRecorder<C> {
    /// Create an empty recorder that reports the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }

    /// All writes in the order they were issued.
    #[must_use]
    pub fn writes(&self) -> &[(Point, C)] {
        &self.writes
    }

    /// Number of `set_pixel` calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Whether no pixel was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Distinct coordinates written, regardless of color or repetition.
    #[must_use]
    pub fn pixel_set(&self) -> HashSet<Point> {
        self.writes.iter().map(|&(p, _)| p).collect()
    }

    /// Forget all recorded writes.
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl<C: Copy> PixelSurface for PixelRecorder<C> {
    type Color = C;

    fn set_pixel(&mut self, x: i32, y: i32, color: C) {
        self.writes.push((Point::new(x, y), color));
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
