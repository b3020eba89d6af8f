//! # tinyraster
//!
//! Integer-only rasterization of lines, rectangles, circles and triangles
//! onto any pixel-addressable surface.
//!
//! The rasterizers use incremental integer algorithms only: no floating
//! point and no allocation. They are meant for small display controllers
//! where the only thing the drawing code can do is write a pixel.
//!
//! ## Features
//!
//! - **Surface-agnostic**: draw onto anything implementing [`PixelSurface`]
//! - **Exact**: a line and its reverse write the same pixels; a filled
//!   triangle always covers its outline, for every vertex ordering
//! - **Reference surfaces**: in-memory [`Framebuffer`] and a
//!   [`PixelRecorder`] for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use tinyraster::prelude::*;
//!
//! let mut fb = Framebuffer::new(320, 240)?;
//! draw_line(&mut fb, Point::new(10, 10), Point::new(94, 10), Rgba::BLACK);
//! draw_filled_triangle(
//!     &mut fb,
//!     Point::new(160, 0),
//!     Point::new(80, 239),
//!     Point::new(213, 120),
//!     Rgba::RED,
//! );
//! draw_rect(&mut fb, Point::new(5, 5), 50, 20, Rgba::BLUE)?;
//! # Ok::<(), tinyraster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `png` (default): [`output::PngEncoder`] for framebuffer export
//!
//! [`PixelSurface`]: surface::PixelSurface
//! [`Framebuffer`]: framebuffer::Framebuffer
//! [`PixelRecorder`]: surface::PixelRecorder

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color values passed through to surfaces.
pub mod color;

/// Integer geometric primitives (points, lines, rectangles, circles, triangles).
pub mod geometry;

/// The pixel-surface capability and a recording implementation.
pub mod surface;

/// In-memory RGBA framebuffer.
pub mod framebuffer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Shape rasterization.
pub mod render;

/// Output encoders (PNG).
#[cfg(feature = "png")]
#[cfg_attr(docsrs, doc(cfg(feature = "png")))]
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tinyraster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use tinyraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Line, Point, Rect, Triangle};
    pub use crate::render::{
        draw_circle, draw_filled_circle, draw_filled_rect, draw_filled_triangle, draw_line,
        draw_rect, draw_triangle, Drawable, EdgeWalker,
    };
    pub use crate::surface::{PixelRecorder, PixelSurface};
}
