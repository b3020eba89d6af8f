//! Shape rasterization.
//!
//! Integer-only, allocation-free rasterizers that write through a
//! [`PixelSurface`](crate::surface::PixelSurface).
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: incremental [`EdgeWalker`] with axis-aligned fast paths
//! - **Midpoint Circle**: outlined and filled circles from one octant
//! - **Scanline Fill**: filled triangles from three edge walkers advanced row by row
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;
mod walker;

pub use primitives::{
    draw_circle, draw_filled_circle, draw_filled_rect, draw_filled_triangle, draw_line,
    draw_rect, draw_triangle, Drawable,
};
pub use walker::{EdgeWalker, Span};
