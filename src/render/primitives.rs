//! Primitive rendering functions.
//!
//! Implements integer rasterization for lines, rectangles, circles and
//! triangles. Every function writes through a [`PixelSurface`] and nothing
//! else: no allocation, no floating point, no read-back, no clipping.

use super::walker::{EdgeWalker, Span};
use crate::error::{Error, Result};
use crate::geometry::{Circle, Line, Point, Rect, Triangle};
use crate::surface::PixelSurface;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw the outline of this primitive.
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()>;

    /// Draw this primitive filled. Shapes without an interior draw their
    /// outline.
    fn draw_filled<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: S::Color,
    ) -> Result<()> {
        self.draw(surface, color)
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line between two points, both inclusive.
///
/// Vertical and horizontal lines are written as unit-step runs in
/// increasing order; anything else goes through an [`EdgeWalker`]. The
/// pixels written do not depend on endpoint order, and a zero-length line
/// writes exactly one pixel.
///
/// # Arguments
///
/// * `surface` - Target surface
/// * `start`, `end` - Endpoints
/// * `color` - Line color
pub fn draw_line<S: PixelSurface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    color: S::Color,
) {
    if start.x == end.x {
        let (top, bottom) = ordered(start.y, end.y);
        for y in top..=bottom {
            surface.set_pixel(start.x, y, color);
        }
    } else if start.y == end.y {
        let (left, right) = ordered(start.x, end.x);
        for x in left..=right {
            surface.set_pixel(x, start.y, color);
        }
    } else {
        for p in EdgeWalker::new(start, end) {
            surface.set_pixel(p.x, p.y, color);
        }
    }
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
fn draw_span<S: PixelSurface + ?Sized>(surface: &mut S, row: i32, span: Span, color: S::Color) {
    draw_line(
        surface,
        Point::new(span.left, row),
        Point::new(span.right, row),
        color,
    );
}

impl Drawable for Line {
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()> {
        draw_line(surface, self.start, self.end, color);
        Ok(())
    }
}

impl Drawable for Point {
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()> {
        surface.set_pixel(self.x, self.y, color);
        Ok(())
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

fn validate(rect: &Rect) -> Result<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        log::trace!("rejecting {}x{} rectangle", rect.width, rect.height);
        Err(Error::InvalidDimension {
            width: rect.width,
            height: rect.height,
        })
    }
}

/// Draw a rectangle outline.
///
/// `width` and `height` count pixels: the far corner is at
/// `(x + width - 1, y + height - 1)`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] without drawing anything if either
/// dimension is not positive.
pub fn draw_rect<S: PixelSurface + ?Sized>(
    surface: &mut S,
    origin: Point,
    width: i32,
    height: i32,
    color: S::Color,
) -> Result<()> {
    let rect = Rect {
        origin,
        width,
        height,
    };
    validate(&rect)?;

    let far = rect.far_corner();
    draw_line(surface, origin, Point::new(far.x, origin.y), color);
    draw_line(surface, origin, Point::new(origin.x, far.y), color);
    draw_line(surface, Point::new(far.x, origin.y), far, color);
    draw_line(surface, Point::new(origin.x, far.y), far, color);
    Ok(())
}

/// Draw a filled rectangle, one vertical line per column.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] without drawing anything if either
/// dimension is not positive.
pub fn draw_filled_rect<S: PixelSurface + ?Sized>(
    surface: &mut S,
    origin: Point,
    width: i32,
    height: i32,
    color: S::Color,
) -> Result<()> {
    let rect = Rect {
        origin,
        width,
        height,
    };
    validate(&rect)?;

    let far = rect.far_corner();
    for x in origin.x..=far.x {
        draw_line(surface, Point::new(x, origin.y), Point::new(x, far.y), color);
    }
    Ok(())
}

impl Drawable for Rect {
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()> {
        draw_rect(surface, self.origin, self.width, self.height, color)
    }

    fn draw_filled<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: S::Color,
    ) -> Result<()> {
        draw_filled_rect(surface, self.origin, self.width, self.height, color)
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Midpoint circle state for one octant, walked from (0, r) to the diagonal.
struct Octant {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl Octant {
    fn new(radius: i32) -> Self {
        Self {
            f: 1 - radius,
            ddf_x: 1,
            ddf_y: -2 * radius,
            x: 0,
            y: radius,
        }
    }
}

impl Iterator for Octant {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

/// Radius magnitude; `i32::MIN` saturates to `i32::MAX`.
fn radius_magnitude(radius: i32) -> i32 {
    i32::try_from(radius.unsigned_abs()).unwrap_or(i32::MAX)
}

/// Draw a circle outline using the midpoint algorithm.
///
/// A zero radius writes the center pixel once. Negative radii are drawn as
/// their magnitude. Center coordinates plus or minus the radius must fit in
/// `i32` with room for doubling; the arithmetic is exact up to 2^29.
///
/// # Arguments
///
/// * `surface` - Target surface
/// * `center` - Center pixel
/// * `radius` - Circle radius in pixels
/// * `color` - Outline color
pub fn draw_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: i32,
    color: S::Color,
) {
    let r = radius_magnitude(radius);
    let Point { x: cx, y: cy } = center;

    if r == 0 {
        surface.set_pixel(cx, cy, color);
        return;
    }

    surface.set_pixel(cx, cy + r, color);
    surface.set_pixel(cx, cy - r, color);
    surface.set_pixel(cx + r, cy, color);
    surface.set_pixel(cx - r, cy, color);

    for (x, y) in Octant::new(r) {
        surface.set_pixel(cx + x, cy + y, color);
        surface.set_pixel(cx - x, cy + y, color);
        surface.set_pixel(cx + x, cy - y, color);
        surface.set_pixel(cx - x, cy - y, color);
        surface.set_pixel(cx + y, cy + x, color);
        surface.set_pixel(cx - y, cy + x, color);
        surface.set_pixel(cx + y, cy - x, color);
        surface.set_pixel(cx - y, cy - x, color);
    }
}

/// Draw a filled circle using the midpoint algorithm.
///
/// Starts with the vertical diameter, then draws four vertical lines per
/// octant step joining each symmetric pair of outline points. The radius
/// is read as in [`draw_circle`].
pub fn draw_filled_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: i32,
    color: S::Color,
) {
    let r = radius_magnitude(radius);
    let Point { x: cx, y: cy } = center;

    draw_line(surface, Point::new(cx, cy - r), Point::new(cx, cy + r), color);

    for (x, y) in Octant::new(r) {
        draw_line(surface, Point::new(cx + x, cy - y), Point::new(cx + x, cy + y), color);
        draw_line(surface, Point::new(cx + y, cy - x), Point::new(cx + y, cy + x), color);
        draw_line(surface, Point::new(cx - x, cy - y), Point::new(cx - x, cy + y), color);
        draw_line(surface, Point::new(cx - y, cy - x), Point::new(cx - y, cy + x), color);
    }
}

impl Drawable for Circle {
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()> {
        draw_circle(surface, self.center, self.radius, color);
        Ok(())
    }

    fn draw_filled<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: S::Color,
    ) -> Result<()> {
        draw_filled_circle(surface, self.center, self.radius, color);
        Ok(())
    }
}

// ============================================================================
// Triangle Drawing
// ============================================================================

/// Draw a triangle outline.
///
/// The written pixels are the same for every ordering of the vertices.
pub fn draw_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    a: Point,
    b: Point,
    c: Point,
    color: S::Color,
) {
    let [v0, v1, v2] = Triangle::new(a, b, c).sorted_by_row();
    draw_line(surface, v0, v1, color);
    draw_line(surface, v1, v2, color);
    draw_line(surface, v0, v2, color);
}

/// Draw a filled triangle with a scanline fill.
///
/// Vertices are sorted by row into `v0, v1, v2` and three edge walkers are
/// run in lockstep, one row at a time:
///
/// ```text
///        v0
///        /\
///   e01 /  \ e02          rows v0.y .. v1.y     : e01 + e02
///      /    \
///    v1------\            rows v1.y ..= v2.y    : e12 + e02
///       `-.   \                (+ what e01 still has on row v1.y)
///      e12 `-. \
///              v2
/// ```
///
/// Each row is drawn as one span from the leftmost to the rightmost column
/// the active walkers touched on that row. The walkers come from
/// [`EdgeWalker::by_rows`] and produce exactly the pixels [`draw_line`]
/// would, so the fill always covers the outline drawn by [`draw_triangle`].
///
/// If all three vertices share a row, a single span from the smallest to
/// the largest column is drawn.
pub fn draw_filled_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    a: Point,
    b: Point,
    c: Point,
    color: S::Color,
) {
    let triangle = Triangle::new(a, b, c);
    let [v0, v1, v2] = triangle.sorted_by_row();

    if triangle.is_flat() {
        log::trace!("flat triangle on row {}", v0.y);
        let span = Span::single(v0.x).include(v1.x).include(v2.x);
        draw_span(surface, v0.y, span, color);
        return;
    }

    let mut e01 = EdgeWalker::by_rows(v0, v1);
    let mut e02 = EdgeWalker::by_rows(v0, v2);
    let mut e12 = EdgeWalker::by_rows(v1, v2);

    // Flat bottom: the top half runs through the last row.
    let last_top = if v1.y == v2.y { v1.y } else { v1.y - 1 };

    for row in v0.y..=last_top {
        fill_row(surface, row, &mut [&mut e01, &mut e02], color);
    }

    // e01 is only non-empty here on row v1.y.
    for row in (last_top + 1)..=v2.y {
        fill_row(surface, row, &mut [&mut e01, &mut e12, &mut e02], color);
    }
}

/// Drain `edges` of every point on `row` and draw the covering span.
fn fill_row<S: PixelSurface + ?Sized>(
    surface: &mut S,
    row: i32,
    edges: &mut [&mut EdgeWalker],
    color: S::Color,
) {
    let span = edges
        .iter_mut()
        .filter_map(|edge| edge.consume_row(row))
        .reduce(Span::union);

    if let Some(span) = span {
        draw_span(surface, row, span, color);
    }
}

impl Drawable for Triangle {
    fn draw<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: S::Color) -> Result<()> {
        let [a, b, c] = self.vertices;
        draw_triangle(surface, a, b, c, color);
        Ok(())
    }

    fn draw_filled<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: S::Color,
    ) -> Result<()> {
        let [a, b, c] = self.vertices;
        draw_filled_triangle(surface, a, b, c, color);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
