//! Integer geometric primitives.
//!
//! Shapes are plain values. They carry no state between draws and are
//! rasterized through [`Drawable`](crate::render::Drawable).

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// An axis-aligned rectangle.
///
/// `width` and `height` are pixel counts: the rectangle covers columns
/// `x..x + width` and rows `y..y + height`, so its far corner is
/// `(x + width - 1, y + height - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Whether both dimensions are positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The last covered pixel (bottom-right, inclusive).
    #[must_use]
    pub const fn far_corner(&self) -> Point {
        Point::new(
            self.origin.x + self.width - 1,
            self.origin.y + self.height - 1,
        )
    }

    /// Check if a pixel is covered by the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let far = self.far_corner();
        point.x >= self.origin.x && point.x <= far.x && point.y >= self.origin.y && point.y <= far.y
    }

    /// Number of covered pixels (zero for invalid rectangles).
    #[must_use]
    pub fn area(&self) -> u64 {
        if self.is_valid() {
            u64::from(self.width.unsigned_abs()) * u64::from(self.height.unsigned_abs())
        } else {
            0
        }
    }
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels. Negative radii are drawn as their magnitude.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A triangle given by three vertices in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// Vertices in caller order.
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Vertices in ascending row order (`v0.y <= v1.y <= v2.y`).
    ///
    /// Equal rows keep caller order (the swaps are strict, so the sort is
    /// stable).
    #[must_use]
    pub fn sorted_by_row(&self) -> [Point; 3] {
        let [mut v0, mut v1, mut v2] = self.vertices;
        if v0.y > v1.y {
            std::mem::swap(&mut v0, &mut v1);
        }
        if v1.y > v2.y {
            std::mem::swap(&mut v1, &mut v2);
        }
        if v0.y > v1.y {
            std::mem::swap(&mut v0, &mut v1);
        }
        [v0, v1, v2]
    }

    /// Whether all three vertices lie on one row.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        let [a, b, c] = self.vertices;
        a.y == b.y && b.y == c.y
    }
}
