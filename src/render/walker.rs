//! Incremental integer line stepping (generalized Bresenham).
//!
//! An [`EdgeWalker`] yields the 8-connected pixels of a segment one at a
//! time. It is a small `Copy` state machine: [`EdgeWalker::step`] is pure and
//! returns the emitted point together with the successor state, so a walker
//! can be replayed by keeping a copy of any earlier state.
//!
//! # Normalization
//!
//! [`EdgeWalker::new`] picks the major axis (Y when the segment is steep,
//! X otherwise) and starts at the endpoint with the smaller major
//! coordinate, so the major coordinate always increases by one per step.
//! A segment and its reverse therefore produce exactly the same points, and
//! `draw_line(a, b)` and `draw_line(b, a)` write the same pixels.
//!
//! The scanline triangle fill needs rows that never decrease, which a
//! shallow segment rising to the right does not give. [`EdgeWalker::by_rows`]
//! walks such a segment from its upper end instead, with the rounding of
//! the error term mirrored so it emits the same points as
//! [`EdgeWalker::new`], in row order.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use std::iter::FusedIterator;

use crate::geometry::Point;

/// Stateful stepper over the integer points of a segment, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeWalker {
    /// Next point to emit.
    current: Point,
    /// Last point of the walk.
    end: Point,
    /// Whether Y is the major axis.
    steep: bool,
    /// +1 or -1 along the major axis.
    major_step: i32,
    /// +1 or -1 along the minor axis.
    minor_step: i32,
    /// |delta| along the major axis.
    major_delta: i32,
    /// |delta| along the minor axis.
    minor_delta: i32,
    /// Bresenham error accumulator.
    error: i32,
    /// Set once `end` has been emitted.
    done: bool,
}

impl EdgeWalker {
    /// Create a walker over the segment between `a` and `b`.
    ///
    /// Defined for every pair of points. Coincident points yield a single
    /// point; axis-aligned pairs yield a unit-step run.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let steep = (b.y - a.y).abs() > (b.x - a.x).abs();
        let major = |p: Point| if steep { p.y } else { p.x };

        if major(b) < major(a) {
            Self::oriented(b, a, false)
        } else {
            Self::oriented(a, b, false)
        }
    }

    /// Create a walker over the same points as [`EdgeWalker::new`], ordered
    /// so the row never decreases.
    #[must_use]
    pub fn by_rows(a: Point, b: Point) -> Self {
        let walker = Self::new(a, b);
        if walker.end.y < walker.current.y {
            Self::oriented(walker.end, walker.current, true)
        } else {
            walker
        }
    }

    /// Walker from `start` to `end`. With `mirrored` set, ties in the error
    /// term round the other way, which reproduces the points of the walk
    /// from `end` to `start`.
    fn oriented(start: Point, end: Point, mirrored: bool) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let steep = dy.abs() > dx.abs();
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

        let major_delta = major.abs();
        // mirrored walks always have major_delta >= 1
        let error = if mirrored {
            (major_delta - 1) / 2
        } else {
            major_delta / 2
        };

        Self {
            current: start,
            end,
            steep,
            major_step: if major < 0 { -1 } else { 1 },
            minor_step: if minor < 0 { -1 } else { 1 },
            major_delta,
            minor_delta: minor.abs(),
            error,
            done: false,
        }
    }

    /// Whether every point has been emitted.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// The next point, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<Point> {
        (!self.done).then_some(self.current)
    }

    /// One transition of the state machine.
    ///
    /// Returns the emitted point and the state that follows it, or `None`
    /// once the walk is complete. `self` is left untouched.
    #[must_use]
    pub fn step(&self) -> Option<(Point, Self)> {
        if self.done {
            return None;
        }

        let point = self.current;
        let mut next = *self;

        if self.major_coord(point) == self.major_coord(self.end) {
            debug_assert_eq!(point, self.end, "walker reached the end row off-line");
            next.done = true;
            return Some((point, next));
        }

        let mut minor_offset = 0;
        next.error -= self.minor_delta;
        if next.error < 0 {
            minor_offset = self.minor_step;
            next.error += self.major_delta;
        }
        next.current = self.offset(point, self.major_step, minor_offset);

        Some((point, next))
    }

    /// Consume every point lying on `row` and return the columns they cover.
    ///
    /// Stops in front of the first point on a later row, leaving it for the
    /// next call. Returns `None` when the walker has no point on `row`.
    pub fn consume_row(&mut self, row: i32) -> Option<Span> {
        let mut span: Option<Span> = None;

        while let Some(point) = self.peek().filter(|p| p.y == row) {
            span = Some(match span {
                Some(s) => s.include(point.x),
                None => Span::single(point.x),
            });
            self.advance();
        }

        span
    }

    /// Move past the current point.
    fn advance(&mut self) {
        if let Some((_, next)) = self.step() {
            *self = next;
        }
    }

    /// Points left to emit, including the current one.
    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            let gap = self.major_coord(self.end) - self.major_coord(self.current);
            gap.unsigned_abs() as usize + 1
        }
    }

    #[inline]
    fn major_coord(&self, p: Point) -> i32 {
        if self.steep {
            p.y
        } else {
            p.x
        }
    }

    #[inline]
    fn offset(&self, p: Point, major: i32, minor: i32) -> Point {
        if self.steep {
            Point::new(p.x + minor, p.y + major)
        } else {
            Point::new(p.x + major, p.y + minor)
        }
    }
}

impl Iterator for EdgeWalker {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let (point, next) = self.step()?;
        *self = next;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for EdgeWalker {}

impl FusedIterator for EdgeWalker {}

/// Inclusive column range on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Leftmost column.
    pub left: i32,
    /// Rightmost column.
    pub right: i32,
}

impl Span {
    /// A span covering one column.
    #[must_use]
    pub const fn single(x: i32) -> Self {
        Self { left: x, right: x }
    }

    /// Widen the span to cover column `x`.
    #[must_use]
    pub fn include(self, x: i32) -> Self {
        Self {
            left: self.left.min(x),
            right: self.right.max(x),
        }
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
        }
    }
}
