//! Property tests for the rasterizers.
//!
//! Each property is checked against randomly generated geometry with
//! proptest. Pixel sets are captured with a `PixelRecorder`, so overdraw
//! and out-of-bounds coordinates are visible.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use tinyraster::prelude::*;

fn point(range: i32) -> impl Strategy<Value = Point> {
    (-range..=range, -range..=range).prop_map(|(x, y)| Point::new(x, y))
}

fn render(draw: impl FnOnce(&mut PixelRecorder<Rgba>)) -> HashSet<Point> {
    let mut rec = PixelRecorder::new(320, 240);
    draw(&mut rec);
    rec.pixel_set()
}

fn permutations(a: Point, b: Point, c: Point) -> [[Point; 3]; 6] {
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ]
}

fn outline(a: Point, b: Point, c: Point) -> HashSet<Point> {
    render(|s| draw_triangle(s, a, b, c, Rgba::RED))
}

fn filled(a: Point, b: Point, c: Point) -> HashSet<Point> {
    render(|s| draw_filled_triangle(s, a, b, c, Rgba::RED))
}

/// Bresenham as usually written: make the longer axis the major one, swap
/// so it increases, start the error at half the major delta and step the
/// minor axis whenever the error goes negative.
fn reference_line(a: Point, b: Point) -> HashSet<Point> {
    let (mut x0, mut y0, mut x1, mut y1) = (a.x, a.y, b.x, b.y);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y0 < y1 { 1 } else { -1 };
    let mut error = dx / 2;
    let mut y = y0;
    let mut points = HashSet::new();
    for x in x0..=x1 {
        points.insert(if steep { Point::new(y, x) } else { Point::new(x, y) });
        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }
    points
}

/// Triangles whose upper edges are both shallow and lean opposite ways,
/// so `v0 -> v1` still has points on row `v1.y` when the lower half starts.
fn opposite_shallow_triangle() -> impl Strategy<Value = [Point; 3]> {
    (point(40), 11i32..60, 1i32..=10, 11i32..60, 0i32..=10, any::<bool>()).prop_map(
        |(top, run_left, drop_left, run_right, drop_right, mirror)| {
            let sign = if mirror { -1 } else { 1 };
            let v1 = Point::new(top.x - sign * run_left, top.y + drop_left);
            let v2 = Point::new(top.x + sign * run_right, v1.y + drop_right);
            [top, v1, v2]
        },
    )
}

#[test]
fn line_matches_reference_bresenham_grid() {
    for origin in [Point::new(0, 0), Point::new(0, 1), Point::new(-7, 4)] {
        for x in -12..=12 {
            for y in -12..=12 {
                let end = Point::new(origin.x + x, origin.y + y);
                let drawn = render(|s| draw_line(s, origin, end, Rgba::BLACK));
                assert_eq!(drawn, reference_line(origin, end), "{origin:?} -> {end:?}");
            }
        }
    }
}

#[test]
fn opposite_shallow_edges_fill_covers_outline() {
    let cases = [
        (Point::new(0, 0), Point::new(-20, 3), Point::new(30, 5)),
        (Point::new(0, 0), Point::new(20, 3), Point::new(-30, 5)),
        (Point::new(5, -4), Point::new(-25, -1), Point::new(33, 2)),
    ];
    for (a, b, c) in cases {
        let fill = filled(a, b, c);
        let edge = outline(a, b, c);
        let missing: Vec<&Point> = edge.difference(&fill).collect();
        assert!(missing.is_empty(), "{a:?} {b:?} {c:?}: {missing:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A line and its reverse write the same pixels.
    #[test]
    fn prop_line_symmetry(a in point(400), b in point(400)) {
        let forward = render(|s| draw_line(s, a, b, Rgba::BLACK));
        let backward = render(|s| draw_line(s, b, a, Rgba::BLACK));
        prop_assert_eq!(forward, backward);
    }

    /// Every line starts and ends on its endpoints and writes one pixel
    /// per unit of its longer extent.
    #[test]
    fn prop_line_pixel_count(a in point(400), b in point(400)) {
        let mut rec = PixelRecorder::new(320, 240);
        draw_line(&mut rec, a, b, Rgba::BLACK);

        let extent = (a.x - b.x).abs().max((a.y - b.y).abs()) as usize;
        prop_assert_eq!(rec.write_count(), extent + 1);
        prop_assert_eq!(rec.pixel_set().len(), extent + 1);
        prop_assert!(rec.pixel_set().contains(&a));
        prop_assert!(rec.pixel_set().contains(&b));
    }

    /// Axis-aligned fast paths write what the edge walker would.
    #[test]
    fn prop_fast_path_matches_walker(a in point(300), len in -300i32..300, vertical in any::<bool>()) {
        let b = if vertical {
            Point::new(a.x, a.y + len)
        } else {
            Point::new(a.x + len, a.y)
        };
        let fast = render(|s| draw_line(s, a, b, Rgba::BLACK));
        let walked: HashSet<Point> = EdgeWalker::new(a, b).collect();
        prop_assert_eq!(fast, walked);
    }

    /// Lines write the pixels of the textbook Bresenham walk.
    #[test]
    fn prop_line_matches_reference_bresenham(a in point(300), b in point(300)) {
        let drawn = render(|s| draw_line(s, a, b, Rgba::BLACK));
        prop_assert_eq!(drawn, reference_line(a, b));
    }

    /// Line walks move one unit along the increasing major axis.
    #[test]
    fn prop_line_walk_major_increases(a in point(300), b in point(300)) {
        let steep = (b.y - a.y).abs() > (b.x - a.x).abs();
        let points: Vec<Point> = EdgeWalker::new(a, b).collect();
        for w in points.windows(2) {
            let major = if steep { w[1].y - w[0].y } else { w[1].x - w[0].x };
            prop_assert_eq!(major, 1);
        }
    }

    /// Row-ordered walks never decrease the row and visit the line's pixels.
    #[test]
    fn prop_row_walk_is_row_monotonic(a in point(300), b in point(300)) {
        let points: Vec<Point> = EdgeWalker::by_rows(a, b).collect();
        for w in points.windows(2) {
            prop_assert!(w[1].y >= w[0].y);
        }
        let visited: HashSet<Point> = points.iter().copied().collect();
        prop_assert_eq!(visited.len(), points.len());
        prop_assert_eq!(visited, EdgeWalker::new(a, b).collect::<HashSet<Point>>());
    }

    /// Vertex order never changes the outline.
    #[test]
    fn prop_triangle_permutation_invariance(a in point(80), b in point(80), c in point(80)) {
        let expected = outline(a, b, c);
        for [p, q, r] in permutations(a, b, c) {
            prop_assert_eq!(&outline(p, q, r), &expected);
        }
    }

    /// Vertex order never changes the fill.
    #[test]
    fn prop_filled_triangle_permutation_invariance(a in point(80), b in point(80), c in point(80)) {
        let expected = filled(a, b, c);
        for [p, q, r] in permutations(a, b, c) {
            prop_assert_eq!(&filled(p, q, r), &expected);
        }
    }

    /// The fill covers the outline.
    #[test]
    fn prop_filled_triangle_contains_outline(a in point(80), b in point(80), c in point(80)) {
        let fill = filled(a, b, c);
        let edges = outline(a, b, c);
        let missing: Vec<&Point> = edges.difference(&fill).collect();
        prop_assert!(missing.is_empty(), "outline pixels missing from fill: {:?}", missing);
    }

    /// Opposite-leaning shallow upper edges stay inside the fill.
    #[test]
    fn prop_opposite_shallow_edges_fill_covers_outline([a, b, c] in opposite_shallow_triangle()) {
        let fill = filled(a, b, c);
        let edges = outline(a, b, c);
        let missing: Vec<&Point> = edges.difference(&fill).collect();
        prop_assert!(missing.is_empty(), "outline pixels missing from fill: {:?}", missing);
    }

    /// The fill writes each covered pixel exactly once.
    #[test]
    fn prop_filled_triangle_no_overdraw(a in point(80), b in point(80), c in point(80)) {
        let mut rec = PixelRecorder::new(320, 240);
        draw_filled_triangle(&mut rec, a, b, c, Rgba::RED);
        prop_assert_eq!(rec.write_count(), rec.pixel_set().len());
    }

    /// Growing a filled circle by one never uncovers a pixel.
    #[test]
    fn prop_filled_circle_monotonic(center in point(100), r in 0i32..200) {
        let small = render(|s| draw_filled_circle(s, center, r, Rgba::BLUE));
        let large = render(|s| draw_filled_circle(s, center, r + 1, Rgba::BLUE));
        prop_assert!(small.is_subset(&large));
    }

    /// Rectangles with a non-positive side are rejected without writes.
    #[test]
    fn prop_rect_validation(origin in point(100), w in -20i32..=0, h in -20i32..20) {
        let mut rec = PixelRecorder::new(320, 240);
        let stroked = draw_rect(&mut rec, origin, w, h, Rgba::RED);
        let fill = draw_filled_rect(&mut rec, origin, h, w, Rgba::RED);
        prop_assert!(matches!(stroked, Err(Error::InvalidDimension { .. })), "outline accepted {w}x{h}");
        prop_assert!(matches!(fill, Err(Error::InvalidDimension { .. })), "fill accepted {h}x{w}");
        prop_assert!(rec.is_empty());
    }

    /// A filled rectangle covers exactly width x height pixels and its
    /// outline is a subset.
    #[test]
    fn prop_filled_rect_area(origin in point(100), w in 1i32..40, h in 1i32..40) {
        let fill = render(|s| draw_filled_rect(s, origin, w, h, Rgba::RED).unwrap());
        let edge = render(|s| draw_rect(s, origin, w, h, Rgba::RED).unwrap());
        let rect = Rect { origin, width: w, height: h };

        prop_assert_eq!(fill.len() as u64, rect.area());
        prop_assert!(fill.iter().all(|p| rect.contains(*p)));
        prop_assert!(edge.is_subset(&fill));
    }
}
