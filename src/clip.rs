// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection of a shape with a rectangle.
//!
//! Clipping runs in two passes. [`segment_shape`] first rewrites the
//! outline so that every crossing with a rectangle edge becomes a vertex:
//! lines get the crossing points inserted, curves are cut by the
//! [segmenter](crate::segment). [`intersection`] then clamps every vertex
//! into the rectangle. Clamping first would lose the crossing points.
//!
//! The result is exact for convex outlines. Concave outlines clip to a
//! region that may include slivers along the rectangle's edges.

use arrayvec::ArrayVec;
use log::debug;
use smallvec::SmallVec;

use crate::path::to_f32;
use crate::segment::segment;
use crate::{
    CubicBez, Error, IntRect, ParamCurve, ParamCurveExtrema, Path, PathEl, PathSeg, Point,
    QuadBez, Rect, Shape,
};

/// Clip results narrower or shorter than this are discarded as empty.
pub const MIN_CLIP_EXTENT: f64 = 1.0;

/// The outcome of [`Path::intersection`].
#[derive(Clone, Debug, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "a clip either leaves a path or not")]
pub enum ClipResult {
    /// The clipped outline.
    Path(Path),
    /// Nothing was left; a zero-size rectangle at the clip origin.
    Empty(IntRect),
}

impl ClipResult {
    /// Whether nothing was left.
    pub fn is_empty(&self) -> bool {
        matches!(self, ClipResult::Empty(_))
    }

    /// The clipped outline, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ClipResult::Path(path) => Some(path),
            ClipResult::Empty(_) => None,
        }
    }
}

/// Rewrite the outline of `shape` so that its crossings with the edge lines
/// of `rect` are vertices.
///
/// Lines, closing edges included, get the crossing points inserted in
/// order along the line. Curves are replaced by their fragments from
/// [`segment`]. The result has the shape's winding rule.
///
/// # Panics
///
/// Panics if the outline of `shape` does not start with a move-to.
pub fn segment_shape<S: Shape + ?Sized>(shape: &S, rect: &Rect) -> Path {
    let mut out = Path::with_winding_rule(shape.winding_rule());
    let mut prev = Point::ZERO;
    let mut mark = Point::ZERO;
    for el in shape.path_elements() {
        match el {
            PathEl::MoveTo(p) => {
                out.move_to(p);
                prev = p;
                mark = p;
            }
            PathEl::LineTo(p) => {
                for q in line_crossings(prev, p, rect) {
                    out.line_to(q);
                }
                out.line_to(p);
                prev = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let quad = PathSeg::Quad(QuadBez::new(prev, p1, p2));
                for piece in segment(&quad, rect) {
                    out.push(piece.as_path_el());
                }
                prev = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let cubic = PathSeg::Cubic(CubicBez::new(prev, p1, p2, p3));
                for piece in segment(&cubic, rect) {
                    out.push(piece.as_path_el());
                }
                prev = p3;
            }
            PathEl::ClosePath => {
                for q in line_crossings(prev, mark, rect) {
                    out.line_to(q);
                }
                out.close_path();
                prev = mark;
            }
        }
    }
    out
}

/// Points where the line from `p0` to `p1` strictly crosses the edge
/// lines of `rect`, ordered from `p0` to `p1`.
fn line_crossings(p0: Point, p1: Point, rect: &Rect) -> SmallVec<[Point; 4]> {
    let (rx0, ry0, rx1, ry1) = (rect.x0(), rect.y0(), rect.x1(), rect.y1());
    let (min_x, max_x) = (p0.x.min(p1.x), p0.x.max(p1.x));
    let (min_y, max_y) = (p0.y.min(p1.y), p0.y.max(p1.y));
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let mut pts = SmallVec::new();
    if dx == 0.0 {
        for y in [ry0, ry1] {
            if min_y < y && y < max_y {
                pts.push(Point::new(p0.x, y));
            }
        }
    } else if dy == 0.0 {
        for x in [rx0, rx1] {
            if min_x < x && x < max_x {
                pts.push(Point::new(x, p0.y));
            }
        }
    } else {
        let m = dy / dx;
        let mut xs: SmallVec<[f64; 4]> = SmallVec::new();
        for x in [rx0, rx1] {
            if min_x < x && x < max_x {
                xs.push(x);
            }
        }
        for y in [ry0, ry1] {
            if min_y < y && y < max_y {
                xs.push(p0.x + (y - p0.y) / m);
            }
        }
        for x in xs {
            pts.push(Point::new(x, p0.y + (x - p0.x) * m));
        }
    }
    let dir = p1 - p0;
    pts.sort_by(|a: &Point, b: &Point| (*a - p0).dot(dir).total_cmp(&(*b - p0).dot(dir)));
    pts
}

/// The intersection of `shape` with `rect`.
///
/// Returns `None` when the clipped outline is no more than
/// [`MIN_CLIP_EXTENT`] wide or tall, which includes every shape that
/// misses the rectangle.
///
/// Every vertex is clamped into the rectangle and repeated vertices are
/// dropped. Curve fragments inside the rectangle stay curves with their
/// end point clamped. Fragments outside are replaced by lines through the
/// clamped points where they cross the edge lines, so an outline wrapping
/// around a corner keeps the corner.
///
/// # Panics
///
/// Panics if the outline of `shape` does not start with a move-to.
///
/// # Examples
///
/// ```
/// use cutline::{IntRect, Path};
/// use cutline::clip::intersection;
///
/// let square = Path::from_shape(&IntRect::new(0, 0, 10, 10));
/// let clipped = intersection(&square, &IntRect::new(5, 5, 10, 10)).unwrap();
/// assert_eq!(clipped.bounds(), IntRect::new(5, 5, 5, 5));
/// assert!(intersection(&square, &IntRect::new(20, 20, 5, 5)).is_none());
/// ```
pub fn intersection<S: Shape + ?Sized>(shape: &S, rect: &IntRect) -> Option<Path> {
    let r = Rect::from(*rect);
    let segmented = segment_shape(shape, &r);
    let mut out = Path::with_winding_rule(segmented.winding_rule());
    let mut extent: Option<Rect> = None;
    let mut grow = |p: Point| {
        extent = Some(extent.map_or(Rect::from_points(p, p), |e| e.union_pt(p)));
    };
    let mut prev = Point::ZERO;
    let mut cur = Point::ZERO;
    let mut mark = Point::ZERO;
    for el in segmented.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let c = p.clamp_to(&r);
                grow(c);
                out.move_to(c);
                prev = c;
                cur = p;
                mark = p;
            }
            PathEl::LineTo(p) => {
                let c = p.clamp_to(&r);
                grow(c);
                if to_f32(c) != to_f32(prev) {
                    out.line_to(c);
                }
                prev = c;
                cur = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let quad = PathSeg::Quad(QuadBez::new(cur, p1, p2));
                prev = clip_curve(&quad, &r, prev, &mut out, &mut grow);
                cur = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let cubic = PathSeg::Cubic(CubicBez::new(cur, p1, p2, p3));
                prev = clip_curve(&cubic, &r, prev, &mut out, &mut grow);
                cur = p3;
            }
            PathEl::ClosePath => {
                out.close_path();
                prev = mark.clamp_to(&r);
                cur = mark;
            }
        }
    }
    let extent = extent?;
    if extent.width <= MIN_CLIP_EXTENT || extent.height <= MIN_CLIP_EXTENT {
        debug!("discarding clip result with extent {extent}");
        return None;
    }
    Some(out)
}

/// Emit one curve fragment into `out`, returning the new clamped current
/// point.
fn clip_curve(
    seg: &PathSeg,
    rect: &Rect,
    prev: Point,
    out: &mut Path,
    grow: &mut impl FnMut(Point),
) -> Point {
    let end = seg.end().clamp_to(rect);
    if rect.contains(seg.eval(0.5)) {
        let bbox = seg.bounding_rect().intersection(rect);
        grow(bbox.origin());
        grow(Point::new(bbox.x1(), bbox.y1()));
        let el = match *seg {
            PathSeg::Line(_) => PathEl::LineTo(end),
            PathSeg::Quad(q) => PathEl::QuadTo(q.p1, end),
            PathSeg::Cubic(c) => PathEl::CurveTo(c.p1, c.p2, end),
        };
        out.push(el);
        return end;
    }
    let mut ts: ArrayVec<f64, 12> = ArrayVec::new();
    let (lo, hi) = (f64::NEG_INFINITY, f64::INFINITY);
    for edge in [
        seg.t_values_for_x(rect.x0(), lo, hi),
        seg.t_values_for_x(rect.x1(), lo, hi),
        seg.t_values_for_y(rect.y0(), lo, hi),
        seg.t_values_for_y(rect.y1(), lo, hi),
    ] {
        ts.extend(edge);
    }
    ts.sort_by(f64::total_cmp);
    let mut last = prev;
    for c in ts.iter().map(|t| seg.eval(*t).clamp_to(rect)).chain([end]) {
        grow(c);
        if to_f32(c) != to_f32(last) {
            out.line_to(c);
        }
        last = c;
    }
    last
}

impl Path {
    /// Replace this path with its intersection with `rect`.
    ///
    /// Returns `false`, leaving the path empty, when nothing is left. See
    /// [`intersection`] for how the clip is computed.
    pub fn intersect(&mut self, rect: &IntRect) -> bool {
        match intersection(self, rect) {
            Some(clipped) => {
                *self = clipped;
                true
            }
            None => {
                self.reset();
                false
            }
        }
    }

    /// Replace this path with its intersection with `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShape`] unless `shape` is an integer
    /// rectangle.
    pub fn intersect_shape<S: Shape + ?Sized>(&mut self, shape: &S) -> Result<bool, Error> {
        let rect = shape.as_int_rect().ok_or(Error::UnsupportedShape)?;
        Ok(self.intersect(&rect))
    }

    /// The intersection of this path with `rect`, leaving the path as is.
    pub fn intersection(&self, rect: &IntRect) -> ClipResult {
        match intersection(self, rect) {
            Some(clipped) => ClipResult::Path(clipped),
            None => ClipResult::Empty(IntRect::new(rect.x, rect.y, 0, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathVerb, WindingRule};

    fn square() -> Path {
        Path::from_shape(&IntRect::new(0, 0, 10, 10))
    }

    #[test]
    fn segment_shape_inserts_crossings() {
        let segmented = segment_shape(&square(), &Rect::new(5.0, 5.0, 10.0, 10.0));
        let expected = [
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(5.0, 0.0)),
            PathEl::LineTo(Point::new(10.0, 0.0)),
            PathEl::LineTo(Point::new(10.0, 5.0)),
            PathEl::LineTo(Point::new(10.0, 10.0)),
            PathEl::LineTo(Point::new(5.0, 10.0)),
            PathEl::LineTo(Point::new(0.0, 10.0)),
            PathEl::LineTo(Point::new(0.0, 5.0)),
            PathEl::ClosePath,
        ];
        assert!(segmented.iter().eq(expected));
    }

    #[test]
    fn sloped_crossings_follow_line_direction() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let pts = line_crossings(Point::new(15.0, 12.0), Point::new(-5.0, -2.0), &rect);
        assert_eq!(pts.len(), 4);
        assert!(pts.windows(2).all(|w| w[0].x > w[1].x));
        assert!(pts[0].approx_eq(Point::new(15.0 - 2.0 / 0.7, 10.0), 1e-12));
        assert!(pts[1].approx_eq(Point::new(10.0, 8.5), 1e-12));
        assert!(pts[2].approx_eq(Point::new(0.0, 1.5), 1e-12));
        assert!(pts[3].approx_eq(Point::new(15.0 - 12.0 / 0.7, 0.0), 1e-12));
    }

    #[test]
    fn enclosing_rect_is_identity() {
        let path = square();
        let clipped = intersection(&path, &IntRect::new(-5, -5, 30, 30));
        assert_eq!(clipped, Some(path));
    }

    #[test]
    fn disjoint_rect_is_empty() {
        let mut path = square();
        let rect = IntRect::new(20, 20, 5, 5);
        assert_eq!(intersection(&path, &rect), None);
        assert_eq!(
            path.intersection(&rect),
            ClipResult::Empty(IntRect::new(20, 20, 0, 0))
        );
        assert!(!path.intersect(&rect));
        assert!(path.is_empty());
    }

    #[test]
    fn thin_overlap_is_empty() {
        let path = square();
        assert_eq!(intersection(&path, &IntRect::new(9, 0, 5, 10)), None);
        assert!(intersection(&path, &IntRect::new(8, 0, 5, 10)).is_some());
    }

    #[test]
    fn overlapping_squares() {
        let mut path = square();
        assert!(path.intersect(&IntRect::new(5, 5, 10, 10)));
        assert_eq!(path.bounds(), IntRect::new(5, 5, 5, 5));
        assert!(path.is_rectangle());
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn triangle_cut_by_rect() {
        let mut tri = Path::with_winding_rule(WindingRule::EvenOdd);
        tri.move_to((0.0, 0.0));
        tri.line_to((20.0, 0.0));
        tri.line_to((10.0, 20.0));
        tri.close_path();
        let clipped = match tri.intersection(&IntRect::new(0, 0, 20, 10)) {
            ClipResult::Path(p) => p,
            ClipResult::Empty(r) => panic!("unexpected empty clip at {r}"),
        };
        assert_eq!(clipped.winding_rule(), WindingRule::EvenOdd);
        assert_eq!(clipped.bounds(), IntRect::new(0, 0, 20, 10));
        assert!(clipped.is_polygon());
        assert!(clipped.contains(Point::new(10.0, 5.0)));
        assert!(!clipped.contains(Point::new(1.0, 9.0)));
        assert!(clipped.contains(Point::new(14.0, 9.0)));
    }

    #[test]
    fn quad_arch_keeps_inside_curves() {
        let mut arch = Path::new();
        arch.move_to((0.0, 0.0));
        arch.quad_to((5.0, 10.0), (10.0, 0.0));
        arch.close_path();
        let clipped = intersection(&arch, &IntRect::new(0, 0, 10, 4)).unwrap();
        assert_eq!(
            clipped.verbs(),
            &[
                PathVerb::Move,
                PathVerb::Quad,
                PathVerb::Line,
                PathVerb::Quad,
                PathVerb::Close
            ]
        );
        assert_eq!(clipped.bounds(), IntRect::new(0, 0, 10, 4));
        assert!(clipped.contains(Point::new(5.0, 3.5)));
        assert!(!clipped.contains(Point::new(0.5, 3.0)));
    }

    #[test]
    fn s_curve_through_narrow_stripe() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.curve_to((3.0, 10.0), (7.0, -10.0), (10.0, 0.0));
        path.close_path();
        let clipped = intersection(&path, &IntRect::new(0, -2, 10, 4)).unwrap();
        assert_eq!(
            clipped.verbs(),
            &[
                PathVerb::Move,
                PathVerb::Cubic,
                PathVerb::Line,
                PathVerb::Cubic,
                PathVerb::Line,
                PathVerb::Cubic,
                PathVerb::Close
            ]
        );
        let y = |i: usize| clipped.points()[i];
        // The two lines run along the top and bottom edges.
        assert_eq!(y(7), 2.0);
        assert_eq!(y(9), 2.0);
        assert_eq!(y(15), -2.0);
        assert_eq!(y(17), -2.0);
    }

    #[test]
    fn outside_curve_keeps_the_corner() {
        let mut path = Path::new();
        path.move_to((0.0, 5.0));
        path.curve_to((0.0, -10.0), (5.0, -10.0), (10.0, -10.0));
        path.line_to((10.0, 10.0));
        path.line_to((0.0, 10.0));
        path.close_path();
        let clipped = intersection(&path, &IntRect::new(0, 0, 10, 10)).unwrap();
        assert_eq!(clipped.bounds(), IntRect::new(0, 0, 10, 10));
        assert!(clipped.contains(Point::new(1.0, 1.0)));
        assert!(clipped.contains(Point::new(9.0, 1.0)));
    }

    #[test]
    fn intersect_shape_needs_int_rect() {
        let mut path = square();
        assert_eq!(path.intersect_shape(&square()), Err(Error::UnsupportedShape));
        let fractional = Rect::new(0.5, 0.0, 4.0, 4.0);
        assert_eq!(path.intersect_shape(&fractional), Err(Error::UnsupportedShape));
        assert_eq!(path.intersect_shape(&Rect::new(2.0, 2.0, 4.0, 4.0)), Ok(true));
        assert_eq!(path.bounds(), IntRect::new(2, 2, 4, 4));
        assert_eq!(path.intersect_shape(&IntRect::new(50, 50, 4, 4)), Ok(false));
    }
}
