// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments of a path as standalone curve values.

use alloc::vec::Vec;
use core::ops::Range;

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_quadratic, DELTA, ROOT_DELTA};
use crate::{
    CubicBez, Error, Line, ParamCurve, ParamCurveExtrema, Path, PathEl, Point, QuadBez, Shape,
    Vec2, MAX_EXTREMA,
};

/// A segment of a path: a line, quadratic or cubic Bézier.
///
/// Segments are immutable values. Splitting a segment, as the
/// [segmenter](crate::segment) does, produces new segments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "segments of degree 1 to 3 are closed")]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

impl PathSeg {
    /// Build a segment from its control points, start point first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDegree`] unless there are 2, 3 or 4 points.
    pub fn from_points(points: &[Point]) -> Result<PathSeg, Error> {
        match *points {
            [p0, p1] => Ok(PathSeg::Line(Line::new(p0, p1))),
            [p0, p1, p2] => Ok(PathSeg::Quad(QuadBez::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(PathSeg::Cubic(CubicBez::new(p0, p1, p2, p3))),
            _ => Err(Error::UnsupportedDegree(points.len())),
        }
    }

    /// The polynomial degree: 1, 2 or 3.
    #[inline]
    pub fn degree(&self) -> usize {
        match self {
            PathSeg::Line(_) => 1,
            PathSeg::Quad(_) => 2,
            PathSeg::Cubic(_) => 3,
        }
    }

    /// The control points, start point first.
    pub fn control_points(&self) -> ArrayVec<Point, 4> {
        let mut pts = ArrayVec::new();
        match *self {
            PathSeg::Line(Line { p0, p1 }) => pts.extend([p0, p1]),
            PathSeg::Quad(QuadBez { p0, p1, p2 }) => pts.extend([p0, p1, p2]),
            PathSeg::Cubic(CubicBez { p0, p1, p2, p3 }) => pts.extend([p0, p1, p2, p3]),
        }
        pts
    }

    /// The coefficients of the curve in power form, constant term first.
    ///
    /// There are `degree() + 1` of them; `eval(t)` is `Σ cᵢ tⁱ`.
    pub fn power_coeffs(&self) -> ArrayVec<Vec2, 4> {
        let mut coeffs = ArrayVec::new();
        match self {
            PathSeg::Line(line) => coeffs.extend(line.power_coeffs()),
            PathSeg::Quad(quad) => coeffs.extend(quad.power_coeffs()),
            PathSeg::Cubic(cubic) => coeffs.extend(cubic.power_coeffs()),
        }
        coeffs
    }

    /// The part of the segment over `[0, t]`.
    #[must_use]
    pub fn split_head(&self, t: f64) -> PathSeg {
        match self {
            PathSeg::Line(line) => PathSeg::Line(Line::new(line.p0, line.eval(t))),
            PathSeg::Quad(quad) => PathSeg::Quad(quad.split_head(t)),
            PathSeg::Cubic(cubic) => PathSeg::Cubic(cubic.split_head(t)),
        }
    }

    /// The part of the segment over `[t, 1]`.
    ///
    /// Computed as the head of the reversed segment, reversed again, so
    /// the end point is exactly the end point of `self`.
    #[must_use]
    pub fn split_tail(&self, t: f64) -> PathSeg {
        self.reverse().split_head(1.0 - t).reverse()
    }

    /// Whether both segments have the same degree and every pair of
    /// control points agrees within `epsilon` in each coordinate.
    pub fn approx_eq(&self, other: &PathSeg, epsilon: f64) -> bool {
        let a = self.control_points();
        let b = other.control_points();
        a.len() == b.len()
            && a.iter()
                .zip(b.iter())
                .all(|(p, q)| p.approx_eq(*q, epsilon))
    }

    /// Parameters in `[0, 1]` where the segment crosses the vertical line
    /// at `x`, keeping only those whose `y` lies in `[y_min, y_max]`.
    ///
    /// Roots within [`DELTA`] outside the parameter range are clamped onto
    /// it, and crossings up to [`DELTA`] beyond `[y_min, y_max]` are kept.
    /// Both slacks are looser than strict bounds; the
    /// [segmenter](crate::segment) ignores parameters near either end anyway.
    /// The result is sorted and free of duplicates.
    pub fn t_values_for_x(&self, x: f64, y_min: f64, y_max: f64) -> ArrayVec<f64, 3> {
        self.t_values_for(x, y_min, y_max, |v| v.x, |p| p.y)
    }

    /// Parameters in `[0, 1]` where the segment crosses the horizontal line
    /// at `y`, keeping only those whose `x` lies in `[x_min, x_max]`.
    ///
    /// The same [`DELTA`] slacks apply as for
    /// [`t_values_for_x`](Self::t_values_for_x).
    pub fn t_values_for_y(&self, y: f64, x_min: f64, x_max: f64) -> ArrayVec<f64, 3> {
        self.t_values_for(y, x_min, x_max, |v| v.y, |p| p.x)
    }

    fn t_values_for(
        &self,
        target: f64,
        lo: f64,
        hi: f64,
        axis: impl Fn(Vec2) -> f64,
        cross_axis: impl Fn(Point) -> f64,
    ) -> ArrayVec<f64, 3> {
        let c = self.power_coeffs();
        let coeff = |i: usize| c.get(i).map_or(0.0, |v| axis(*v));
        let roots: ArrayVec<f64, 3> = match self {
            PathSeg::Cubic(_) => solve_cubic(coeff(0) - target, coeff(1), coeff(2), coeff(3)),
            _ => solve_quadratic(coeff(0) - target, coeff(1), coeff(2))
                .into_iter()
                .collect(),
        };
        let mut candidates: ArrayVec<f64, 3> = roots
            .into_iter()
            .filter(|&t| -DELTA <= t && t <= 1.0 + DELTA)
            .map(|t| t.clamp(0.0, 1.0))
            .filter(|&t| {
                let v = cross_axis(self.eval(t));
                lo - DELTA <= v && v <= hi + DELTA
            })
            .collect();
        candidates.sort_by(f64::total_cmp);
        let mut result = ArrayVec::new();
        for t in candidates {
            if result.last().map_or(true, |&last: &f64| t - last >= ROOT_DELTA) {
                result.push(t);
            }
        }
        result
    }

    /// The element that draws this segment from its start point.
    #[inline]
    pub fn as_path_el(&self) -> PathEl {
        match *self {
            PathSeg::Line(line) => PathEl::LineTo(line.p1),
            PathSeg::Quad(q) => PathEl::QuadTo(q.p1, q.p2),
            PathSeg::Cubic(c) => PathEl::CurveTo(c.p1, c.p2, c.p3),
        }
    }

    /// Draw this segment into `path`.
    ///
    /// Without `join`, a move-to the start point opens a new subpath
    /// first; with it, the segment continues from the path's current point.
    ///
    /// # Panics
    ///
    /// Panics if `join` is set and `path` is empty.
    pub fn append_to_path(&self, path: &mut Path, join: bool) {
        if !join {
            path.move_to(self.start());
        }
        path.push(self.as_path_el());
    }

    /// Collect the quadratic and cubic segments of a shape's outline.
    ///
    /// Lines are skipped. Every curve starts at the end point of the
    /// element before it, with closes re-anchoring to the subpath start.
    pub fn extract_curves(shape: &impl Shape) -> Vec<PathSeg> {
        let mut out = Vec::new();
        let mut prev = Point::ZERO;
        let mut mark = Point::ZERO;
        for el in shape.path_elements() {
            match el {
                PathEl::MoveTo(p) => {
                    prev = p;
                    mark = p;
                }
                PathEl::LineTo(p) => prev = p,
                PathEl::ClosePath => prev = mark,
                PathEl::QuadTo(p1, p2) => {
                    out.push(PathSeg::Quad(QuadBez::new(prev, p1, p2)));
                    prev = p2;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    out.push(PathSeg::Cubic(CubicBez::new(prev, p1, p2, p3)));
                    prev = p3;
                }
            }
        }
        out
    }
}

impl ParamCurve for PathSeg {
    fn eval(&self, t: f64) -> Point {
        match self {
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Quad(quad) => quad.eval(t),
            PathSeg::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn subsegment(&self, range: Range<f64>) -> PathSeg {
        match self {
            PathSeg::Line(line) => PathSeg::Line(line.subsegment(range)),
            PathSeg::Quad(quad) => PathSeg::Quad(quad.subsegment(range)),
            PathSeg::Cubic(cubic) => PathSeg::Cubic(cubic.subsegment(range)),
        }
    }

    fn reverse(&self) -> PathSeg {
        match self {
            PathSeg::Line(line) => PathSeg::Line(line.reverse()),
            PathSeg::Quad(quad) => PathSeg::Quad(quad.reverse()),
            PathSeg::Cubic(cubic) => PathSeg::Cubic(cubic.reverse()),
        }
    }

    fn start(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p0,
            PathSeg::Quad(quad) => quad.p0,
            PathSeg::Cubic(cubic) => cubic.p0,
        }
    }

    fn end(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p1,
            PathSeg::Quad(quad) => quad.p2,
            PathSeg::Cubic(cubic) => cubic.p3,
        }
    }
}

impl ParamCurveExtrema for PathSeg {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        match self {
            PathSeg::Line(line) => line.extrema(),
            PathSeg::Quad(quad) => quad.extrema(),
            PathSeg::Cubic(cubic) => cubic.extrema(),
        }
    }
}

impl From<Line> for PathSeg {
    fn from(line: Line) -> PathSeg {
        PathSeg::Line(line)
    }
}

impl From<QuadBez> for PathSeg {
    fn from(quad: QuadBez) -> PathSeg {
        PathSeg::Quad(quad)
    }
}

impl From<CubicBez> for PathSeg {
    fn from(cubic: CubicBez) -> PathSeg {
        PathSeg::Cubic(cubic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CubicBez, Error, Line, ParamCurve, ParamCurveExtrema, Path, PathEl, PathSeg, Point,
        QuadBez, Rect,
    };

    #[test]
    fn from_points_degree() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(4.0, 0.0),
        ];
        assert_eq!(PathSeg::from_points(&pts[..2]).map(|s| s.degree()), Ok(1));
        assert_eq!(PathSeg::from_points(&pts[..3]).map(|s| s.degree()), Ok(2));
        assert_eq!(PathSeg::from_points(&pts[..4]).map(|s| s.degree()), Ok(3));
        assert_eq!(
            PathSeg::from_points(&pts),
            Err(Error::UnsupportedDegree(5))
        );
        assert_eq!(
            PathSeg::from_points(&pts[..1]),
            Err(Error::UnsupportedDegree(1))
        );
    }

    #[test]
    fn t_values_filter_by_extent() {
        let c = PathSeg::Cubic(CubicBez::new(
            (0.0, 0.0),
            (3.0, 10.0),
            (7.0, -10.0),
            (10.0, 0.0),
        ));
        // y = 0 at t = 0, 0.5, 1.
        let all = c.t_values_for_y(0.0, -1.0, 11.0);
        assert_eq!(all.len(), 3);
        assert!((all[1] - 0.5).abs() < 1e-9);
        let inner = c.t_values_for_y(0.0, 1.0, 9.0);
        assert_eq!(inner.len(), 1);
        let x = c.t_values_for_x(5.0, -1.0, 1.0);
        assert_eq!(x.len(), 1);
        assert!((x[0] - 0.5).abs() < 1e-9);
        assert!(c.t_values_for_x(5.0, 1.0, 2.0).is_empty());
    }

    #[test]
    fn line_t_values() {
        let l = PathSeg::Line(Line::new((0.0, 0.0), (10.0, 20.0)));
        assert_eq!(l.t_values_for_x(2.5, 0.0, 20.0).as_slice(), &[0.25]);
        assert_eq!(l.t_values_for_y(10.0, 0.0, 10.0).as_slice(), &[0.5]);
        assert!(l.t_values_for_x(12.0, 0.0, 20.0).is_empty());
        let vertical = PathSeg::Line(Line::new((3.0, 0.0), (3.0, 5.0)));
        assert!(vertical.t_values_for_x(3.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn t_values_keep_delta_slack() {
        let l = PathSeg::Line(Line::new((0.0, 0.0), (10.0, 20.0)));
        // The crossing at y = 10 lies just past the extent.
        assert_eq!(l.t_values_for_x(5.0, 0.0, 10.0 - 5e-6).as_slice(), &[0.5]);
        assert!(l.t_values_for_x(5.0, 0.0, 10.0 - 1e-3).is_empty());
        // A root just past the end clamps to it.
        assert_eq!(l.t_values_for_x(10.00001, 0.0, 20.0).as_slice(), &[1.0]);
        assert!(l.t_values_for_x(10.001, 0.0, 20.0).is_empty());
    }

    #[test]
    fn split_round_trip() {
        let q = PathSeg::Quad(QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0)));
        let head = q.split_head(0.4);
        let tail = q.split_tail(0.4);
        assert!(head.end().approx_eq(tail.start(), 1e-12));
        assert_eq!(tail.end(), q.end());
        assert!(q.split_tail(0.0).approx_eq(&q, 1e-12));
        assert!(!head.approx_eq(&q, 0.01));
    }

    #[test]
    fn bounding_rect_by_extrema() {
        let q = PathSeg::Quad(QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0)));
        assert_eq!(q.bounding_rect(), Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn extract_and_append() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.quad_to((15.0, 5.0), (10.0, 10.0));
        path.close_path();
        path.move_to((20.0, 20.0));
        path.curve_to((25.0, 20.0), (25.0, 25.0), (20.0, 25.0));
        let curves = PathSeg::extract_curves(&path);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].start(), Point::new(10.0, 0.0));
        assert_eq!(curves[1].start(), Point::new(20.0, 20.0));

        let mut out = Path::new();
        curves[0].append_to_path(&mut out, false);
        curves[1].append_to_path(&mut out, true);
        let els: alloc::vec::Vec<PathEl> = out.iter().collect();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(10.0, 0.0)));
        assert!(matches!(els[2], PathEl::CurveTo(..)));
    }
}
