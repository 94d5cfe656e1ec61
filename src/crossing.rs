// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossing numbers of segments and paths.
//!
//! Point containment casts a ray from the query point toward positive `y`
//! and counts the signed crossings of the path with that ray. A segment
//! running toward positive `x` contributes `+1`, one running toward
//! negative `x` contributes `-1`.
//!
//! Rectangle queries generalize the ray to the stripe below the rectangle's
//! top edge and between its left and right edges. A segment that enters the
//! rectangle itself is reported as [`StripeCrossing::Crossing`], since no
//! parity can be assigned to it.
//!
//! Endpoints are counted with half-open rules so that a ray passing
//! exactly through a vertex shared by two segments is counted once.

use arrayvec::ArrayVec;

use crate::common::{is_zero, solve_cubic, solve_quadratic, DELTA};
use crate::rect::to_i32;
use crate::{PathEl, Point, Rect, Shape, Vec2};

/// The result of crossing a segment or path with a rectangle stripe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a stripe is either crossed a number of times or overlapped"
)]
pub enum StripeCrossing {
    /// The signed number of times the stripe below the rectangle is crossed.
    Count(i32),
    /// The geometry enters the rectangle.
    Crossing,
}

impl StripeCrossing {
    /// Whether the geometry definitely overlaps the rectangle.
    #[inline]
    pub fn is_crossing(self) -> bool {
        matches!(self, StripeCrossing::Crossing)
    }

    /// The crossing count, if there is one.
    #[inline]
    pub fn count(self) -> Option<i32> {
        match self {
            StripeCrossing::Count(n) => Some(n),
            StripeCrossing::Crossing => None,
        }
    }
}

/// Whether a crossing count is inside under the non-zero rule.
#[inline]
pub fn is_inside_non_zero(cross: i32) -> bool {
    cross != 0
}

/// Whether a crossing count is inside under the even-odd rule.
#[inline]
pub fn is_inside_even_odd(cross: i32) -> bool {
    cross & 1 != 0
}

/// The contribution of a curve lying entirely below the query point.
#[inline]
fn cross_down(x0: f64, x1: f64, x: f64) -> i32 {
    if x0 < x1 {
        i32::from(x0 < x && x < x1)
    } else if x1 < x && x < x0 {
        -1
    } else {
        0
    }
}

/// How many times the ray from `pt` crosses the line from `p0` to `p1`.
pub fn cross_line(p0: Point, p1: Point, pt: Point) -> i32 {
    let Point { x: x0, y: y0 } = p0;
    let Point { x: x1, y: y1 } = p1;
    let Point { x, y } = pt;

    // Left, right, up, or vertical.
    if (x < x0 && x < x1) || (x > x0 && x > x1) || (y > y0 && y > y1) || x0 == x1 {
        return 0;
    }

    if !(y < y0 && y < y1) && (y1 - y0) * (x - x0) / (x1 - x0) <= y - y0 {
        // The line passes at or above the point.
        return 0;
    }

    if x == x0 {
        return if x0 < x1 { 0 } else { -1 };
    }
    if x == x1 {
        return if x0 < x1 { 1 } else { 0 };
    }
    if x0 < x1 {
        1
    } else {
        -1
    }
}

/// How many times the ray from `pt` crosses a quadratic Bézier.
pub fn cross_quad(p0: Point, p1: Point, p2: Point, pt: Point) -> i32 {
    cross_curve(&[p0, p1, p2], &QuadFrame::new(p0, p1, p2), pt)
}

/// How many times the ray from `pt` crosses a cubic Bézier.
pub fn cross_cubic(p0: Point, p1: Point, p2: Point, p3: Point, pt: Point) -> i32 {
    cross_curve(&[p0, p1, p2, p3], &CubicFrame::new(p0, p1, p2, p3), pt)
}

fn cross_curve(pts: &[Point], frame: &impl LocalCurve, pt: Point) -> i32 {
    let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
        return 0;
    };
    if pts.iter().all(|p| pt.x < p.x)
        || pts.iter().all(|p| pt.x > p.x)
        || pts.iter().all(|p| pt.y > p.y)
        || pts.iter().all(|p| p.x == first.x)
    {
        return 0;
    }
    if pts.iter().all(|p| pt.y < p.y) && pt.x != first.x && pt.x != last.x {
        return cross_down(first.x, last.x, pt.x);
    }
    let roots = frame.solve_point(pt.x - first.x);
    let py = pt.y - first.y;
    frame.cross(&roots, py, py)
}

/// How many times the ray from `pt` crosses the outline.
///
/// Every subpath is closed implicitly. If `pt` is exactly one of the
/// outline's vertices the result is 0, whatever was counted so far.
pub fn cross_path(path: impl IntoIterator<Item = PathEl>, pt: Point) -> i32 {
    let mut cross = 0;
    let mut start = Point::ZERO;
    let mut cur = Point::ZERO;
    for el in path {
        match el {
            PathEl::MoveTo(p) => {
                if cur != start {
                    cross += cross_line(cur, start, pt);
                }
                start = p;
                cur = p;
            }
            PathEl::LineTo(p) => {
                cross += cross_line(cur, p, pt);
                cur = p;
            }
            PathEl::QuadTo(p1, p2) => {
                cross += cross_quad(cur, p1, p2, pt);
                cur = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                cross += cross_cubic(cur, p1, p2, p3, pt);
                cur = p3;
            }
            PathEl::ClosePath => {
                if cur != start {
                    cross += cross_line(cur, start, pt);
                    cur = start;
                }
            }
        }
        if pt == cur {
            return 0;
        }
    }
    if cur != start {
        cross += cross_line(cur, start, pt);
    }
    cross
}

/// How many times the ray from `pt` crosses the shape's outline.
///
/// Points outside the shape's integer bounds are rejected without
/// walking the outline. The point is truncated toward zero for that test.
pub fn cross_shape<S: Shape + ?Sized>(shape: &S, pt: Point) -> i32 {
    if !shape.bounds().contains(to_i32(pt.x), to_i32(pt.y)) {
        return 0;
    }
    cross_path(shape.path_elements(), pt)
}

/// How the line from `p0` to `p1` crosses the stripe of `rect`.
pub fn intersect_line(p0: Point, p1: Point, rect: &Rect) -> StripeCrossing {
    let Point { x: x0, y: y0 } = p0;
    let Point { x: x1, y: y1 } = p1;
    let (rx0, ry0, rx1, ry1) = (rect.x0(), rect.y0(), rect.x1(), rect.y1());

    // Left, right or up.
    if (rx1 < x0 && rx1 < x1) || (rx0 > x0 && rx0 > x1) || (ry0 > y0 && ry0 > y1) {
        return StripeCrossing::Count(0);
    }

    if !(ry1 < y0 && ry1 < y1) {
        if x0 == x1 {
            return StripeCrossing::Crossing;
        }
        // The part of the line within the stripe's x range.
        let (bx0, bx1) = if x0 < x1 {
            (x0.max(rx0), x1.min(rx1))
        } else {
            (x1.max(rx0), x0.min(rx1))
        };
        let k = (y1 - y0) / (x1 - x0);
        let by0 = k * (bx0 - x0) + y0;
        let by1 = k * (bx1 - x0) + y0;
        if by0 < ry0 && by1 < ry0 {
            return StripeCrossing::Count(0);
        }
        if !(by0 > ry1 && by1 > ry1) {
            return StripeCrossing::Crossing;
        }
    }

    let count = if x0 == x1 {
        0
    } else if rx0 == x0 {
        if x0 < x1 {
            0
        } else {
            -1
        }
    } else if rx0 == x1 {
        i32::from(x0 < x1)
    } else {
        cross_down(x0, x1, rx0)
    };
    StripeCrossing::Count(count)
}

/// How a quadratic Bézier crosses the stripe of `rect`.
pub fn intersect_quad(p0: Point, p1: Point, p2: Point, rect: &Rect) -> StripeCrossing {
    intersect_curve(&[p0, p1, p2], &QuadFrame::new(p0, p1, p2), rect)
}

/// How a cubic Bézier crosses the stripe of `rect`.
pub fn intersect_cubic(p0: Point, p1: Point, p2: Point, p3: Point, rect: &Rect) -> StripeCrossing {
    intersect_curve(&[p0, p1, p2, p3], &CubicFrame::new(p0, p1, p2, p3), rect)
}

/// Roots on both stripe edges, extrema, and the two endpoints.
const MAX_BOUNDS: usize = 12;

fn intersect_curve(pts: &[Point], frame: &impl LocalCurve, rect: &Rect) -> StripeCrossing {
    let (Some(&first), Some(&last)) = (pts.first(), pts.last()) else {
        return StripeCrossing::Count(0);
    };
    let (rx0, ry0, rx1, ry1) = (rect.x0(), rect.y0(), rect.x1(), rect.y1());

    if pts.iter().all(|p| rx1 < p.x) || pts.iter().all(|p| rx0 > p.x) || pts.iter().all(|p| ry0 > p.y)
    {
        return StripeCrossing::Count(0);
    }
    if pts.iter().all(|p| ry1 < p.y) && rx0 != first.x && rx0 != last.x {
        return StripeCrossing::Count(cross_down(first.x, last.x, rx0));
    }

    let px0 = rx0 - first.x;
    let py0 = ry0 - first.y;
    let px1 = rx1 - first.x;
    let py1 = ry1 - first.y;
    let roots0 = frame.solve_point(px0);
    let roots1 = frame.solve_point(px1);
    if roots0.is_empty() && roots1.is_empty() {
        return StripeCrossing::Count(0);
    }

    let min_x = px0 - DELTA;
    let max_x = px1 + DELTA;
    let mut bounds = ArrayVec::<Bound, MAX_BOUNDS>::new();
    add_bounds(frame, &mut bounds, &roots0, min_x, max_x);
    add_bounds(frame, &mut bounds, &roots1, min_x, max_x);
    add_bounds(frame, &mut bounds, &frame.extrema(), min_x, max_x);
    if rx0 < first.x && first.x < rx1 {
        bounds.push(Bound {
            t: 0.0,
            x: 0.0,
            y: 0.0,
        });
    }
    if rx0 < last.x && last.x < rx1 {
        let end = frame.end();
        bounds.push(Bound {
            t: 1.0,
            x: end.x,
            y: end.y,
        });
    }

    cross_bound(&mut bounds, py0, py1)
        .unwrap_or_else(|| StripeCrossing::Count(frame.cross(&roots0, py0, py1)))
}

/// How the outline crosses the stripe of `rect`.
///
/// Every subpath is closed implicitly. Stops at the first segment that
/// enters the rectangle.
pub fn intersect_path(path: impl IntoIterator<Item = PathEl>, rect: &Rect) -> StripeCrossing {
    let mut cross = 0;
    let mut start = Point::ZERO;
    let mut cur = Point::ZERO;
    for el in path {
        let count = match el {
            PathEl::MoveTo(p) => {
                let count = if cur != start {
                    intersect_line(cur, start, rect)
                } else {
                    StripeCrossing::Count(0)
                };
                start = p;
                cur = p;
                count
            }
            PathEl::LineTo(p) => {
                let count = intersect_line(cur, p, rect);
                cur = p;
                count
            }
            PathEl::QuadTo(p1, p2) => {
                let count = intersect_quad(cur, p1, p2, rect);
                cur = p2;
                count
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let count = intersect_cubic(cur, p1, p2, p3, rect);
                cur = p3;
                count
            }
            PathEl::ClosePath => {
                let count = if cur != start {
                    intersect_line(cur, start, rect)
                } else {
                    StripeCrossing::Count(0)
                };
                cur = start;
                count
            }
        };
        match count {
            StripeCrossing::Crossing => return StripeCrossing::Crossing,
            StripeCrossing::Count(n) => cross += n,
        }
    }
    if cur != start {
        match intersect_line(cur, start, rect) {
            StripeCrossing::Crossing => return StripeCrossing::Crossing,
            StripeCrossing::Count(n) => cross += n,
        }
    }
    StripeCrossing::Count(cross)
}

/// How the shape's outline crosses the stripe of `rect`.
///
/// Shapes whose integer bounds miss the truncated rectangle are rejected
/// without walking the outline.
pub fn intersect_shape<S: Shape + ?Sized>(shape: &S, rect: &Rect) -> StripeCrossing {
    if !shape.bounds().intersects(&rect.trunc_to_int()) {
        return StripeCrossing::Count(0);
    }
    intersect_path(shape.path_elements(), rect)
}

/// A sample of a curve in its local frame.
#[derive(Clone, Copy, Debug)]
struct Bound {
    t: f64,
    x: f64,
    y: f64,
}

fn add_bounds(
    frame: &impl LocalCurve,
    bounds: &mut ArrayVec<Bound, MAX_BOUNDS>,
    roots: &[f64],
    min_x: f64,
    max_x: f64,
) {
    for &t in roots {
        if t > -DELTA && t < 1.0 + DELTA {
            let p = frame.eval(t);
            if min_x <= p.x && p.x <= max_x {
                bounds.push(Bound { t, x: p.x, y: p.y });
            }
        }
    }
}

/// Decide a stripe crossing from curve samples, if the samples allow it.
fn cross_bound(bounds: &mut [Bound], py0: f64, py1: f64) -> Option<StripeCrossing> {
    if bounds.is_empty() {
        return Some(StripeCrossing::Count(0));
    }
    let mut up = 0;
    let mut down = 0;
    for b in bounds.iter() {
        if b.y < py0 {
            up += 1;
        } else if b.y > py1 {
            down += 1;
        } else {
            return Some(StripeCrossing::Crossing);
        }
    }
    if down == 0 {
        return Some(StripeCrossing::Count(0));
    }
    if up != 0 {
        bounds.sort_by(|a, b| a.t.total_cmp(&b.t));
        for pair in bounds.windows(2) {
            let below0 = pair[0].y > py1;
            let below1 = pair[1].y > py1;
            if below0 != below1 && pair[1].x != pair[0].x {
                return Some(StripeCrossing::Crossing);
            }
        }
    }
    None
}

/// A curve translated so that it starts at the origin.
trait LocalCurve {
    /// Parameters where the curve's x equals `px`.
    fn solve_point(&self, px: f64) -> ArrayVec<f64, 3>;

    /// Parameters where the derivative of x or of y vanishes.
    fn extrema(&self) -> ArrayVec<f64, 4>;

    fn eval(&self, t: f64) -> Vec2;

    fn end(&self) -> Vec2;

    /// Classify the roots of `x(t) = px` against the stripe from `py0` to `py1`.
    fn cross(&self, roots: &[f64], py0: f64, py1: f64) -> i32;
}

struct QuadFrame {
    /// End point.
    a: Vec2,
    /// Control point.
    b: Vec2,
    c1: Vec2,
    c2: Vec2,
}

impl QuadFrame {
    fn new(p0: Point, p1: Point, p2: Point) -> Self {
        let a = p2 - p0;
        let b = p1 - p0;
        let c1 = 2.0 * b;
        QuadFrame {
            a,
            b,
            c1,
            c2: a - c1,
        }
    }
}

impl LocalCurve for QuadFrame {
    fn solve_point(&self, px: f64) -> ArrayVec<f64, 3> {
        solve_quadratic(-px, self.c1.x, self.c2.x)
            .into_iter()
            .collect()
    }

    fn extrema(&self) -> ArrayVec<f64, 4> {
        let mut result = ArrayVec::new();
        if self.c2.x != 0.0 {
            result.push(-self.c1.x / (2.0 * self.c2.x));
        }
        if self.c2.y != 0.0 {
            result.push(-self.c1.y / (2.0 * self.c2.y));
        }
        result
    }

    fn eval(&self, t: f64) -> Vec2 {
        t * (t * self.c2 + self.c1)
    }

    fn end(&self) -> Vec2 {
        self.a
    }

    fn cross(&self, roots: &[f64], py0: f64, py1: f64) -> i32 {
        let Self { a, b, c1, c2 } = *self;
        let mut cross = 0;
        for &t in roots {
            if t < -DELTA || t > 1.0 + DELTA {
                continue;
            }
            if t < DELTA {
                let dx = if b.x != 0.0 { b.x } else { a.x - b.x };
                if py0 < 0.0 && dx < 0.0 {
                    cross -= 1;
                }
                continue;
            }
            if t > 1.0 - DELTA {
                let dx = if a.x != b.x { a.x - b.x } else { b.x };
                if py0 < a.y && dx > 0.0 {
                    cross += 1;
                }
                continue;
            }
            let ry = t * (t * c2.y + c1.y);
            if ry > py1 {
                // Half the x derivative.
                let rxt = t * c2.x + b.x;
                if is_zero(rxt) {
                    continue;
                }
                cross += if rxt > 0.0 { 1 } else { -1 };
            }
        }
        cross
    }
}

struct CubicFrame {
    /// End point.
    a: Vec2,
    /// First control point.
    b: Vec2,
    /// Second control point.
    c: Vec2,
    c1: Vec2,
    c2: Vec2,
    c3: Vec2,
}

impl CubicFrame {
    fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        let a = p3 - p0;
        let b = p1 - p0;
        let c = p2 - p0;
        let c1 = 3.0 * b;
        let c2 = 3.0 * c - 2.0 * c1;
        CubicFrame {
            a,
            b,
            c,
            c1,
            c2,
            c3: a - c2 - c1,
        }
    }
}

impl LocalCurve for CubicFrame {
    fn solve_point(&self, px: f64) -> ArrayVec<f64, 3> {
        solve_cubic(-px, self.c1.x, self.c2.x, self.c3.x)
    }

    fn extrema(&self) -> ArrayVec<f64, 4> {
        let mut result = ArrayVec::new();
        result.extend(solve_quadratic(self.c1.x, 2.0 * self.c2.x, 3.0 * self.c3.x));
        result.extend(solve_quadratic(self.c1.y, 2.0 * self.c2.y, 3.0 * self.c3.y));
        result
    }

    fn eval(&self, t: f64) -> Vec2 {
        t * (t * (t * self.c3 + self.c2) + self.c1)
    }

    fn end(&self) -> Vec2 {
        self.a
    }

    fn cross(&self, roots: &[f64], py0: f64, py1: f64) -> i32 {
        let Self {
            a,
            b,
            c,
            c1,
            c2,
            c3,
        } = *self;
        let mut cross = 0;
        for &t in roots {
            if t < -DELTA || t > 1.0 + DELTA {
                continue;
            }
            if t < DELTA {
                let dx = if b.x != 0.0 {
                    b.x
                } else if c.x != b.x {
                    c.x - b.x
                } else {
                    a.x - c.x
                };
                if py0 < 0.0 && dx < 0.0 {
                    cross -= 1;
                }
                continue;
            }
            if t > 1.0 - DELTA {
                let dx = if a.x != c.x {
                    a.x - c.x
                } else if c.x != b.x {
                    c.x - b.x
                } else {
                    b.x
                };
                if py0 < a.y && dx > 0.0 {
                    cross += 1;
                }
                continue;
            }
            let ry = t * (t * (t * c3.y + c2.y) + c1.y);
            if ry > py1 {
                let mut rxt = t * (t * 3.0 * c3.x + 2.0 * c2.x) + c1.x;
                if is_zero(rxt) {
                    if !is_zero(6.0 * t * c3.x + 2.0 * c2.x) {
                        // Inflection.
                        continue;
                    }
                    rxt = a.x;
                }
                cross += if rxt > 0.0 { 1 } else { -1 };
            }
        }
        cross
    }
}
