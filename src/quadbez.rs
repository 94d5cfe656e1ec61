// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(missing_docs, reason = "control points are self-describing")]
pub struct QuadBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// The part of the curve over `[0, t]`, by de Casteljau.
    #[inline]
    pub fn split_head(&self, t: f64) -> QuadBez {
        QuadBez::new(self.p0, self.p0.lerp(self.p1, t), self.eval(t))
    }

    /// The coefficients of `p(t) = c0 + c1 t + c2 t²`.
    #[inline]
    pub fn power_coeffs(&self) -> [Vec2; 3] {
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        [self.p0.to_vec2(), 2.0 * d0, d1 - d0]
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> QuadBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p2 = self.eval(t1);
        let p1 = p0 + (self.p1 - self.p0).lerp(self.p2 - self.p1, t0) * (t1 - t0);
        QuadBez { p0, p1, p2 }
    }

    #[inline]
    fn reverse(&self) -> QuadBez {
        QuadBez::new(self.p2, self.p1, self.p0)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveExtrema for QuadBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let dd = d1 - d0;
        if dd.x != 0.0 {
            let t = -d0.x / dd.x;
            if t > 0.0 && t < 1.0 {
                result.push(t);
            }
        }
        if dd.y != 0.0 {
            let t = -d0.y / dd.y;
            if t > 0.0 && t < 1.0 {
                result.push(t);
                if result.len() == 2 && result[0] > t {
                    result.swap(0, 1);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParamCurve, ParamCurveExtrema, Point, QuadBez, Rect};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(p0.approx_eq(p1, epsilon), "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_subsegment() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        let t0 = 0.1;
        let t1 = 0.8;
        let qs = q.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(q.eval(ts), qs.eval(t), epsilon);
        }
    }

    #[test]
    fn split_head_matches_subsegment() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        let head = q.split_head(0.3);
        let sub = q.subsegment(0.0..0.3);
        assert_near(head.p1, sub.p1, 1e-12);
        assert_near(head.p2, sub.p2, 1e-12);
    }

    #[test]
    fn quadbez_bounds() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 10.0), (10.0, 0.0));
        assert_eq!(q.extrema().as_slice(), &[0.5]);
        let r = q.bounding_rect();
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn power_coeffs_eval() {
        let q = QuadBez::new((1.0, 2.0), (4.0, -3.0), (0.5, 7.0));
        let [c0, c1, c2] = q.power_coeffs();
        for t in [0.0, 0.2, 0.75, 1.0] {
            let p = (c0 + t * (c1 + t * c2)).to_point();
            assert_near(p, q.eval(t), 1e-12);
        }
    }
}
