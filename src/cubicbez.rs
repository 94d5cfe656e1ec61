// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{ParamCurve, ParamCurveExtrema, Point, QuadBez, Vec2, MAX_EXTREMA};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(missing_docs, reason = "control points are self-describing")]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The part of the curve over `[0, t]`, by de Casteljau.
    ///
    /// The tail over `[t, 1]` is obtained as
    /// `c.reverse().split_head(1.0 - t).reverse()`.
    pub fn split_head(&self, t: f64) -> CubicBez {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        CubicBez::new(self.p0, p01, p012, p012.lerp(p123, t))
    }

    /// The coefficients of `p(t) = c0 + c1 t + c2 t² + c3 t³`.
    #[inline]
    pub fn power_coeffs(&self) -> [Vec2; 4] {
        let p0 = self.p0.to_vec2();
        let p1 = self.p1.to_vec2();
        let p2 = self.p2.to_vec2();
        let p3 = self.p3.to_vec2();
        [
            p0,
            3.0 * (p1 - p0),
            3.0 * (p2 - 2.0 * p1 + p0),
            p3 - 3.0 * p2 + 3.0 * p1 - p0,
        ]
    }

    /// The derivative, a quadratic in vector space.
    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p3 = self.eval(t1);
        let d = self.deriv();
        let scale = (t1 - t0) * (1.0 / 3.0);
        let p1 = p0 + scale * d.eval(t0).to_vec2();
        let p2 = p3 - scale * d.eval(t1).to_vec2();
        CubicBez { p0, p1, p2, p3 }
    }

    #[inline]
    fn reverse(&self) -> CubicBez {
        CubicBez::new(self.p3, self.p2, self.p1, self.p0)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            let roots = solve_quadratic(c, b, a);
            for &t in &roots {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_by(f64::total_cmp);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, ParamCurve, ParamCurveExtrema, Point};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(p0.approx_eq(p1, epsilon), "{p0:?} != {p1:?}");
    }

    #[test]
    fn cubicbez_subsegment() {
        let c = CubicBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (9.7, 9.3));
        let t0 = 0.1;
        let t1 = 0.8;
        let cs = c.subsegment(t0..t1);
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(c.eval(ts), cs.eval(t), 1e-12);
        }
    }

    #[test]
    fn head_and_reversed_tail_meet() {
        let c = CubicBez::new((0.0, 0.0), (3.0, 10.0), (7.0, -10.0), (10.0, 0.0));
        let t = 0.37;
        let head = c.split_head(t);
        let tail = c.reverse().split_head(1.0 - t).reverse();
        assert_near(head.p3, c.eval(t), 1e-12);
        assert_near(tail.p0, c.eval(t), 1e-12);
        assert_eq!(tail.p3, c.p3);
        for i in 0..=8 {
            let s = f64::from(i) / 8.0;
            assert_near(head.eval(s), c.eval(s * t), 1e-12);
            assert_near(tail.eval(s), c.eval(t + s * (1.0 - t)), 1e-12);
        }
    }

    #[test]
    fn power_coeffs_eval() {
        let c = CubicBez::new((0.0, 0.0), (3.0, 10.0), (7.0, -10.0), (10.0, 0.0));
        let [c0, c1, c2, c3] = c.power_coeffs();
        for t in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let p = (c0 + t * (c1 + t * (c2 + t * c3))).to_point();
            assert_near(p, c.eval(t), 1e-12);
        }
    }

    #[test]
    fn cubicbez_extrema() {
        // y(t) = 30t(1-t)(1-2t), x(t) is monotone.
        let c = CubicBez::new((0.0, 0.0), (3.0, 10.0), (7.0, -10.0), (10.0, 0.0));
        let extrema = c.extrema();
        assert_eq!(extrema.len(), 2);
        let b = c.bounding_rect();
        let peak = 5.0 / 3f64.sqrt();
        assert!((b.y1() - peak).abs() < 1e-9);
        assert!((b.y0() + peak).abs() < 1e-9);
        assert_eq!(b.x0(), 0.0);
        assert_eq!(b.x1(), 10.0);
    }
}
