// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{Point, Rect};

/// A curve parametrized by a scalar.
///
/// The parameter runs over `[0, 1]`; `eval(0)` is the start point and
/// `eval(1)` the end point.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// Get a subsegment of the curve for the given parameter range.
    ///
    /// The start and end points are exactly `eval(range.start)` and
    /// `eval(range.end)`.
    fn subsegment(&self, range: Range<f64>) -> Self;

    /// The same curve traversed from end to start.
    #[must_use]
    fn reverse(&self) -> Self;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// The maximum number of extrema that can be reported in the `ParamCurveExtrema` trait.
///
/// This is 4 to accommodate the x and y extrema of a cubic Bézier.
pub const MAX_EXTREMA: usize = 4;

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the extrema of the curve.
    ///
    /// Only extrema within the interior of the curve count, and the
    /// parameters are sorted. At most four are reported.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA>;

    /// The smallest rectangle containing the curve.
    ///
    /// Found by evaluating the curve at its endpoints and at every root of
    /// its derivative inside the parameter range.
    fn bounding_rect(&self) -> Rect {
        let mut bbox = Rect::from_points(self.start(), self.end());
        for t in self.extrema() {
            bbox = bbox.union_pt(self.eval(t));
        }
        bbox
    }
}
