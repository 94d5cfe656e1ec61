// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting curves at the edges of a rectangle.
//!
//! [`segment`] cuts a line or Bézier into fragments so that every place
//! where it crosses one of the four edges of a clip rectangle becomes a
//! fragment end point. Each fragment then lies either inside or outside
//! the rectangle, which is what the [intersector](crate::clip) needs.

use arrayvec::ArrayVec;
use log::{debug, trace};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::crossing::{intersect_cubic, intersect_line, intersect_quad};
use crate::{PathSeg, Rect, StripeCrossing};

/// Split parameters closer than this to either end of a curve are ignored,
/// and candidate parameters closer than this to each other are merged.
pub const SPLIT_EPSILON: f64 = 0.01;

/// Split `curve` at every crossing with an edge of `rect`.
///
/// The fragments are returned in order and join end to end, starting at
/// the start of `curve` and finishing at its end. A curve that misses the
/// rectangle, or only touches it near its end points, comes back whole.
///
/// # Examples
///
/// ```
/// use cutline::{Line, PathSeg, Rect};
/// use cutline::segment::segment;
///
/// let line = PathSeg::Line(Line::new((-5.0, 5.0), (15.0, 5.0)));
/// let pieces = segment(&line, &Rect::new(0.0, 0.0, 10.0, 10.0));
/// assert_eq!(pieces.len(), 3);
/// ```
pub fn segment(curve: &PathSeg, rect: &Rect) -> SmallVec<[PathSeg; 4]> {
    let mut out = SmallVec::new();
    let budget = 4 * curve.degree();
    let mut rest = *curve;
    for _ in 0..budget {
        let Some((head, tail)) = split_once(&rest, rect) else {
            out.push(rest);
            return out;
        };
        out.push(head);
        if tail.approx_eq(&rest, SPLIT_EPSILON) {
            debug!("segmentation made no progress on {rest:?}");
            out.push(tail);
            return out;
        }
        rest = tail;
    }
    debug!("segmentation stopped after {budget} splits");
    out.push(rest);
    out
}

/// Split off the part of `curve` before its first interior edge crossing.
fn split_once(curve: &PathSeg, rect: &Rect) -> Option<(PathSeg, PathSeg)> {
    if misses_bbox(curve, rect) {
        return None;
    }
    let crossing = match *curve {
        PathSeg::Line(l) => intersect_line(l.p0, l.p1, rect),
        PathSeg::Quad(q) => intersect_quad(q.p0, q.p1, q.p2, rect),
        PathSeg::Cubic(c) => intersect_cubic(c.p0, c.p1, c.p2, c.p3, rect),
    };
    if crossing == StripeCrossing::Count(0) {
        return None;
    }
    let (x0, y0, x1, y1) = (rect.x0(), rect.y0(), rect.x1(), rect.y1());
    let mut ts: ArrayVec<f64, 12> = ArrayVec::new();
    let candidates = curve
        .t_values_for_x(x0, y0, y1)
        .into_iter()
        .chain(curve.t_values_for_x(x1, y0, y1))
        .chain(curve.t_values_for_y(y0, x0, x1))
        .chain(curve.t_values_for_y(y1, x0, x1));
    for t in candidates {
        if !ts.iter().any(|u| (u - t).abs() < SPLIT_EPSILON) {
            ts.push(t);
        }
    }
    ts.sort_by(f64::total_cmp);
    let t = ts
        .iter()
        .copied()
        .find(|t| SPLIT_EPSILON < *t && *t < 1.0 - SPLIT_EPSILON)?;
    trace!("splitting {curve:?} at t = {t}");
    Some((curve.split_head(t), curve.split_tail(t)))
}

/// Whether every control point lies strictly to one side of `rect`.
fn misses_bbox(curve: &PathSeg, rect: &Rect) -> bool {
    let pts = curve.control_points();
    pts.iter().all(|p| p.x < rect.x0())
        || pts.iter().all(|p| p.x > rect.x1())
        || pts.iter().all(|p| p.y < rect.y0())
        || pts.iter().all(|p| p.y > rect.y1())
}
