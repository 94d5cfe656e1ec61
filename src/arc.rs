// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arcs, drawn as cubic Béziers.

use core::f64::consts::{FRAC_PI_2, TAU};

use log::warn;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::DELTA;
use crate::{Error, Path, PathEl, Point, Rect, Vec2};

/// The largest distance between an arc and the cubics that approximate it
/// when an arc is added to a [`Path`].
pub const ARC_TOLERANCE: f64 = 0.1;

/// An arc of an axis-aligned ellipse.
///
/// Angles are parametric: the point at angle `a` is
/// `center + (radii.x * cos(a), radii.y * sin(a))`. They grow from `+x`
/// toward `+y`, which is clockwise on a y-down screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    /// The center of the ellipse.
    pub center: Point,
    /// The radii along the x and y axes.
    pub radii: Vec2,
    /// The parametric angle of the start point, in radians.
    pub start_angle: f64,
    /// The signed parametric angle swept, in radians.
    pub sweep_angle: f64,
}

impl Arc {
    /// Create a new arc.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Arc {
        Arc {
            center: center.into(),
            radii: radii.into(),
            start_angle,
            sweep_angle,
        }
    }

    /// The arc of the ellipse inscribed in `bounds`.
    ///
    /// Here the angles are the screen angles of the rays from the center
    /// through the end points, counter-clockwise from three o'clock. On an
    /// ellipse that is not a circle they differ from the parametric angles
    /// stored in the result.
    pub fn from_bounds(bounds: &Rect, start_angle: f64, sweep_angle: f64) -> Arc {
        let radii = Vec2::new(0.5 * bounds.width, 0.5 * bounds.height);
        // A counter-clockwise screen angle is a negative one in y-down space.
        let polar0 = -start_angle;
        let polar1 = -(start_angle + sweep_angle);
        let angle0 = parametric_angle(radii, polar0);
        let angle1 = parametric_angle(radii, polar1);
        Arc {
            center: bounds.center(),
            radii,
            start_angle: angle0,
            sweep_angle: angle1 - angle0,
        }
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.center + sample_ellipse(self.radii, self.start_angle)
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.center + sample_ellipse(self.radii, self.start_angle + self.sweep_angle)
    }

    /// Create an iterator generating Bézier path elements.
    ///
    /// The elements continue a path from [`Arc::start`]; every one is a
    /// [`PathEl::CurveTo`]. At least four cubics are used per full turn.
    pub fn append_iter(&self, tolerance: f64) -> ArcAppendIter {
        let scaled_err = self.radii.x.abs().max(self.radii.y.abs()) / tolerance;
        // Number of subdivisions per circle based on error tolerance.
        let n_err = (1.1163 * scaled_err).powf(1.0 / 6.0).max(3.999_999);
        let n = (n_err * self.sweep_angle.abs() * (1.0 / TAU)).ceil();
        let angle_step = self.sweep_angle / n;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the segment count is small and non-negative"
        )]
        let n = n as usize;
        ArcAppendIter {
            idx: 0,
            center: self.center,
            radii: self.radii,
            n,
            arm_len: (4.0 / 3.0) * (0.25 * angle_step).tan(),
            angle_step,
            p0: sample_ellipse(self.radii, self.start_angle),
            angle0: self.start_angle,
        }
    }
}

/// The cubic segments of an [`Arc`], see [`Arc::append_iter`].
#[derive(Clone, Debug)]
pub struct ArcAppendIter {
    idx: usize,
    center: Point,
    radii: Vec2,
    n: usize,
    arm_len: f64,
    angle_step: f64,
    p0: Vec2,
    angle0: f64,
}

impl Iterator for ArcAppendIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        if self.idx >= self.n {
            return None;
        }
        let angle1 = self.angle0 + self.angle_step;
        let p0 = self.p0;
        let p1 = p0 + self.arm_len * sample_ellipse(self.radii, self.angle0 + FRAC_PI_2);
        let p3 = sample_ellipse(self.radii, angle1);
        let p2 = p3 - self.arm_len * sample_ellipse(self.radii, angle1 + FRAC_PI_2);

        self.angle0 = angle1;
        self.p0 = p3;
        self.idx += 1;

        Some(PathEl::CurveTo(
            self.center + p1,
            self.center + p2,
            self.center + p3,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.n - self.idx;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for ArcAppendIter {}

fn sample_ellipse(radii: Vec2, angle: f64) -> Vec2 {
    Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
}

/// The parametric angle of the point where the ray at `polar` meets the
/// ellipse.
///
/// The two angles never differ by more than a quarter turn, so the result
/// is lifted to stay within that of `polar`. Sweeps of whole turns survive
/// the conversion.
fn parametric_angle(radii: Vec2, polar: f64) -> f64 {
    let raw = (radii.x * polar.sin()).atan2(radii.y * polar.cos());
    let diff = raw - polar;
    polar + diff.sin().atan2(diff.cos())
}

impl Path {
    /// Add an arc of the ellipse inscribed in `bounds`.
    ///
    /// `start_angle` and `sweep_angle` are in radians, counter-clockwise on
    /// screen from three o'clock, measured along rays from the center. The
    /// arc starts a new subpath, or with `join` continues the current one
    /// with a line to the arc's start.
    ///
    /// # Panics
    ///
    /// Panics if `join` is set and the path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::f64::consts::PI;
    /// use cutline::{Path, Point, Rect, Shape};
    ///
    /// let mut path = Path::new();
    /// path.arc(&Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 2.0 * PI, false);
    /// path.close_path();
    /// assert!(path.contains(Point::new(5.0, 5.0)));
    /// assert!(!path.contains(Point::new(0.5, 0.5)));
    /// ```
    pub fn arc(&mut self, bounds: &Rect, start_angle: f64, sweep_angle: f64, join: bool) {
        let arc = Arc::from_bounds(bounds, start_angle, sweep_angle);
        if join {
            self.line_to(arc.start());
        } else {
            self.move_to(arc.start());
        }
        self.extend(arc.append_iter(ARC_TOLERANCE));
    }

    /// Add a circular arc around `center` from the current point to `end`.
    ///
    /// The radius is the distance from `center` to `end`. If the current
    /// point is off that circle, a line joins it to the circle first. The
    /// arc always finishes exactly at `end`.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn arc_to(&mut self, center: impl Into<Point>, end: impl Into<Point>, clockwise: bool) {
        let Some(start) = self.current_point() else {
            panic!("{}", Error::MissingMoveTo);
        };
        let center = center.into();
        let end = end.into();
        let radius = center.distance(end);
        if (center.distance(start) - radius).abs() > 1.0 {
            warn!("arc from {start} to {end} around {center} does not follow one circle");
        }
        let angle0 = (start.y - center.y).atan2(start.x - center.x);
        let angle1 = (end.y - center.y).atan2(end.x - center.x);
        let sweep = if clockwise {
            positive_turn(angle1 - angle0)
        } else {
            -positive_turn(angle0 - angle1)
        };
        let arc = Arc::new(center, (radius, radius), angle0, sweep);
        if start.distance(arc.start()) > DELTA {
            self.line_to(arc.start());
        }
        let mut els = arc.append_iter(ARC_TOLERANCE).peekable();
        if els.peek().is_none() {
            if start.distance(end) > DELTA {
                self.line_to(end);
            }
            return;
        }
        while let Some(el) = els.next() {
            match el {
                PathEl::CurveTo(p1, p2, _) if els.peek().is_none() => self.curve_to(p1, p2, end),
                el => self.push(el),
            }
        }
    }
}

/// `angle` reduced to `[0, TAU)`.
fn positive_turn(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::{CubicBez, ParamCurve, PathVerb};

    fn cubics(path: &Path) -> alloc::vec::Vec<CubicBez> {
        let mut prev = Point::ZERO;
        let mut out = alloc::vec::Vec::new();
        for el in path.iter() {
            match el {
                PathEl::CurveTo(p1, p2, p3) => {
                    out.push(CubicBez::new(prev, p1, p2, p3));
                    prev = p3;
                }
                el => prev = el.end_point().unwrap_or(prev),
            }
        }
        out
    }

    #[test]
    fn full_circle_from_bounds() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut path = Path::new();
        path.arc(&bounds, 0.0, 2.0 * PI, false);
        assert_eq!(
            path.verbs(),
            &[
                PathVerb::Move,
                PathVerb::Cubic,
                PathVerb::Cubic,
                PathVerb::Cubic,
                PathVerb::Cubic
            ]
        );
        let center = Point::new(5.0, 5.0);
        for c in cubics(&path) {
            for i in 0..=8 {
                let p = c.eval(f64::from(i) / 8.0);
                let r = p.distance(center);
                assert!((r - 5.0).abs() < ARC_TOLERANCE, "{p:?} is {r} from the center");
            }
        }
        let start = path.iter().next().and_then(|el| el.end_point());
        assert!(start.is_some_and(|p| p.approx_eq(Point::new(10.0, 5.0), 1e-6)));
        let end = path.current_point();
        assert!(end.is_some_and(|p| p.approx_eq(Point::new(10.0, 5.0), 1e-5)));
    }

    #[test]
    fn ellipse_end_points_follow_rays() {
        // On a 20 x 10 ellipse, the ray at 45 degrees meets the curve at
        // |x| = |y| = ab / sqrt(a² + b²).
        let bounds = Rect::new(0.0, 0.0, 20.0, 10.0);
        let mut path = Path::new();
        path.arc(&bounds, FRAC_PI_4, FRAC_PI_2, false);
        let k = 50.0 / 125f64.sqrt();
        let start = path.iter().next().and_then(|el| el.end_point());
        assert!(
            start.is_some_and(|p| p.approx_eq(Point::new(10.0 + k, 5.0 - k), 1e-5)),
            "{start:?}"
        );
        let end = path.current_point();
        assert!(
            end.is_some_and(|p| p.approx_eq(Point::new(10.0 - k, 5.0 - k), 1e-5)),
            "{end:?}"
        );
        // The arc passes over the top of the ellipse and stays within its
        // bounds.
        let inflated = Rect::new(-0.01, -0.01, 20.02, 10.02);
        let mut top = f64::INFINITY;
        for c in cubics(&path) {
            for i in 0..=16 {
                let p = c.eval(f64::from(i) / 16.0);
                assert!(inflated.contains(p), "{p:?} is outside {bounds:?}");
                top = top.min(p.y);
            }
        }
        assert!(top.abs() < 1e-2, "top of the arc at y = {top}");
    }

    #[test]
    fn join_draws_a_line_to_the_start() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.arc(&Rect::new(0.0, 0.0, 10.0, 10.0), PI, -FRAC_PI_2, true);
        assert_eq!(path.verbs()[..3], [PathVerb::Move, PathVerb::Line, PathVerb::Cubic]);
        assert_eq!(path.points()[2..4], [0.0, 5.0]);
    }

    #[test]
    fn arc_to_clockwise_quarter() {
        let mut path = Path::new();
        path.move_to((10.0, 0.0));
        path.arc_to((0.0, 0.0), (0.0, 10.0), true);
        assert_eq!(path.verbs(), &[PathVerb::Move, PathVerb::Cubic]);
        assert_eq!(path.current_point(), Some(Point::new(0.0, 10.0)));
        let c = cubics(&path)[0];
        let mid = c.eval(0.5);
        assert!(mid.x > 0.0 && mid.y > 0.0, "{mid:?}");
        assert!((mid.distance(Point::ZERO) - 10.0).abs() < 1e-2);
    }

    #[test]
    fn arc_to_counter_clockwise_goes_the_long_way() {
        let mut path = Path::new();
        path.move_to((10.0, 0.0));
        path.arc_to((0.0, 0.0), (0.0, 10.0), false);
        let ends: alloc::vec::Vec<Point> = cubics(&path).iter().map(|c| c.p3).collect();
        assert_eq!(ends.len(), 3);
        assert!(ends[0].approx_eq(Point::new(0.0, -10.0), 1e-5));
        assert!(ends[1].approx_eq(Point::new(-10.0, 0.0), 1e-5));
        assert_eq!(ends[2], Point::new(0.0, 10.0));
    }

    #[test]
    fn arc_to_joins_a_point_off_the_circle() {
        let mut path = Path::new();
        path.move_to((20.0, 0.0));
        path.arc_to((0.0, 0.0), (0.0, 10.0), true);
        assert_eq!(
            path.verbs(),
            &[PathVerb::Move, PathVerb::Line, PathVerb::Cubic]
        );
        assert_eq!(path.points()[2..4], [10.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "move-to")]
    fn arc_to_needs_a_current_point() {
        Path::new().arc_to((0.0, 0.0), (1.0, 0.0), true);
    }

    #[test]
    fn zero_sweep_has_no_segments() {
        let arc = Arc::new((0.0, 0.0), (5.0, 5.0), 1.0, 0.0);
        assert_eq!(arc.append_iter(ARC_TOLERANCE).len(), 0);
        assert!(arc.start().approx_eq(arc.end(), 1e-12));
    }

    #[test]
    fn whole_turn_survives_angle_conversion() {
        let arc = Arc::from_bounds(&Rect::new(0.0, 0.0, 30.0, 10.0), 0.3, 2.0 * PI);
        assert!((arc.sweep_angle.abs() - 2.0 * PI).abs() < 1e-12);
        assert!(arc.start().approx_eq(arc.end(), 1e-9));
    }
}
