// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{Rect, Vec2};

/// A 2D point.
///
/// Paths store their coordinates in single precision; points handed out by
/// the path iterator and used by the geometry routines are double precision.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Convert this point into a `Vec2`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Linearly interpolate between two points.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self.to_vec2().lerp(other.to_vec2(), t).to_point()
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).hypot()
    }

    /// Move this point to the nearest position inside `rect`.
    ///
    /// Each coordinate is clamped independently to the closed range spanned
    /// by the rectangle. The rectangle must have non-negative width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutline::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
    /// assert_eq!(Point::new(-3.0, 2.0).clamp_to(&rect), Point::new(0.0, 2.0));
    /// assert_eq!(Point::new(12.0, 7.5).clamp_to(&rect), Point::new(10.0, 5.0));
    /// ```
    #[inline]
    pub fn clamp_to(self, rect: &Rect) -> Point {
        let x = if self.x < rect.x0() {
            rect.x0()
        } else if self.x > rect.x1() {
            rect.x1()
        } else {
            self.x
        };
        let y = if self.y < rect.y0() {
            rect.y0()
        } else if self.y > rect.y1() {
            rect.y1()
        } else {
            self.y
        };
        Point::new(x, y)
    }

    /// Whether both coordinates are within `epsilon` of `other`'s.
    #[inline]
    pub fn approx_eq(self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Vec2) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn point_arithmetic() {
        assert_eq!(
            Point::new(0., 0.) - Vec2::new(10., 0.),
            Point::new(-10., 0.)
        );
        assert_eq!(
            Point::new(0., 0.) - Point::new(-5., 101.),
            Vec2::new(5., -101.)
        );
    }

    #[test]
    fn distance() {
        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert!((p1.distance(p2) - 5.).abs() < 1e-12);
    }

    #[test]
    fn clamp_inside_is_identity() {
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let p = Point::new(0.25, -0.5);
        assert_eq!(p.clamp_to(&rect), p);
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{p}"), "(0.12345, 9.87654)");
        assert_eq!(format!("{p:.2}"), "(0.12, 9.88)");
    }
}
