// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A real-valued rectangle.

use core::fmt;
use core::ops::{Add, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{IntRect, PathEl, Point, Shape, Size, Vec2};

/// An axis-aligned rectangle with double precision origin and size.
///
/// Width and height may be negative; such a rectangle has no area. This is
/// how [`Rect::intersection`] reports rectangles that do not overlap.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x coordinate of the origin (left edge).
    pub x: f64,
    /// The y coordinate of the origin (top edge in y-down spaces).
    pub y: f64,
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from origin coordinates and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The smallest rectangle containing both points.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        let x = p0.x.min(p1.x);
        let y = p0.y.min(p1.y);
        Rect::new(x, y, p0.x.max(p1.x) - x, p0.y.max(p1.y) - y)
    }

    /// The origin of the rectangle.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The left edge.
    #[inline]
    pub fn x0(&self) -> f64 {
        self.x
    }

    /// The top edge.
    #[inline]
    pub fn y0(&self) -> f64 {
        self.y
    }

    /// The right edge.
    #[inline]
    pub fn x1(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge.
    #[inline]
    pub fn y1(&self) -> f64 {
        self.y + self.height
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Whether the width or height is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Whether `pt` lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.x1() >= pt.x && self.y1() >= pt.y
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x1() >= other.x1()
            && self.y1() >= other.y1()
    }

    /// Whether the two rectangles share a region of positive area.
    ///
    /// Rectangles with zero or negative width or height never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if other.is_empty() || self.is_empty() {
            return false;
        }
        other.x1() > self.x && other.y1() > self.y && self.x1() > other.x && self.y1() > other.y
    }

    /// The intersection of two rectangles.
    ///
    /// This is plain min/max arithmetic on the edges. When the rectangles do
    /// not overlap the result has a negative width or height; it is not
    /// clamped, and callers must check [`Rect::is_empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cutline::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert_eq!(a.intersection(&Rect::new(5.0, 5.0, 10.0, 10.0)), Rect::new(5.0, 5.0, 5.0, 5.0));
    ///
    /// let apart = a.intersection(&Rect::new(20.0, 20.0, 5.0, 5.0));
    /// assert!(apart.width < 0.0 && apart.height < 0.0);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.x1().max(other.x1());
        let y1 = self.y1().max(other.y1());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Compute the union with one point.
    ///
    /// A succession of `union_pt` calls on a series of points, starting
    /// from a zero-size rectangle at the first point, yields their
    /// enclosing rectangle.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        let x0 = self.x.min(pt.x);
        let y0 = self.y.min(pt.y);
        let x1 = self.x1().max(pt.x);
        let y1 = self.y1().max(pt.y);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The rectangle moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The smallest integer rectangle covering this one.
    ///
    /// The edges are rounded outward: origin down, far edges up.
    pub fn expand_to_int(&self) -> IntRect {
        let x0 = to_i32(self.x.floor());
        let y0 = to_i32(self.y.floor());
        let x1 = to_i32(self.x1().ceil());
        let y1 = to_i32(self.y1().ceil());
        IntRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The integer rectangle with each component truncated toward zero.
    pub fn trunc_to_int(&self) -> IntRect {
        IntRect::new(
            to_i32(self.x),
            to_i32(self.y),
            to_i32(self.width),
            to_i32(self.height),
        )
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "integer rectangles saturate out-of-range coordinates"
)]
#[inline]
pub(crate) fn to_i32(v: f64) -> i32 {
    v as i32
}

impl From<IntRect> for Rect {
    #[inline]
    fn from(r: IntRect) -> Rect {
        Rect::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.width),
            f64::from(r.height),
        )
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        self.translate(v.x, v.y)
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        self.translate(-v.x, -v.y)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect {{ origin: ({:?}, {:?}), size: {:?}W×{:?}H }}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect {{ ")?;
        fmt::Display::fmt(&self.origin(), f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.size(), f)?;
        write!(f, " }}")
    }
}

/// Iterator over the elements of a rectangle's outline.
///
/// Emits a move to the origin, three lines around the corners, and a
/// close. This is clockwise in a y-down coordinate system for positive
/// width and height.
#[derive(Clone, Debug)]
pub struct RectPathIter {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    ix: usize,
}

impl RectPathIter {
    pub(crate) fn new(rect: &Rect) -> Self {
        RectPathIter {
            x0: rect.x0(),
            y0: rect.y0(),
            x1: rect.x1(),
            y1: rect.y1(),
            ix: 0,
        }
    }
}

impl Iterator for RectPathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathEl::MoveTo(Point::new(self.x0, self.y0))),
            2 => Some(PathEl::LineTo(Point::new(self.x1, self.y0))),
            3 => Some(PathEl::LineTo(Point::new(self.x1, self.y1))),
            4 => Some(PathEl::LineTo(Point::new(self.x0, self.y1))),
            5 => Some(PathEl::ClosePath),
            _ => None,
        }
    }
}

impl Shape for Rect {
    type PathElementsIter<'iter> = RectPathIter;

    fn path_elements(&self) -> RectPathIter {
        RectPathIter::new(self)
    }

    #[inline]
    fn bounds(&self) -> IntRect {
        self.expand_to_int()
    }

    #[inline]
    fn bounds_2d(&self) -> Rect {
        *self
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        Rect::contains(self, pt)
    }

    #[inline]
    fn is_rectangle(&self) -> bool {
        true
    }

    /// The same rectangle, if all four components are integers.
    fn as_int_rect(&self) -> Option<IntRect> {
        let r = self.trunc_to_int();
        (Rect::from(r) == *self).then_some(r)
    }
}
