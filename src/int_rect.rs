// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An integer rectangle, the clip region of the intersector.

use core::fmt;

use crate::rect::RectPathIter;
use crate::{Point, Rect, Shape};

/// An axis-aligned rectangle with integer origin and size.
///
/// Like [`Rect`], a negative width or height is allowed and means the
/// rectangle has no area.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRect {
    /// The x coordinate of the origin.
    pub x: i32,
    /// The y coordinate of the origin.
    pub y: i32,
    /// The width.
    pub width: i32,
    /// The height.
    pub height: i32,
}

impl IntRect {
    /// The empty rectangle at the origin.
    pub const ZERO: IntRect = IntRect::new(0, 0, 0, 0);

    /// A new rectangle from origin coordinates and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> IntRect {
        IntRect {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge.
    #[inline]
    pub fn x1(&self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge.
    #[inline]
    pub fn y1(&self) -> i32 {
        self.y + self.height
    }

    /// Replace all four components.
    #[inline]
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        *self = IntRect::new(x, y, width, height);
    }

    /// Whether the width or height is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `(x, y)` lies inside the rectangle, boundary included.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x <= self.x1() && y <= self.y1()
    }

    /// Whether `other` lies entirely inside this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &IntRect) -> bool {
        self.contains(other.x, other.y) && self.contains(other.x1(), other.y1())
    }

    /// Whether the rectangles share a region of positive area.
    ///
    /// The comparisons are written so that edges near `i32::MAX` which
    /// overflow to negative values still compare correctly.
    pub fn intersects(&self, other: &IntRect) -> bool {
        let (mut tw, mut th) = (self.width, self.height);
        let (mut rw, mut rh) = (other.width, other.height);
        if rw <= 0 || rh <= 0 || tw <= 0 || th <= 0 {
            return false;
        }
        let (tx, ty) = (self.x, self.y);
        let (rx, ry) = (other.x, other.y);
        rw = rw.wrapping_add(rx);
        rh = rh.wrapping_add(ry);
        tw = tw.wrapping_add(tx);
        th = th.wrapping_add(ty);
        (rw < rx || rw > tx) && (rh < ry || rh > ty) && (tw < tx || tw > rx) && (th < ty || th > ry)
    }

    /// The intersection of two rectangles, without clamping.
    ///
    /// Non-overlapping inputs produce a negative width or height.
    ///
    /// ```
    /// use cutline::IntRect;
    ///
    /// let a = IntRect::new(0, 0, 10, 10);
    /// assert_eq!(a.intersection(&IntRect::new(5, 5, 10, 10)), IntRect::new(5, 5, 5, 5));
    /// assert_eq!(a.intersection(&IntRect::new(20, 20, 5, 5)), IntRect::new(20, 20, -10, -10));
    /// ```
    #[inline]
    pub fn intersection(&self, other: &IntRect) -> IntRect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        IntRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Write the intersection into `dst`, clamping width and height at zero.
    pub fn intersection_into(&self, other: &IntRect, dst: &mut IntRect) {
        let r = self.intersection(other);
        dst.set_bounds(r.x, r.y, r.width.max(0), r.height.max(0));
    }

    /// The rectangle moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> IntRect {
        IntRect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, w={}, h={}]",
            self.x, self.y, self.width, self.height
        )
    }
}

impl Shape for IntRect {
    type PathElementsIter<'iter> = RectPathIter;

    fn path_elements(&self) -> RectPathIter {
        RectPathIter::new(&Rect::from(*self))
    }

    #[inline]
    fn bounds(&self) -> IntRect {
        *self
    }

    #[inline]
    fn bounds_2d(&self) -> Rect {
        Rect::from(*self)
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        Rect::from(*self).contains(pt)
    }

    #[inline]
    fn is_rectangle(&self) -> bool {
        true
    }

    #[inline]
    fn as_int_rect(&self) -> Option<IntRect> {
        Some(*self)
    }
}
