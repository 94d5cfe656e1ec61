// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::crossing::cross_shape;
use crate::{IntRect, PathEl, Point, Rect, WindingRule};

/// A generic trait for closed shapes.
///
/// A shape is anything that can describe its outline as a sequence of
/// [`PathEl`]s. Containment, clipping and comparison all work from that
/// outline; the remaining methods let concrete shapes answer faster.
pub trait Shape {
    /// The iterator returned by the [`path_elements`] method.
    ///
    /// [`path_elements`]: Shape::path_elements
    type PathElementsIter<'iter>: Iterator<Item = PathEl> + 'iter
    where
        Self: 'iter;

    /// The outline of the shape, as an iterator over path elements.
    ///
    /// The first element is a [`PathEl::MoveTo`]. Subpaths are treated as
    /// closed by every consumer in this crate.
    fn path_elements(&self) -> Self::PathElementsIter<'_>;

    /// The rule used to decide which regions of the outline are inside.
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    /// The smallest integer rectangle enclosing the shape.
    fn bounds(&self) -> IntRect;

    /// The smallest rectangle enclosing the shape.
    fn bounds_2d(&self) -> Rect;

    /// Whether `pt` lies inside the shape.
    ///
    /// Points outside [`bounds`](Shape::bounds) are never inside. Points
    /// on the outline itself are usually inside; vertices are not.
    fn contains(&self, pt: Point) -> bool {
        self.winding_rule().is_inside(cross_shape(self, pt))
    }

    /// Whether the shape is an axis-aligned rectangle.
    fn is_rectangle(&self) -> bool {
        false
    }

    /// If the shape is an integer rectangle, make it available.
    ///
    /// This is the shape kind the [intersector](crate::clip) clips against.
    fn as_int_rect(&self) -> Option<IntRect> {
        None
    }
}

/// Blanket implementation so `impl Shape` can accept `&impl Shape`.
impl<'a, T: Shape> Shape for &'a T {
    type PathElementsIter<'iter>
        = T::PathElementsIter<'iter>
    where
        T: 'iter,
        'a: 'iter;

    fn path_elements(&self) -> Self::PathElementsIter<'_> {
        (**self).path_elements()
    }

    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn bounds(&self) -> IntRect {
        (**self).bounds()
    }

    fn bounds_2d(&self) -> Rect {
        (**self).bounds_2d()
    }

    fn contains(&self, pt: Point) -> bool {
        (**self).contains(pt)
    }

    fn is_rectangle(&self) -> bool {
        (**self).is_rectangle()
    }

    fn as_int_rect(&self) -> Option<IntRect> {
        (**self).as_int_rect()
    }
}
