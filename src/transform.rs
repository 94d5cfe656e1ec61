// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point transformations applied to paths.

use crate::{Point, Vec2};

/// A mapping of points to points.
///
/// Paths only need to push their vertices through a transform, so any
/// matrix type can take part by implementing this trait. Closures
/// `Fn(Point) -> Point` implement it directly.
pub trait PointTransform {
    /// Map one point.
    fn transform_point(&self, pt: Point) -> Point;

    /// Whether this transform leaves every point unchanged.
    ///
    /// Transforming a path by an identity transform is skipped. The
    /// default is `false`, which is always correct.
    fn is_identity(&self) -> bool {
        false
    }
}

impl<F: Fn(Point) -> Point> PointTransform for F {
    #[inline]
    fn transform_point(&self, pt: Point) -> Point {
        self(pt)
    }
}

/// A transformation including uniform scaling and translation.
///
/// If the translation is `(x, y)` and the scale is `s`, then this
/// transformation represents this augmented matrix:
///
/// ```text
/// | s 0 x |
/// | 0 s y |
/// | 0 0 1 |
/// ```
///
/// Points are scaled first, then translated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslateScale {
    translation: Vec2,
    scale: f64,
}

impl TranslateScale {
    /// The identity transform.
    pub const IDENTITY: TranslateScale = TranslateScale::new(Vec2::ZERO, 1.0);

    /// Create a new transformation from translation and scale.
    #[inline]
    pub const fn new(translation: Vec2, scale: f64) -> TranslateScale {
        TranslateScale { translation, scale }
    }

    /// Create a new transformation with scale only.
    #[inline]
    pub const fn scale(s: f64) -> TranslateScale {
        TranslateScale::new(Vec2::ZERO, s)
    }

    /// Create a new transformation with translation only.
    #[inline]
    pub const fn translate(t: Vec2) -> TranslateScale {
        TranslateScale::new(t, 1.0)
    }

    /// Decompose transformation into translation and scale.
    pub fn as_tuple(self) -> (Vec2, f64) {
        (self.translation, self.scale)
    }

    /// Compute the inverse transform.
    ///
    /// Produces NaN values when scale is zero.
    #[must_use]
    pub fn inverse(self) -> TranslateScale {
        let scale_recip = self.scale.recip();
        TranslateScale {
            translation: self.translation * -scale_recip,
            scale: scale_recip,
        }
    }
}

impl Default for TranslateScale {
    fn default() -> Self {
        TranslateScale::IDENTITY
    }
}

impl PointTransform for TranslateScale {
    #[inline]
    fn transform_point(&self, pt: Point) -> Point {
        (self.scale * pt.to_vec2()).to_point() + self.translation
    }

    fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Vec2::ZERO
    }
}
