// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of lines, quadratic and cubic Béziers.

use alloc::vec::Vec;
use core::fmt;

use crate::crossing::{cross_shape, is_inside_even_odd, is_inside_non_zero};
use crate::{Error, IntRect, Point, PointTransform, Rect, Shape};

/// The element of a path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "path elements are a closed set")]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic bezier using the current location and the two points.
    QuadTo(Point, Point),
    /// Draw a cubic bezier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

impl PathEl {
    /// The kind of this element.
    #[inline]
    pub fn verb(&self) -> PathVerb {
        match self {
            PathEl::MoveTo(_) => PathVerb::Move,
            PathEl::LineTo(_) => PathVerb::Line,
            PathEl::QuadTo(..) => PathVerb::Quad,
            PathEl::CurveTo(..) => PathVerb::Cubic,
            PathEl::ClosePath => PathVerb::Close,
        }
    }

    /// The end point of this element, if it has one.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::ClosePath => None,
        }
    }
}

/// The bare command of a path element, as stored in a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "path verbs are a closed set")]
pub enum PathVerb {
    /// Start a subpath.
    Move,
    /// A line.
    Line,
    /// A quadratic Bézier.
    Quad,
    /// A cubic Bézier.
    Cubic,
    /// Close the subpath.
    Close,
}

impl PathVerb {
    /// The number of points this command carries.
    #[inline]
    pub const fn point_count(self) -> usize {
        match self {
            PathVerb::Move | PathVerb::Line => 1,
            PathVerb::Quad => 2,
            PathVerb::Cubic => 3,
            PathVerb::Close => 0,
        }
    }
}

/// The rule deciding which regions enclosed by a path are inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "there are exactly two fill rules")]
pub enum WindingRule {
    /// Inside where the crossing count is odd.
    EvenOdd,
    /// Inside where the crossing count is not zero.
    #[default]
    NonZero,
}

impl WindingRule {
    /// The raw code of the even-odd rule.
    pub const EVEN_ODD_CODE: i32 = 0;
    /// The raw code of the non-zero rule.
    pub const NON_ZERO_CODE: i32 = 1;

    /// Whether a crossing count means inside under this rule.
    #[inline]
    pub fn is_inside(self, cross: i32) -> bool {
        match self {
            WindingRule::EvenOdd => is_inside_even_odd(cross),
            WindingRule::NonZero => is_inside_non_zero(cross),
        }
    }

    /// The raw integer code of this rule.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            WindingRule::EvenOdd => Self::EVEN_ODD_CODE,
            WindingRule::NonZero => Self::NON_ZERO_CODE,
        }
    }
}

impl TryFrom<i32> for WindingRule {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            Self::EVEN_ODD_CODE => Ok(WindingRule::EvenOdd),
            Self::NON_ZERO_CODE => Ok(WindingRule::NonZero),
            _ => Err(Error::InvalidWindingRule(code)),
        }
    }
}

impl From<WindingRule> for i32 {
    fn from(rule: WindingRule) -> i32 {
        rule.code()
    }
}

/// A path: a sequence of subpaths built from lines and Béziers.
///
/// Commands and coordinates are stored in two flat buffers. Coordinates
/// are kept in single precision; they are widened to [`Point`] when the
/// path is iterated.
///
/// # Examples
///
/// ```
/// use cutline::{Path, Point, Shape};
///
/// let mut path = Path::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((10.0, 0.0));
/// path.line_to((10.0, 10.0));
/// path.line_to((0.0, 10.0));
/// path.close_path();
///
/// assert!(path.contains(Point::new(5.0, 5.0)));
/// assert!(!path.contains(Point::new(15.0, 5.0)));
/// assert!(path.is_rectangle());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    verbs: Vec<PathVerb>,
    points: Vec<f32>,
    rule: WindingRule,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "paths store single precision coordinates"
)]
#[inline]
pub(crate) fn to_f32(p: Point) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}

impl Path {
    /// Create an empty path with the non-zero winding rule.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Create an empty path with the given winding rule.
    #[inline]
    pub fn with_winding_rule(rule: WindingRule) -> Path {
        Path {
            rule,
            ..Path::default()
        }
    }

    /// Create an empty path with room for `capacity` commands.
    pub fn with_capacity(rule: WindingRule, capacity: usize) -> Path {
        Path {
            verbs: Vec::with_capacity(capacity),
            points: Vec::with_capacity(capacity * 2),
            rule,
        }
    }

    /// Create a path tracing the outline of a shape.
    ///
    /// The path takes the shape's winding rule.
    pub fn from_shape<S: Shape + ?Sized>(shape: &S) -> Path {
        let mut path = Path::new();
        path.set_shape(shape, None);
        path
    }

    /// The winding rule.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.rule
    }

    /// Set the winding rule.
    #[inline]
    pub fn set_winding_rule(&mut self, rule: WindingRule) {
        self.rule = rule;
    }

    /// The command buffer.
    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// The coordinate buffer, as `x, y` pairs.
    #[inline]
    pub fn points(&self) -> &[f32] {
        &self.points
    }

    /// The number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Whether the path has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Remove all commands, keeping the allocated buffers.
    pub fn reset(&mut self) {
        self.verbs.clear();
        self.points.clear();
    }

    fn push_point(&mut self, p: Point) {
        self.points.extend(to_f32(p));
    }

    fn last_pair(&self) -> Option<[f32; 2]> {
        match *self.points.as_slice() {
            [.., x, y] => Some([x, y]),
            _ => None,
        }
    }

    /// Append an element.
    ///
    /// A move-to directly after another move-to replaces it. A close
    /// directly after another close does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingMoveTo`] if the path is empty and `el` is
    /// not a move-to.
    pub fn try_push(&mut self, el: PathEl) -> Result<(), Error> {
        match el {
            PathEl::MoveTo(p) => {
                if self.verbs.last() == Some(&PathVerb::Move) {
                    if let [.., x, y] = self.points.as_mut_slice() {
                        [*x, *y] = to_f32(p);
                    }
                } else {
                    self.verbs.push(PathVerb::Move);
                    self.push_point(p);
                }
            }
            PathEl::ClosePath => {
                if self.verbs.last() != Some(&PathVerb::Close) {
                    if self.is_empty() {
                        return Err(Error::MissingMoveTo);
                    }
                    self.verbs.push(PathVerb::Close);
                }
            }
            PathEl::LineTo(p) => {
                if self.is_empty() {
                    return Err(Error::MissingMoveTo);
                }
                self.verbs.push(PathVerb::Line);
                self.push_point(p);
            }
            PathEl::QuadTo(p1, p2) => {
                if self.is_empty() {
                    return Err(Error::MissingMoveTo);
                }
                self.verbs.push(PathVerb::Quad);
                self.push_point(p1);
                self.push_point(p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                if self.is_empty() {
                    return Err(Error::MissingMoveTo);
                }
                self.verbs.push(PathVerb::Cubic);
                self.push_point(p1);
                self.push_point(p2);
                self.push_point(p3);
            }
        }
        Ok(())
    }

    /// Append an element.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty and `el` is not a move-to.
    pub fn push(&mut self, el: PathEl) {
        if let Err(e) = self.try_push(el) {
            panic!("{e}");
        }
    }

    /// Start a new subpath at `p`.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Draw a line to `p`.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Draw a quadratic Bézier through control point `p1` to `p2`.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn quad_to<P: Into<Point>>(&mut self, p1: P, p2: P) {
        self.push(PathEl::QuadTo(p1.into(), p2.into()));
    }

    /// Draw a cubic Bézier through control points `p1` and `p2` to `p3`.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Close the current subpath.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Append the elements of another outline.
    ///
    /// With `connect`, the first move-to of `elements` becomes a line-to
    /// from the current point, and is dropped altogether if it lands on
    /// the last point of an open subpath. An empty path never connects.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty and `elements` does not start with a
    /// move-to.
    pub fn append(&mut self, elements: impl IntoIterator<Item = PathEl>, connect: bool) {
        let mut connect = connect;
        for el in elements {
            match el {
                PathEl::MoveTo(p) if connect && !self.is_empty() => {
                    let open = self.verbs.last() != Some(&PathVerb::Close);
                    if !(open && self.last_pair() == Some(to_f32(p))) {
                        self.line_to(p);
                    }
                }
                _ => self.push(el),
            }
            connect = false;
        }
    }

    /// The point the next segment will start from.
    ///
    /// After a close this is the start of the closed subpath. `None` for
    /// an empty path.
    pub fn current_point(&self) -> Option<Point> {
        let mut end = self.points.len();
        for verb in self.verbs.iter().rev() {
            if *verb == PathVerb::Close {
                continue;
            }
            if *verb == PathVerb::Move || self.verbs.last() != Some(&PathVerb::Close) {
                return pair_at(&self.points, end);
            }
            end -= 2 * verb.point_count();
        }
        None
    }

    /// Iterate over the elements of the path.
    #[inline]
    pub fn iter(&self) -> PathIter<'_> {
        PathIter::new(self, None)
    }

    /// Iterate over the elements of the path, mapping every point through
    /// `transform`.
    #[inline]
    pub fn iter_transformed<'a>(&'a self, transform: &'a dyn PointTransform) -> PathIter<'a> {
        PathIter::new(self, Some(transform))
    }

    /// The smallest rectangle containing every point of the path,
    /// control points included.
    ///
    /// An empty path has zero bounds at the origin.
    pub fn bounds_2d(&self) -> Rect {
        let mut pairs = self.points.chunks_exact(2);
        let Some(first) = pairs.next() else {
            return Rect::ZERO;
        };
        let (mut x0, mut y0) = (first[0], first[1]);
        let (mut x1, mut y1) = (x0, y0);
        for pair in pairs {
            x0 = x0.min(pair[0]);
            x1 = x1.max(pair[0]);
            y0 = y0.min(pair[1]);
            y1 = y1.max(pair[1]);
        }
        Rect::new(
            f64::from(x0),
            f64::from(y0),
            f64::from(x1 - x0),
            f64::from(y1 - y0),
        )
    }

    /// The smallest integer rectangle containing [`bounds_2d`](Self::bounds_2d).
    #[inline]
    pub fn bounds(&self) -> IntRect {
        self.bounds_2d().expand_to_int()
    }

    /// Whether `pt` is inside the path under its winding rule.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.rule.is_inside(cross_shape(self, pt))
    }

    /// Whether the path traces an axis-aligned rectangle.
    ///
    /// Coordinates are truncated to integers. Only moves, lines and closes
    /// are allowed; every line must be horizontal or vertical, every point
    /// must lie on the edge of the integer bounds, and all four corners
    /// must be visited.
    pub fn is_rectangle(&self) -> bool {
        let bounds = self.bounds();
        let (bx0, by0, bx1, by1) = (bounds.x, bounds.y, bounds.x1(), bounds.y1());
        let mut corners = [false; 4];
        let (mut prev_x, mut prev_y) = (0, 0);
        for el in self.iter() {
            let p = match el {
                PathEl::MoveTo(p) => p,
                PathEl::LineTo(p) => {
                    let (x, y) = (crate::rect::to_i32(p.x), crate::rect::to_i32(p.y));
                    if x != prev_x && y != prev_y {
                        return false;
                    }
                    p
                }
                PathEl::ClosePath => continue,
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => return false,
            };
            let (x, y) = (crate::rect::to_i32(p.x), crate::rect::to_i32(p.y));
            if x != bx0 && y != by0 && x != bx1 && y != by1 {
                return false;
            }
            corners[0] |= x == bx0 && y == by0;
            corners[1] |= x == bx1 && y == by0;
            corners[2] |= x == bx1 && y == by1;
            corners[3] |= x == bx0 && y == by1;
            (prev_x, prev_y) = (x, y);
        }
        corners.iter().all(|c| *c)
    }

    /// Whether the path is a single closed polygon.
    ///
    /// Rectangles are polygons. Otherwise the path must have exactly one
    /// subpath, no curves, and either end with a close or return to its
    /// first point. An empty path is not a polygon.
    pub fn is_polygon(&self) -> bool {
        if self.is_rectangle() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let mut moves = 0;
        for verb in &self.verbs {
            match verb {
                PathVerb::Move => moves += 1,
                PathVerb::Quad | PathVerb::Cubic => return false,
                PathVerb::Line | PathVerb::Close => {}
            }
        }
        if moves != 1 {
            return false;
        }
        let last = self.points.len().saturating_sub(2);
        self.verbs.last() == Some(&PathVerb::Close) || self.points.get(..2) == self.points.get(last..)
    }

    /// Replace this path with a copy of `other`, optionally transformed.
    pub fn set_path(&mut self, other: &Path, transform: Option<&dyn PointTransform>) {
        self.verbs.clone_from(&other.verbs);
        self.points.clone_from(&other.points);
        self.rule = other.rule;
        if let Some(t) = transform {
            self.transform(t);
        }
    }

    /// Replace this path with the outline of `rect`, optionally transformed.
    ///
    /// The outline is a move-to the origin, three lines and a close. The
    /// winding rule is kept.
    pub fn set_rect(&mut self, rect: &IntRect, transform: Option<&dyn PointTransform>) {
        self.reset();
        let map = |p: Point| transform.map_or(p, |t| t.transform_point(p));
        let r = Rect::from(*rect);
        self.move_to(map(Point::new(r.x0(), r.y0())));
        self.line_to(map(Point::new(r.x1(), r.y0())));
        self.line_to(map(Point::new(r.x1(), r.y1())));
        self.line_to(map(Point::new(r.x0(), r.y1())));
        self.close_path();
    }

    /// Replace this path with the outline of `shape`, optionally transformed.
    ///
    /// The path takes the shape's winding rule.
    pub fn set_shape<S: Shape + ?Sized>(
        &mut self,
        shape: &S,
        transform: Option<&dyn PointTransform>,
    ) {
        self.reset();
        self.rule = shape.winding_rule();
        self.append(shape.path_elements(), false);
        if let Some(t) = transform {
            self.transform(t);
        }
    }

    /// Map every point of the path through `transform`.
    ///
    /// Does nothing if the transform reports itself as the identity.
    pub fn transform<T: PointTransform + ?Sized>(&mut self, transform: &T) {
        if transform.is_identity() {
            return;
        }
        for pair in self.points.chunks_exact_mut(2) {
            let p = transform.transform_point(Point::from((f64::from(pair[0]), f64::from(pair[1]))));
            let [x, y] = to_f32(p);
            pair[0] = x;
            pair[1] = y;
        }
    }

    /// A copy of this path with every point mapped through `transform`.
    #[must_use]
    pub fn transformed<T: PointTransform + ?Sized>(&self, transform: &T) -> Path {
        let mut path = self.clone();
        path.transform(transform);
        path
    }

    /// Whether this path describes the same outline as `shape`, after
    /// mapping `shape` through `transform`.
    ///
    /// Integer rectangles compare against this path's integer bounds.
    /// Other shapes compare command for command and coordinate for
    /// coordinate; the winding rule is ignored.
    pub fn equals_shape<S: Shape + ?Sized>(
        &self,
        shape: &S,
        transform: Option<&dyn PointTransform>,
    ) -> bool {
        if let Some(t) = transform.filter(|t| !t.is_identity()) {
            let mut other = Path::new();
            other.set_shape(shape, Some(t));
            return self.equals_shape(&other, None);
        }
        if let Some(r) = shape.as_int_rect() {
            return self.bounds() == r;
        }
        let mut other = Path::new();
        other.append(shape.path_elements(), false);
        self.verbs == other.verbs && self.points == other.points
    }
}

fn pair_at(points: &[f32], end: usize) -> Option<Point> {
    let pair = points.get(end.checked_sub(2)?..end)?;
    Some(Point::from((f64::from(pair[0]), f64::from(pair[1]))))
}

impl Shape for Path {
    type PathElementsIter<'iter> = PathIter<'iter>;

    fn path_elements(&self) -> PathIter<'_> {
        self.iter()
    }

    fn winding_rule(&self) -> WindingRule {
        self.rule
    }

    fn bounds(&self) -> IntRect {
        Path::bounds(self)
    }

    fn bounds_2d(&self) -> Rect {
        Path::bounds_2d(self)
    }

    fn contains(&self, pt: Point) -> bool {
        Path::contains(self, pt)
    }

    fn is_rectangle(&self) -> bool {
        Path::is_rectangle(self)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathEl;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> PathIter<'a> {
        self.iter()
    }
}

impl FromIterator<PathEl> for Path {
    /// Collect elements into a path.
    ///
    /// # Panics
    ///
    /// Panics if the first element is not a move-to.
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        let mut path = Path::new();
        path.extend(iter);
        path
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        for el in iter {
            self.push(el);
        }
    }
}

impl fmt::Display for Path {
    /// Renders the commands in SVG path syntax, such as `M0 0 L10 0 Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pts = self.points.iter();
        for (i, verb) in self.verbs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let cmd = match verb {
                PathVerb::Move => "M",
                PathVerb::Line => "L",
                PathVerb::Quad => "Q",
                PathVerb::Cubic => "C",
                PathVerb::Close => "Z",
            };
            write!(f, "{cmd}")?;
            for j in 0..verb.point_count() * 2 {
                if j > 0 {
                    write!(f, " ")?;
                }
                if let Some(v) = pts.next() {
                    write!(f, "{v}")?;
                }
            }
        }
        Ok(())
    }
}

/// A cursor over the elements of a [`Path`].
///
/// The iterator borrows the path, so the path cannot change while it is
/// being walked. To restart, ask the path for a new iterator.
#[derive(Clone)]
pub struct PathIter<'a> {
    path: &'a Path,
    verb_ix: usize,
    point_ix: usize,
    transform: Option<&'a dyn PointTransform>,
}

impl<'a> PathIter<'a> {
    fn new(path: &'a Path, transform: Option<&'a dyn PointTransform>) -> Self {
        PathIter {
            path,
            verb_ix: 0,
            point_ix: 0,
            transform: transform.filter(|t| !t.is_identity()),
        }
    }

    /// The winding rule of the path being iterated.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.path.rule
    }

    /// Whether every element has been visited.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.verb_ix >= self.path.verbs.len()
    }

    /// The element under the cursor, without advancing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IteratorDone`] once every element has been visited.
    pub fn current_segment(&self) -> Result<PathEl, Error> {
        let verb = *self.path.verbs.get(self.verb_ix).ok_or(Error::IteratorDone)?;
        let point = |i: usize| {
            let start = self.point_ix + 2 * i;
            let p = pair_at(&self.path.points, start + 2).unwrap_or_default();
            self.transform.map_or(p, |t| t.transform_point(p))
        };
        Ok(match verb {
            PathVerb::Move => PathEl::MoveTo(point(0)),
            PathVerb::Line => PathEl::LineTo(point(0)),
            PathVerb::Quad => PathEl::QuadTo(point(0), point(1)),
            PathVerb::Cubic => PathEl::CurveTo(point(0), point(1), point(2)),
            PathVerb::Close => PathEl::ClosePath,
        })
    }

    /// Move the cursor to the next element.
    pub fn advance(&mut self) {
        if let Some(verb) = self.path.verbs.get(self.verb_ix) {
            self.point_ix += 2 * verb.point_count();
            self.verb_ix += 1;
        }
    }
}

impl Iterator for PathIter<'_> {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let el = self.current_segment().ok()?;
        self.advance();
        Some(el)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.path.verbs.len().saturating_sub(self.verb_ix);
        (n, Some(n))
    }
}

impl ExactSizeIterator for PathIter<'_> {}

impl fmt::Debug for PathIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathIter")
            .field("path", &self.path)
            .field("verb_ix", &self.verb_ix)
            .field("point_ix", &self.point_ix)
            .field("transformed", &self.transform.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TranslateScale;
    use crate::Vec2;
    use alloc::format;
    use alloc::vec;

    fn triangle() -> Path {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((5.0, 8.0));
        path.close_path();
        path
    }

    #[test]
    fn move_to_after_move_to_overwrites() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.move_to((2.0, 3.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path.points(), &[2.0, 3.0]);
        path.line_to((4.0, 4.0));
        path.move_to((5.0, 5.0));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn segment_before_move_to_is_rejected() {
        let mut path = Path::new();
        assert_eq!(
            path.try_push(PathEl::LineTo(Point::new(1.0, 1.0))),
            Err(Error::MissingMoveTo)
        );
        assert_eq!(path.try_push(PathEl::ClosePath), Err(Error::MissingMoveTo));
        assert!(path.is_empty());
    }

    #[test]
    #[should_panic(expected = "first path element must be a move-to")]
    fn line_to_on_empty_path_panics() {
        let mut path = Path::new();
        path.line_to((1.0, 1.0));
    }

    #[test]
    fn close_path_is_idempotent() {
        let mut path = triangle();
        let len = path.len();
        path.close_path();
        assert_eq!(path.len(), len);
    }

    #[test]
    fn current_point() {
        let mut path = Path::new();
        assert_eq!(path.current_point(), None);
        path.move_to((1.0, 2.0));
        assert_eq!(path.current_point(), Some(Point::new(1.0, 2.0)));
        path.quad_to((3.0, 4.0), (5.0, 6.0));
        assert_eq!(path.current_point(), Some(Point::new(5.0, 6.0)));
        path.close_path();
        assert_eq!(path.current_point(), Some(Point::new(1.0, 2.0)));
        path.move_to((7.0, 7.0));
        path.line_to((8.0, 7.0));
        path.close_path();
        assert_eq!(path.current_point(), Some(Point::new(7.0, 7.0)));
    }

    #[test]
    fn append_connects() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((5.0, 0.0));
        let mut other = Path::new();
        other.move_to((5.0, 0.0));
        other.line_to((5.0, 5.0));
        path.append(other.iter(), true);
        assert_eq!(path.verbs(), &[PathVerb::Move, PathVerb::Line, PathVerb::Line]);

        let mut moved = Path::new();
        moved.move_to((9.0, 9.0));
        moved.line_to((9.0, 10.0));
        path.append(moved.iter(), true);
        assert_eq!(path.len(), 5);
        assert_eq!(path.verbs()[3], PathVerb::Line);

        path.append(moved.iter(), false);
        assert_eq!(path.verbs()[5], PathVerb::Move);

        let mut empty = Path::new();
        empty.append(moved.iter(), true);
        assert_eq!(empty.verbs()[0], PathVerb::Move);
    }

    #[test]
    fn bounds_round_trip() {
        let r = IntRect::new(3, -4, 10, 6);
        let path = Path::from_shape(&r);
        assert_eq!(path.bounds(), r);
        assert_eq!(path.bounds_2d(), Rect::from(r));
        assert_eq!(Path::new().bounds_2d(), Rect::ZERO);
    }

    #[test]
    fn bounds_include_control_points() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.quad_to((5.0, 10.0), (10.0, 0.0));
        assert_eq!(path.bounds_2d(), Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut frac = Path::new();
        frac.move_to((0.5, 0.25));
        frac.line_to((2.5, 1.75));
        assert_eq!(frac.bounds(), IntRect::new(0, 0, 3, 2));
    }

    #[test]
    fn rectangles_and_polygons() {
        let rect = Path::from_shape(&IntRect::new(0, 0, 10, 5));
        assert!(rect.is_rectangle());
        assert!(rect.is_polygon());

        let tri = triangle();
        assert!(!tri.is_rectangle());
        assert!(tri.is_polygon());

        let mut open = Path::new();
        open.move_to((0.0, 0.0));
        open.line_to((10.0, 0.0));
        open.line_to((5.0, 8.0));
        assert!(!open.is_polygon());
        open.line_to((0.0, 0.0));
        assert!(open.is_polygon());

        let mut two = triangle();
        two.move_to((20.0, 20.0));
        two.line_to((30.0, 20.0));
        two.line_to((25.0, 28.0));
        two.close_path();
        assert!(!two.is_polygon());

        let mut curved = Path::new();
        curved.move_to((0.0, 0.0));
        curved.quad_to((5.0, 5.0), (10.0, 0.0));
        curved.close_path();
        assert!(!curved.is_polygon());
        assert!(!curved.is_rectangle());

        assert!(!Path::new().is_polygon());
    }

    #[test]
    fn set_rect_with_transform() {
        let mut path = triangle();
        let shift = |p: Point| p + Vec2::new(1.0, 2.0);
        path.set_rect(&IntRect::new(0, 0, 4, 3), Some(&shift));
        assert_eq!(path.len(), 5);
        assert_eq!(path.bounds(), IntRect::new(1, 2, 4, 3));
        assert!(path.is_rectangle());
    }

    #[test]
    fn transform_and_identity() {
        let mut path = triangle();
        let before = path.clone();
        path.transform(&TranslateScale::IDENTITY);
        assert_eq!(path, before);
        let scaled = path.transformed(&TranslateScale::scale(2.0));
        assert_eq!(scaled.bounds(), IntRect::new(0, 0, 20, 16));
        let mut copy = Path::new();
        copy.set_path(&path, Some(&TranslateScale::translate(Vec2::new(0.0, 1.0))));
        assert_eq!(copy.bounds(), IntRect::new(0, 1, 10, 8));
    }

    #[test]
    fn equals_shape() {
        let r = IntRect::new(1, 1, 4, 4);
        let path = Path::from_shape(&r);
        assert!(path.equals_shape(&r, None));
        assert!(path.equals_shape(&path.clone(), None));
        assert!(!triangle().equals_shape(&path, None));
        let shifted = path.transformed(&TranslateScale::translate(Vec2::new(2.0, 0.0)));
        let shift = TranslateScale::translate(Vec2::new(2.0, 0.0));
        assert!(shifted.equals_shape(&path, Some(&shift)));
        assert!(!shifted.equals_shape(&path, None));
    }

    #[test]
    fn winding_rule_codes() {
        assert_eq!(WindingRule::try_from(0), Ok(WindingRule::EvenOdd));
        assert_eq!(WindingRule::try_from(1), Ok(WindingRule::NonZero));
        assert_eq!(WindingRule::try_from(2), Err(Error::InvalidWindingRule(2)));
        assert_eq!(i32::from(WindingRule::EvenOdd), 0);
        assert_eq!(Path::new().winding_rule(), WindingRule::NonZero);
    }

    #[test]
    fn iterator_cursor() {
        let path = triangle();
        let mut it = path.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.current_segment(), Ok(PathEl::MoveTo(Point::new(0.0, 0.0))));
        it.advance();
        assert_eq!(it.current_segment(), Ok(PathEl::LineTo(Point::new(10.0, 0.0))));
        assert_eq!(it.by_ref().count(), 3);
        assert!(it.is_done());
        assert_eq!(it.current_segment(), Err(Error::IteratorDone));
        assert_eq!(it.next(), None);
        assert_eq!(it.winding_rule(), WindingRule::NonZero);
    }

    #[test]
    fn transformed_iteration_is_lazy() {
        let path = triangle();
        let double = |p: Point| Point::new(p.x * 2.0, p.y * 2.0);
        let els: Vec<PathEl> = path.iter_transformed(&double).collect();
        assert_eq!(els[2], PathEl::LineTo(Point::new(10.0, 16.0)));
        assert_eq!(path.iter().nth(2), Some(PathEl::LineTo(Point::new(5.0, 8.0))));
    }

    #[test]
    fn collect_and_display() {
        let path: Path = vec![
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(10.0, 0.0)),
            PathEl::QuadTo(Point::new(15.0, 5.0), Point::new(10.0, 10.0)),
            PathEl::CurveTo(
                Point::new(5.0, 10.0),
                Point::new(0.0, 5.0),
                Point::new(0.5, 0.25),
            ),
            PathEl::ClosePath,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            format!("{path}"),
            "M0 0 L10 0 Q15 5 10 10 C5 10 0 5 0.5 0.25 Z"
        );
    }
}
