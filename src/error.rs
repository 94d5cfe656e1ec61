// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for fallible path and shape operations.

use thiserror::Error;

/// Errors reported by path construction, iteration and clipping.
///
/// Numeric degeneracies (vanishing leading coefficients, near-duplicate
/// roots, tangent crossings) are never errors; they are resolved with the
/// tolerances in [`common`](crate::common).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A raw winding rule code is neither even-odd nor non-zero.
    #[error("invalid winding rule code {0}")]
    InvalidWindingRule(i32),

    /// A segment or close was added before any move-to.
    #[error("first path element must be a move-to")]
    MissingMoveTo,

    /// The clip target is not a rectangle.
    #[error("intersection only supports rectangle shapes")]
    UnsupportedShape,

    /// A curve was built from a number of control points other than 2, 3 or 4.
    #[error("unsupported curve with {0} control points")]
    UnsupportedDegree(usize),

    /// A path iterator was read past its last element.
    #[error("path iterator is exhausted")]
    IteratorDone,
}
