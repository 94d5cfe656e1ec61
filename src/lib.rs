// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D vector paths with winding containment and exact rectangle clipping.
//!
//! Cutline represents paths built from lines, quadratic and cubic Béziers,
//! answers point-in-shape queries under a [`WindingRule`], and intersects
//! arbitrary paths with axis-aligned rectangles. The rectangle clip is
//! exact: curves are cut where they cross the rectangle's edges before
//! anything is clamped.
//!
//! # Examples
//!
//! Containment and bounds:
//!
//! ```
//! use cutline::{IntRect, Path, Point, Shape};
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.curve_to((3.0, 10.0), (7.0, 10.0), (10.0, 0.0));
//! path.close_path();
//!
//! assert!(path.contains(Point::new(5.0, 5.0)));
//! assert!(!path.contains(Point::new(5.0, 9.0)));
//! assert_eq!(path.bounds(), IntRect::new(0, 0, 10, 10));
//! ```
//!
//! Clipping to a rectangle:
//!
//! ```
//! use cutline::{IntRect, Path};
//!
//! let mut path = Path::from_shape(&IntRect::new(0, 0, 10, 10));
//! assert!(path.intersect(&IntRect::new(5, 5, 10, 10)));
//! assert_eq!(path.bounds(), IntRect::new(5, 5, 5, 5));
//! ```
//!
//! The root solvers are available on their own:
//!
//! ```
//! use cutline::common::solve_cubic;
//!
//! let mut roots = solve_cubic(-6.0, 11.0, -6.0, 1.0);
//! roots.sort_by(f64::total_cmp);
//! assert_eq!(roots.len(), 3);
//! assert!((roots[2] - 3.0).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless. [`pool`] needs `std`.
//!
//! `serde`, `schemars` and `mint` add the matching trait implementations
//! to the value types.
//!
//! [`libm`]: https://docs.rs/libm

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cutline requires either the `std` or `libm` feature");

extern crate alloc;

mod arc;
pub mod clip;
pub mod common;
pub mod crossing;
mod cubicbez;
mod error;
mod int_rect;
mod line;
mod param_curve;
mod path;
mod pathseg;
mod point;
#[cfg(feature = "std")]
pub mod pool;
mod quadbez;
mod rect;
pub mod segment;
mod shape;
mod size;
mod transform;
mod vec2;

pub use crate::arc::*;
pub use crate::clip::ClipResult;
pub use crate::crossing::StripeCrossing;
pub use crate::cubicbez::*;
pub use crate::error::Error;
pub use crate::int_rect::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::pathseg::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::rect::*;
pub use crate::shape::*;
pub use crate::size::*;
pub use crate::transform::*;
pub use crate::vec2::*;
