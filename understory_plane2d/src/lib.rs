// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_plane2d --heading-base-level=0

//! Understory Plane 2D: vectors and homogeneous 3x3 transforms.
//!
//! This crate provides the small value types used to map an unbounded "real"
//! coordinate plane onto a pixel canvas:
//! - [`Vector2d`]: an immutable 2D point/vector with the usual arithmetic,
//!   dot/cross products, normalization and 90° rotation.
//! - [`Matrix3x3`]: an immutable 3x3 matrix interpreted as a 2D affine map in
//!   homogeneous coordinates, with translate/scale/rotate builders (also about
//!   an arbitrary pivot), chained composition and cofactor inversion.
//!
//! Both types are `Copy` and compare structurally. Nothing here keeps state
//! between calls, so every function can be called from any thread.
//!
//! ## Composition order
//!
//! [`Matrix3x3::chain`] folds left to right starting from the identity, so the
//! rightmost matrix is applied to raw coordinates first:
//!
//! ```rust
//! use understory_plane2d::{Matrix3x3, Vector2d};
//!
//! // Real origin to the middle of an 800x600 canvas, 5 px per unit, y up.
//! let real_to_view = Matrix3x3::chain(&[
//!     Matrix3x3::translate(Vector2d::new(400.0, 300.0)),
//!     Matrix3x3::scale(5.0, -5.0),
//!     Matrix3x3::translate(Vector2d::new(-10.0, 0.0)),
//! ]);
//! assert_eq!(real_to_view * Vector2d::new(10.0, 0.0), Vector2d::new(400.0, 300.0));
//! assert_eq!(real_to_view * Vector2d::new(11.0, 1.0), Vector2d::new(405.0, 295.0));
//!
//! let view_to_real = real_to_view.invert().unwrap();
//! let back = view_to_real * Vector2d::new(405.0, 295.0);
//! assert!((back - Vector2d::new(11.0, 1.0)).length() < 1e-12);
//! ```
//!
//! ## Failure signals
//!
//! Inverting a singular matrix yields [`NotInvertible`] and normalizing a zero
//! vector yields [`DivideByZero`]. Neither is ever papered over with NaNs or a
//! silent identity.
//!
//! ## Kurbo interop
//!
//! [`Matrix3x3::as_coeffs`] uses the same coefficient order as
//! [`kurbo::Affine::new`], and conversions exist between [`Vector2d`] and
//! [`kurbo::Point`] / [`kurbo::Vec2`].
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod matrix;
mod vector;

pub use error::{DivideByZero, NotInvertible};
pub use matrix::Matrix3x3;
pub use vector::Vector2d;
