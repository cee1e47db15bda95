// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view2d --heading-base-level=0

//! Understory View 2D: a pan/zoom viewport over an unbounded real plane.
//!
//! This crate provides a small, headless model of a canvas looking at a
//! "real world" plane. It focuses on:
//! - Viewport state: the real point shown in the middle of the canvas and the
//!   number of pixels per real unit.
//! - The real→view transform (and its inverse) as a [`Matrix3x3`], with the
//!   view y axis pointing down and the real y axis pointing up.
//! - Zooming about a pivot and panning by a pixel delta, both expressed with
//!   the transform algebra of [`understory_plane2d`].
//! - Laying out an adaptive coordinate grid via [`understory_grid`].
//!
//! It does **not** own a drawing surface or event loop. Callers are expected
//! to:
//! - Pass the canvas size in and keep it current with
//!   [`Viewport2D::set_view_size`].
//! - Translate their own pointer/wheel events into
//!   [`Viewport2D::zoom_at`], [`Viewport2D::wheel_zoom`] and
//!   [`Viewport2D::pan_by_view`].
//! - Draw the returned [`GridLayout`] and their own geometry, mapping real
//!   coordinates through [`Viewport2D::real_to_view`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_plane2d::Vector2d;
//! use understory_view2d::Viewport2D;
//!
//! let mut view = Viewport2D::new(Size::new(800.0, 600.0));
//! assert_eq!(view.real_to_view_point(Vector2d::ZERO), Vector2d::new(400.0, 300.0));
//!
//! // Drag the content 50 px to the right.
//! view.pan_by_view(Vector2d::new(50.0, 0.0)).unwrap();
//! assert_eq!(view.real_center(), Vector2d::new(-10.0, 0.0));
//!
//! // Zoom in one wheel tick about the pointer.
//! view.wheel_zoom(Vector2d::new(100.0, 100.0), -1.0).unwrap();
//! assert!(view.pixels_per_unit() > 5.0);
//!
//! let grid = view.layout_grid().unwrap();
//! assert!(!grid.lines.is_empty());
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform; the vertical flip is the only difference between the
//!   axes.
//! - Pan and zoom invert the current transform and fail with
//!   [`NotInvertible`] instead of producing NaNs. Pixels per unit is clamped
//!   into [`Viewport2D::set_pixels_per_unit_limits`], so the transform stays
//!   invertible and finite however far the user zooms.
//! - A unit multiplier rescales what one real unit means on screen without
//!   touching stored coordinates; grid labels count displayed units (stored
//!   units divided by the multiplier).
//!
//! This crate is `no_std`.

#![no_std]

mod viewport2d;

pub use viewport2d::{Viewport2D, Viewport2DDebugInfo};

pub use understory_grid::{GridConfig, GridError, GridLayout};
pub use understory_plane2d::{Matrix3x3, NotInvertible, Vector2d};
