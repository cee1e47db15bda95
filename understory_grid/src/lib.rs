// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_grid --heading-base-level=0

//! Understory Grid: adaptive coordinate grids for 2D viewports.
//!
//! Given a real→view transform ([`Matrix3x3`](understory_plane2d::Matrix3x3)), a canvas size and a
//! [`GridConfig`], [`layout_grid`] picks a power-of-ten minor step that keeps
//! roughly 10–100 minor lines across the smaller visible dimension, and
//! describes every grid line and axis label in view (pixel) coordinates.
//!
//! Nothing is drawn here. The resulting [`GridLayout`] is meant to be fed
//! straight into move-to/line-to/fill-text style calls, or turned into
//! [`kurbo::BezPath`]s with [`GridLayout::path`].
//!
//! ```rust
//! use kurbo::Size;
//! use understory_grid::{GridConfig, LineKind, layout_grid};
//! use understory_plane2d::{Matrix3x3, Vector2d};
//!
//! // 800x600 canvas, real origin in the middle, 5 px per unit, y up.
//! let real_to_view = Matrix3x3::chain(&[
//!     Matrix3x3::translate(Vector2d::new(400.0, 300.0)),
//!     Matrix3x3::scale(5.0, -5.0),
//! ]);
//! let grid = layout_grid(&real_to_view, Size::new(800.0, 600.0), &GridConfig::default())
//!     .unwrap();
//!
//! // About 114 units are visible vertically, times 1.3: minor step 10.
//! assert_eq!(grid.step.exponent(), 1);
//! assert_eq!(grid.step.decimals(), 0);
//! // The origin is visible, so both axis lines are emitted.
//! assert_eq!(grid.lines_of(LineKind::Axis).count(), 2);
//! ```
//!
//! The step algorithm on its own is available as [`GridStep::for_extent`]
//! and [`step_values`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod layout;
mod step;

pub use config::GridConfig;
pub use error::GridError;
pub use layout::{Axis, GridLabel, GridLayout, GridLine, LabelEdge, LineKind, layout_grid};
pub use step::{GridStep, is_major, step_values};
