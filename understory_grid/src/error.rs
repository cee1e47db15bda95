// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_plane2d::NotInvertible;

/// Reasons a grid layout can be rejected.
///
/// None of these are transient: they point at a degenerate viewport state or
/// configuration, and the same inputs will fail again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// The real→view transform could not be inverted.
    NotInvertible(NotInvertible),
    /// The canvas has a non-positive or non-finite dimension.
    DegenerateCanvas {
        /// Canvas width in pixels.
        width: f64,
        /// Canvas height in pixels.
        height: f64,
    },
    /// The visible real-world extent is empty, negative or non-finite.
    ///
    /// Happens when the canvas is no larger than twice the margin, or when
    /// the transform flips the expected corner ordering.
    DegenerateExtent {
        /// Visible extent along x, in real units.
        width: f64,
        /// Visible extent along y, in real units.
        height: f64,
    },
    /// A single extent handed to step selection is not a positive finite
    /// number.
    InvalidExtent(f64),
    /// The size factor is not a positive finite number, or scales a valid
    /// extent past the finite range.
    InvalidSizeFactor(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInvertible(err) => write!(f, "real to view transform: {err}"),
            Self::DegenerateCanvas { width, height } => {
                write!(f, "degenerate canvas size {width}x{height}")
            }
            Self::DegenerateExtent { width, height } => {
                write!(f, "degenerate visible extent {width}x{height}")
            }
            Self::InvalidExtent(extent) => write!(f, "invalid grid extent {extent}"),
            Self::InvalidSizeFactor(factor) => write!(f, "invalid grid size factor {factor}"),
        }
    }
}

impl core::error::Error for GridError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NotInvertible(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NotInvertible> for GridError {
    fn from(err: NotInvertible) -> Self {
        Self::NotInvertible(err)
    }
}
