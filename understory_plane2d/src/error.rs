// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when inverting a matrix whose determinant is exactly zero
/// or not finite.
///
/// This is a property of the input, so retrying the same inversion will fail
/// again. Callers holding viewport state should treat it as a sign that the
/// state is degenerate (for example a zero or overflowing scale factor) and
/// restore it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotInvertible {
    /// The determinant that was computed: `0.0` (possibly `-0.0`), an
    /// infinity or NaN.
    pub determinant: f64,
}

impl fmt::Display for NotInvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix is not invertible (determinant {})",
            self.determinant
        )
    }
}

impl core::error::Error for NotInvertible {}

/// Error returned when normalizing a vector of exactly zero length.
///
/// Callers are expected to check [`Vector2d::is_zero`](crate::Vector2d::is_zero)
/// before normalizing; hitting this error is a programming error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tried to normalize a zero-length vector")
    }
}

impl core::error::Error for DivideByZero {}
