// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use kurbo::Affine;

use crate::{NotInvertible, Vector2d};

/// An immutable 3x3 matrix acting on 2D points in homogeneous coordinates.
///
/// Storage is row-major. The bottom row is not forced to `[0, 0, 1]`, but
/// every builder in this type produces affine matrices and the products of
/// affine matrices stay affine.
///
/// Multiplication is not commutative. `a * b` applies `b` first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3x3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Creates a matrix from its rows.
    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of this matrix.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Returns the identity matrix.
    #[inline]
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Standard matrix product `a * b` (row of `a` times column of `b`).
    #[must_use]
    pub fn multiply(a: Self, b: Self) -> Self {
        let (a, b) = (&a.rows, &b.rows);
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c] + a[r][2] * b[2][c];
            }
        }
        Self::from_rows(out)
    }

    /// Translation moving the origin to `v`.
    #[inline]
    #[must_use]
    pub const fn translate(v: Vector2d) -> Self {
        Self::from_rows([[1.0, 0.0, v.x], [0.0, 1.0, v.y], [0.0, 0.0, 1.0]])
    }

    /// Independent axis scaling about the origin.
    ///
    /// A zero factor produces a singular matrix.
    #[inline]
    #[must_use]
    pub const fn scale(x_factor: f64, y_factor: f64) -> Self {
        Self::from_rows([[x_factor, 0.0, 0.0], [0.0, y_factor, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation by `angle` radians about the origin.
    #[must_use]
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = (libm::sin(angle), libm::cos(angle));
        Self::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Left fold of `chain` by multiplication, starting at the identity.
    ///
    /// `chain(&[a, b, c])` is `((I * a) * b) * c`, so `c` is applied to a
    /// point first and `a` last.
    #[must_use]
    pub fn chain(chain: &[Self]) -> Self {
        chain
            .iter()
            .fold(Self::IDENTITY, |acc, m| Self::multiply(acc, *m))
    }

    /// Scales about `center` instead of the origin.
    #[must_use]
    pub fn scale_at(x_factor: f64, y_factor: f64, center: Vector2d) -> Self {
        Self::chain(&[
            Self::translate(center),
            Self::scale(x_factor, y_factor),
            Self::translate(center.neg()),
        ])
    }

    /// Rotates about `center` instead of the origin.
    #[must_use]
    pub fn rotate_at(angle: f64, center: Vector2d) -> Self {
        Self::chain(&[
            Self::translate(center),
            Self::rotate(angle),
            Self::translate(center.neg()),
        ])
    }

    /// Applies this matrix to a point with an implicit `w = 1`.
    ///
    /// The bottom row is ignored, there is no perspective divide.
    #[inline]
    #[must_use]
    pub fn transform(&self, point: Vector2d) -> Vector2d {
        let m = &self.rows;
        Vector2d::new(
            point.x * m[0][0] + point.y * m[0][1] + m[0][2],
            point.x * m[1][0] + point.y * m[1][1] + m[1][2],
        )
    }

    /// Determinant by cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let v = &self.rows;
        v[0][0] * (v[1][1] * v[2][2] - v[2][1] * v[1][2])
            - v[0][1] * (v[1][0] * v[2][2] - v[2][0] * v[1][2])
            + v[0][2] * (v[1][0] * v[2][1] - v[2][0] * v[1][1])
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let v = &self.rows;
        Self::from_rows([
            [v[0][0], v[1][0], v[2][0]],
            [v[0][1], v[1][1], v[2][1]],
            [v[0][2], v[1][2], v[2][2]],
        ])
    }

    fn cofactor(&self) -> Self {
        let v = &self.rows;
        Self::from_rows([
            [
                v[1][1] * v[2][2] - v[2][1] * v[1][2],
                -(v[1][0] * v[2][2] - v[2][0] * v[1][2]),
                v[1][0] * v[2][1] - v[2][0] * v[1][1],
            ],
            [
                -(v[0][1] * v[2][2] - v[2][1] * v[0][2]),
                v[0][0] * v[2][2] - v[2][0] * v[0][2],
                -(v[0][0] * v[2][1] - v[2][0] * v[0][1]),
            ],
            [
                v[0][1] * v[1][2] - v[1][1] * v[0][2],
                -(v[0][0] * v[1][2] - v[1][0] * v[0][2]),
                v[0][0] * v[1][1] - v[1][0] * v[0][1],
            ],
        ])
    }

    /// Inverse matrix: the adjugate divided by the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the determinant is exactly zero, or is
    /// not finite because the entries overflowed. No tolerance is applied,
    /// so nearly singular matrices still invert.
    pub fn invert(&self) -> Result<Self, NotInvertible> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(NotInvertible { determinant: det });
        }
        let mut rows = self.cofactor().transpose().rows;
        for cell in rows.iter_mut().flatten() {
            *cell /= det;
        }
        Ok(Self::from_rows(rows))
    }

    /// The six affine coefficients `[m00, m10, m01, m11, m02, m12]`.
    ///
    /// This is the column-major order used by 2D drawing APIs (`setTransform`
    /// style) and by [`kurbo::Affine::new`].
    #[inline]
    #[must_use]
    pub const fn as_coeffs(&self) -> [f64; 6] {
        let m = &self.rows;
        [m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2]]
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::multiply(self, rhs)
    }
}

impl Mul<Vector2d> for Matrix3x3 {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: Vector2d) -> Vector2d {
        self.transform(rhs)
    }
}

impl From<Matrix3x3> for Affine {
    /// Drops the bottom row, which is `[0, 0, 1]` for affine matrices.
    fn from(m: Matrix3x3) -> Self {
        Self::new(m.as_coeffs())
    }
}

impl From<Affine> for Matrix3x3 {
    fn from(a: Affine) -> Self {
        let [m00, m10, m01, m11, m02, m12] = a.as_coeffs();
        Self::from_rows([[m00, m01, m02], [m10, m11, m12], [0.0, 0.0, 1.0]])
    }
}
