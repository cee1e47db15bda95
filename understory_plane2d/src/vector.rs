// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Mul, Neg, Sub};

use kurbo::{Point, Vec2};

use crate::DivideByZero;

/// An immutable 2D point or vector.
///
/// Equality is exact component equality, without any tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2d {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
}

impl Vector2d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[inline]
    #[must_use]
    pub fn plus(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Component-wise difference.
    #[inline]
    #[must_use]
    pub fn minus(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// 2D cross product, the z component of the 3D cross product.
    ///
    /// A positive result means the rotation from `self` to `v` is
    /// counter-clockwise in a y-up frame. In a y-down frame such as view
    /// space the sign reads the other way around.
    #[inline]
    #[must_use]
    pub fn cross(self, v: Self) -> f64 {
        self.x * v.y - self.y * v.x
    }

    /// Squared Euclidean length.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        libm::sqrt(self.length_squared())
    }

    /// Squared distance between two points.
    #[inline]
    #[must_use]
    pub fn dist_squared(p1: Self, p2: Self) -> f64 {
        p2.minus(p1).length_squared()
    }

    /// Distance between two points.
    #[inline]
    #[must_use]
    pub fn dist(p1: Self, p2: Self) -> f64 {
        libm::sqrt(Self::dist_squared(p1, p2))
    }

    /// Uniform scale by `s`.
    #[inline]
    #[must_use]
    pub fn multiply(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Component-wise negation.
    #[allow(
        clippy::should_implement_trait,
        reason = "`Neg` is implemented as well; this keeps the named vector operations complete"
    )]
    #[inline]
    #[must_use]
    pub fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns the unit vector pointing the same way as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZero`] if the length is exactly zero.
    pub fn normalize(self) -> Result<Self, DivideByZero> {
        let length = self.length();
        if length == 0.0 {
            return Err(DivideByZero);
        }
        Ok(self.multiply(1.0 / length))
    }

    /// Rotates by 90° in a y-up frame.
    ///
    /// Clockwise maps `(x, y)` to `(y, -x)`, counter-clockwise maps it to
    /// `(-y, x)`.
    #[inline]
    #[must_use]
    pub fn rot90(self, clockwise: bool) -> Self {
        if clockwise {
            Self::new(self.y, -self.x)
        } else {
            Self::new(-self.y, self.x)
        }
    }

    /// Linear interpolation `start + (end - start) * t`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    #[must_use]
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        start.plus(end.minus(start).multiply(t))
    }
}

impl Add for Vector2d {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Neg for Vector2d {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::neg(self)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl From<(f64, f64)> for Vector2d {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector2d {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector2d {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2d> for Point {
    #[inline]
    fn from(v: Vector2d) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2d> for Vec2 {
    #[inline]
    fn from(v: Vector2d) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector2d;
    use crate::DivideByZero;

    #[test]
    fn length_of_three_four_is_five() {
        let v = Vector2d::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vector2d::dist(Vector2d::new(1.0, 1.0), Vector2d::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn normalize_zero_fails() {
        assert_eq!(Vector2d::ZERO.normalize(), Err(DivideByZero));
        assert!(Vector2d::ZERO.is_zero());
        // Negative zero is still zero.
        assert!(Vector2d::new(-0.0, 0.0).is_zero());
    }

    #[test]
    fn normalize_keeps_direction() {
        let n = Vector2d::new(0.0, -8.0).normalize().unwrap();
        assert_eq!(n, Vector2d::new(0.0, -1.0));
        let d = Vector2d::new(3.0, 4.0).normalize().unwrap();
        assert!((d.length() - 1.0).abs() < 1e-15);
        assert!(d.cross(Vector2d::new(3.0, 4.0)).abs() < 1e-15);
    }

    #[test]
    fn cross_sign_is_counter_clockwise_positive() {
        let a = Vector2d::new(1.0, 0.0);
        let b = Vector2d::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.dot(b), 0.0);
    }

    #[test]
    fn rot90_directions() {
        let v = Vector2d::new(1.0, 2.0);
        assert_eq!(v.rot90(true), Vector2d::new(2.0, -1.0));
        assert_eq!(v.rot90(false), Vector2d::new(-2.0, 1.0));
        // Counter-clockwise rotation agrees with the cross product sign.
        assert!(v.cross(v.rot90(false)) > 0.0);
        assert!(v.cross(v.rot90(true)) < 0.0);
    }

    #[test]
    fn lerp_extrapolates() {
        let s = Vector2d::new(0.0, 0.0);
        let e = Vector2d::new(10.0, -4.0);
        assert_eq!(Vector2d::lerp(s, e, 0.5), Vector2d::new(5.0, -2.0));
        assert_eq!(Vector2d::lerp(s, e, 2.0), Vector2d::new(20.0, -8.0));
        assert_eq!(Vector2d::lerp(s, e, -1.0), Vector2d::new(-10.0, 4.0));
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Vector2d::new(1.5, -2.0);
        let b = Vector2d::new(0.5, 4.0);
        assert_eq!(a + b, a.plus(b));
        assert_eq!(a - b, a.minus(b));
        assert_eq!(-a, Vector2d::new(-1.5, 2.0));
        assert_eq!(a * 2.0, Vector2d::new(3.0, -4.0));
    }

    #[test]
    fn kurbo_conversions() {
        let v = Vector2d::new(2.0, 3.0);
        let p: kurbo::Point = v.into();
        assert_eq!(p, kurbo::Point::new(2.0, 3.0));
        assert_eq!(Vector2d::from(kurbo::Vec2::new(2.0, 3.0)), v);
        assert_eq!(Vector2d::from((2.0, 3.0)), v);
    }
}
