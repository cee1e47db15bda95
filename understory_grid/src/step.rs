// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minor step selection and multiple enumeration.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::GridError;

/// Spacing between adjacent minor grid lines, `10^exponent` real units.
///
/// Every 10th multiple of the minor step is a major line, so major lines are
/// `10^(exponent + 1)` apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridStep {
    exponent: i32,
}

impl GridStep {
    /// Creates a step of `10^exponent`.
    #[must_use]
    pub const fn from_exponent(exponent: i32) -> Self {
        Self { exponent }
    }

    /// Picks the minor step for a visible extent (the smaller of the visible
    /// width and height, in real units).
    ///
    /// The step is `10^(floor(log10(extent * size_factor)) - 1)`, one decade
    /// below the scaled extent, which leaves 10 to 100 minor lines across it.
    /// A scaled extent sitting exactly on a power of ten belongs to that
    /// decade: `100.0` yields exponent `1` regardless of how `log10` rounds.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidExtent`] unless `extent` is positive and
    ///   finite.
    /// - [`GridError::InvalidSizeFactor`] unless `size_factor` is positive
    ///   and finite and keeps `extent * size_factor` positive and finite.
    pub fn for_extent(extent: f64, size_factor: f64) -> Result<Self, GridError> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(GridError::InvalidExtent(extent));
        }
        let scaled = extent * size_factor;
        if !(size_factor.is_finite() && scaled.is_finite() && scaled > 0.0) {
            return Err(GridError::InvalidSizeFactor(size_factor));
        }
        Ok(Self::from_exponent(decade(scaled) - 1))
    }

    /// Decimal exponent of the minor step.
    #[must_use]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// Minor step in real units.
    #[must_use]
    pub fn value(self) -> f64 {
        pow10(self.exponent)
    }

    /// Major step (ten minor steps) in real units.
    #[must_use]
    pub fn major_value(self) -> f64 {
        pow10(self.exponent + 1)
    }

    /// Number of decimals needed to tell adjacent major labels apart.
    ///
    /// Zero while the major step is above one unit, otherwise
    /// `-log10(major step)`.
    #[must_use]
    pub fn decimals(self) -> usize {
        usize::try_from(-(self.exponent + 1)).unwrap_or(0)
    }

    /// Real-world value of the `multiple`-th minor line.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "multiples are bounded by the visible extent divided by the step"
    )]
    pub fn real(self, multiple: i64) -> f64 {
        multiple as f64 * self.value()
    }

    /// Multiples of this step inside `[from, to]`, see [`step_values`].
    #[must_use]
    pub fn multiples(self, from: f64, to: f64) -> Vec<i64> {
        step_values(from, to, self.value())
    }
}

/// `floor(log10(x))` for positive finite `x`, corrected at exact decades.
#[allow(
    clippy::cast_possible_truncation,
    reason = "log10 of a finite f64 lies within [-324, 309]"
)]
fn decade(x: f64) -> i32 {
    let mut exponent = libm::floor(libm::log10(x)) as i32;
    while pow10(exponent + 1) <= x {
        exponent += 1;
    }
    while pow10(exponent) > x {
        exponent -= 1;
    }
    exponent
}

fn pow10(exponent: i32) -> f64 {
    libm::pow(10.0, f64::from(exponent))
}

/// Integer multiples of `step` whose value lies in `[from, to]`.
///
/// The first multiple is `ceil(from / step)` and the last `floor(to / step)`,
/// both inclusive. An inverted or empty range yields no multiples.
#[must_use]
pub fn step_values(from: f64, to: f64, step: f64) -> Vec<i64> {
    multiple_range(from, to, step).collect()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the range bounds are visible extents divided by a step chosen from them"
)]
fn multiple_range(from: f64, to: f64, step: f64) -> RangeInclusive<i64> {
    let first = libm::ceil(from / step) as i64;
    let last = libm::floor(to / step) as i64;
    first..=last
}

/// Returns `true` for multiples that fall on a major (every 10th) line.
#[must_use]
pub const fn is_major(multiple: i64) -> bool {
    multiple % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::{GridStep, is_major, step_values};
    use crate::GridError;

    #[test]
    fn enumerates_inclusive_range() {
        let values = step_values(-23.4, 57.1, 1.0);
        assert_eq!(values.len(), 81);
        assert_eq!(values.first(), Some(&-23));
        assert_eq!(values.last(), Some(&57));
        assert!(values.windows(2).all(|w| w[1] == w[0] + 1));

        let majors: alloc::vec::Vec<i64> =
            values.iter().copied().filter(|v| is_major(*v)).collect();
        assert_eq!(majors, [-20, -10, 0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn bounds_on_multiples_are_included() {
        assert_eq!(step_values(-2.0, 2.0, 1.0), [-2, -1, 0, 1, 2]);
        assert!(step_values(0.25, 0.75, 1.0).is_empty());
        assert!(step_values(5.0, -5.0, 1.0).is_empty());
    }

    #[test]
    fn steps_follow_decades() {
        let exp = |extent: f64| GridStep::for_extent(extent, 1.0).unwrap().exponent();
        assert_eq!(exp(1.0), -1);
        assert_eq!(exp(9.99), -1);
        assert_eq!(exp(10.0), 0);
        assert_eq!(exp(99.99), 0);
        assert_eq!(exp(100.0), 1);
        assert_eq!(exp(1000.0), 2);
        assert_eq!(exp(0.001), -4);
        assert_eq!(exp(0.01), -3);
    }

    #[test]
    fn size_factor_scales_extent() {
        // 80 units on their own stay in the [10, 100) decade ...
        assert_eq!(GridStep::for_extent(80.0, 1.0).unwrap().exponent(), 0);
        // ... but with the default factor they reach 104 and step up.
        assert_eq!(GridStep::for_extent(80.0, 1.3).unwrap().exponent(), 1);
    }

    #[test]
    fn decimals_cover_major_step() {
        assert_eq!(GridStep::from_exponent(2).decimals(), 0);
        assert_eq!(GridStep::from_exponent(0).decimals(), 0);
        assert_eq!(GridStep::from_exponent(-1).decimals(), 0);
        assert_eq!(GridStep::from_exponent(-2).decimals(), 1);
        assert_eq!(GridStep::from_exponent(-4).decimals(), 3);
    }

    #[test]
    fn values_are_powers_of_ten() {
        assert_eq!(GridStep::from_exponent(0).value(), 1.0);
        assert_eq!(GridStep::from_exponent(2).value(), 100.0);
        assert_eq!(GridStep::from_exponent(1).major_value(), 100.0);
        assert!((GridStep::from_exponent(-2).value() - 0.01).abs() < 1e-18);
        assert_eq!(GridStep::from_exponent(1).real(-3), -30.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(
            GridStep::for_extent(0.0, 1.3),
            Err(GridError::InvalidExtent(0.0))
        );
        assert_eq!(
            GridStep::for_extent(-4.0, 1.3),
            Err(GridError::InvalidExtent(-4.0))
        );
        assert!(matches!(
            GridStep::for_extent(f64::NAN, 1.3),
            Err(GridError::InvalidExtent(_))
        ));
        assert_eq!(
            GridStep::for_extent(f64::INFINITY, 1.3),
            Err(GridError::InvalidExtent(f64::INFINITY))
        );
        assert_eq!(
            GridStep::for_extent(10.0, 0.0),
            Err(GridError::InvalidSizeFactor(0.0))
        );
        // A finite factor that overflows the scaled extent is the factor's fault.
        assert_eq!(
            GridStep::for_extent(1e300, 1e10),
            Err(GridError::InvalidSizeFactor(1e10))
        );
        assert_eq!(
            GridStep::for_extent(1e-300, 1e-100),
            Err(GridError::InvalidSizeFactor(1e-100))
        );
    }
}
