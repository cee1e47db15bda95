// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use understory_grid::{GridConfig, GridError, GridLayout, layout_grid};
use understory_plane2d::{Matrix3x3, NotInvertible, Vector2d};

/// 2D viewport over an unbounded real-world plane.
///
/// `Viewport2D` tracks the size of the canvas in pixels, the real-world point
/// shown at its center and the zoom level in pixels per real unit. From these
/// it derives the real→view transform
///
/// ```text
/// translate(view center) · scale(ppu, -ppu) · scale(1/um, 1/um) · translate(-real center)
/// ```
///
/// read right to left: move the real center to the origin, apply the unit
/// multiplier `um`, scale to pixels flipping y, then move the origin to the
/// middle of the canvas.
#[derive(Clone, Debug)]
pub struct Viewport2D {
    view_size: Size,
    real_center: Vector2d,
    pixels_per_unit: f64,
    min_pixels_per_unit: f64,
    max_pixels_per_unit: f64,
    unit_multiplier: f64,
    zoom_allowed: bool,
    pan_allowed: bool,
    grid: GridConfig,
    real_to_view: Matrix3x3,
}

impl Viewport2D {
    /// Pixels per real unit of a new viewport.
    pub const DEFAULT_PIXELS_PER_UNIT: f64 = 5.0;
    /// Default lower bound on the zoom level.
    pub const DEFAULT_MIN_PIXELS_PER_UNIT: f64 = 1e-6;
    /// Default upper bound on the zoom level.
    pub const DEFAULT_MAX_PIXELS_PER_UNIT: f64 = 1e9;
    /// Zoom factor of one wheel tick.
    pub const WHEEL_ZOOM_STEP: f64 = 1.1;

    // Hard bounds for the zoom limits and the unit multiplier. Together they
    // keep the determinant of the real→view transform a normal, finite f64.
    const PIXELS_PER_UNIT_BOUNDS: (f64, f64) = (1e-100, 1e100);
    const UNIT_MULTIPLIER_BOUNDS: (f64, f64) = (1e-9, 1e9);

    /// Creates a new viewport over a canvas of `view_size` pixels.
    ///
    /// - The real origin is shown at the center of the canvas.
    /// - Zoom is [`Self::DEFAULT_PIXELS_PER_UNIT`] pixels per unit, limited to
    ///   [`Self::DEFAULT_MIN_PIXELS_PER_UNIT`]..=[`Self::DEFAULT_MAX_PIXELS_PER_UNIT`].
    /// - The unit multiplier is `1.0`; zooming and panning are allowed.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let mut vp = Self {
            view_size,
            real_center: Vector2d::ZERO,
            pixels_per_unit: Self::DEFAULT_PIXELS_PER_UNIT,
            min_pixels_per_unit: Self::DEFAULT_MIN_PIXELS_PER_UNIT,
            max_pixels_per_unit: Self::DEFAULT_MAX_PIXELS_PER_UNIT,
            unit_multiplier: 1.0,
            zoom_allowed: true,
            pan_allowed: true,
            grid: GridConfig::default(),
            real_to_view: Matrix3x3::IDENTITY,
        };
        vp.rebuild_transform();
        vp
    }

    /// Sets the initial zoom level, see [`Self::set_pixels_per_unit`].
    #[must_use]
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.set_pixels_per_unit(pixels_per_unit);
        self
    }

    /// Returns the canvas size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the canvas size in pixels.
    ///
    /// The real center stays in the middle of the canvas.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.rebuild_transform();
    }

    /// Returns the middle of the canvas in view coordinates.
    #[must_use]
    pub fn view_center(&self) -> Vector2d {
        Vector2d::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    /// Returns the real-world point shown at the middle of the canvas.
    #[must_use]
    pub fn real_center(&self) -> Vector2d {
        self.real_center
    }

    /// Centers the view on the given real-world point.
    ///
    /// Points with a non-finite component are ignored.
    pub fn set_real_center(&mut self, center: Vector2d) {
        if !(center.x.is_finite() && center.y.is_finite()) || self.real_center == center {
            return;
        }
        self.real_center = center;
        self.rebuild_transform();
    }

    /// Returns the zoom level in pixels per real unit.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Sets the zoom level in pixels per real unit, clamped into the
    /// configured limits.
    ///
    /// Values that are not strictly positive and finite are ignored.
    pub fn set_pixels_per_unit(&mut self, pixels_per_unit: f64) {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return;
        }
        let clamped = self.clamp_pixels_per_unit(pixels_per_unit);
        if clamped == self.pixels_per_unit {
            return;
        }
        self.pixels_per_unit = clamped;
        self.rebuild_transform();
    }

    /// Returns the `(min, max)` zoom limits in pixels per real unit.
    #[must_use]
    pub fn pixels_per_unit_limits(&self) -> (f64, f64) {
        (self.min_pixels_per_unit, self.max_pixels_per_unit)
    }

    /// Sets the minimum and maximum zoom levels.
    ///
    /// The range is normalized so that `min <= max` and kept within
    /// `[1e-100, 1e100]`. The current zoom level is clamped into the new
    /// range. Limits that are not strictly positive and finite are ignored.
    pub fn set_pixels_per_unit_limits(&mut self, min: f64, max: f64) {
        if !(min.is_finite() && min > 0.0 && max.is_finite() && max > 0.0) {
            return;
        }
        let (lo, hi) = Self::PIXELS_PER_UNIT_BOUNDS;
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_pixels_per_unit = min.clamp(lo, hi);
        self.max_pixels_per_unit = max.clamp(lo, hi);
        let clamped = self.clamp_pixels_per_unit(self.pixels_per_unit);
        if clamped != self.pixels_per_unit {
            self.pixels_per_unit = clamped;
            self.rebuild_transform();
        }
    }

    /// Returns the unit multiplier.
    #[must_use]
    pub fn unit_multiplier(&self) -> f64 {
        self.unit_multiplier
    }

    /// Sets how many stored real units make up one displayed unit.
    ///
    /// The zoom level is rescaled by `new / previous` so that what is on
    /// screen does not jump, unless that would leave the zoom limits. Zero,
    /// negative and non-finite values fall back to `1.0`; the rest is kept
    /// within `[1e-9, 1e9]`.
    pub fn set_unit_multiplier(&mut self, unit_multiplier: f64) {
        let unit_multiplier = if unit_multiplier.is_finite() && unit_multiplier > 0.0 {
            let (lo, hi) = Self::UNIT_MULTIPLIER_BOUNDS;
            unit_multiplier.clamp(lo, hi)
        } else {
            1.0
        };
        if unit_multiplier == self.unit_multiplier {
            return;
        }
        self.pixels_per_unit = self
            .clamp_pixels_per_unit(self.pixels_per_unit * unit_multiplier / self.unit_multiplier);
        self.unit_multiplier = unit_multiplier;
        self.rebuild_transform();
    }

    /// Returns whether zoom operations have any effect.
    #[must_use]
    pub fn zoom_allowed(&self) -> bool {
        self.zoom_allowed
    }

    /// Enables or disables zooming.
    pub fn set_zoom_allowed(&mut self, allowed: bool) {
        self.zoom_allowed = allowed;
    }

    /// Returns whether pan operations have any effect.
    #[must_use]
    pub fn pan_allowed(&self) -> bool {
        self.pan_allowed
    }

    /// Enables or disables panning.
    pub fn set_pan_allowed(&mut self, allowed: bool) {
        self.pan_allowed = allowed;
    }

    /// Returns the grid configuration used by [`Self::layout_grid`].
    #[must_use]
    pub fn grid_config(&self) -> &GridConfig {
        &self.grid
    }

    /// Sets the grid configuration used by [`Self::layout_grid`].
    pub fn set_grid_config(&mut self, config: GridConfig) {
        self.grid = config;
    }

    /// Returns the real→view transform.
    #[must_use]
    pub fn real_to_view(&self) -> Matrix3x3 {
        self.real_to_view
    }

    /// Returns the view→real transform.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the real→view transform is singular.
    pub fn view_to_real(&self) -> Result<Matrix3x3, NotInvertible> {
        self.real_to_view.invert()
    }

    /// The real→view transform as `[m00, m10, m01, m11, m02, m12]`, ready
    /// for a `setTransform` style drawing call or [`kurbo::Affine::new`].
    #[must_use]
    pub fn real_to_view_coeffs(&self) -> [f64; 6] {
        self.real_to_view.as_coeffs()
    }

    /// Transform used for the grid. It maps displayed units (stored units
    /// divided by the unit multiplier) into view coordinates.
    #[must_use]
    pub fn grid_real_to_view(&self) -> Matrix3x3 {
        self.real_to_view * Matrix3x3::scale(self.unit_multiplier, self.unit_multiplier)
    }

    /// Converts a real-world point into view coordinates.
    #[must_use]
    pub fn real_to_view_point(&self, pt: Vector2d) -> Vector2d {
        self.real_to_view * pt
    }

    /// Converts a view point into real-world coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the real→view transform is singular.
    pub fn view_to_real_point(&self, pt: Vector2d) -> Result<Vector2d, NotInvertible> {
        Ok(self.view_to_real()? * pt)
    }

    /// Returns the real-world rectangle covered by the whole canvas.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the real→view transform is singular.
    pub fn visible_real_rect(&self) -> Result<Rect, NotInvertible> {
        let view_to_real = self.view_to_real()?;
        let a = view_to_real * Vector2d::ZERO;
        let b = view_to_real * Vector2d::new(self.view_size.width, self.view_size.height);
        // The y flip swaps top and bottom; `Rect::from_points` normalizes.
        Ok(Rect::from_points(a, b))
    }

    /// Zooms by `factor` about a pivot in view coordinates.
    ///
    /// A factor above one zooms out, below one zooms in. The resulting zoom
    /// level is clamped into the configured limits, and the real point under
    /// the pivot stays under the pivot. Non-positive or non-finite factors,
    /// a disabled zoom and a zoom level already at its limit are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the current transform is singular; the
    /// viewport is left unchanged.
    pub fn zoom_at(&mut self, pivot_view: Vector2d, factor: f64) -> Result<(), NotInvertible> {
        if !self.zoom_allowed || !(factor.is_finite() && factor > 0.0) {
            return Ok(());
        }
        let new_pixels_per_unit = self.clamp_pixels_per_unit(self.pixels_per_unit / factor);
        if new_pixels_per_unit == self.pixels_per_unit {
            return Ok(());
        }
        // The factor that actually applies once the limits are honored.
        let factor = self.pixels_per_unit / new_pixels_per_unit;
        let view_to_real = self.checked_view_to_real()?;
        let zoomed = view_to_real * Matrix3x3::scale_at(factor, factor, pivot_view);
        let new_center = zoomed * self.view_center();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            factor,
            pivot_x = pivot_view.x,
            pivot_y = pivot_view.y,
            old_pixels_per_unit = self.pixels_per_unit,
            new_pixels_per_unit,
            "viewport zoom"
        );

        self.real_center = new_center;
        self.pixels_per_unit = new_pixels_per_unit;
        self.rebuild_transform();
        Ok(())
    }

    /// Zooms one wheel tick about a pivot in view coordinates.
    ///
    /// A positive `delta_y` (wheel pulled towards the user) zooms out by
    /// [`Self::WHEEL_ZOOM_STEP`], anything else zooms in by its inverse.
    ///
    /// # Errors
    ///
    /// See [`Self::zoom_at`].
    pub fn wheel_zoom(&mut self, pivot_view: Vector2d, delta_y: f64) -> Result<(), NotInvertible> {
        let factor = if delta_y > 0.0 {
            Self::WHEEL_ZOOM_STEP
        } else {
            1.0 / Self::WHEEL_ZOOM_STEP
        };
        self.zoom_at(pivot_view, factor)
    }

    /// Pans the content by a delta in view coordinates, as when dragging.
    ///
    /// A zero delta and a disabled pan are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`NotInvertible`] if the current transform is singular; the
    /// viewport is left unchanged.
    pub fn pan_by_view(&mut self, delta: Vector2d) -> Result<(), NotInvertible> {
        if !self.pan_allowed || delta.is_zero() {
            return Ok(());
        }
        let view_to_real = self.checked_view_to_real()?;
        let moved = view_to_real * Matrix3x3::translate(delta.neg());
        let new_center = moved * self.view_center();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dx = delta.x,
            dy = delta.y,
            old_x = self.real_center.x,
            old_y = self.real_center.y,
            new_x = new_center.x,
            new_y = new_center.y,
            "viewport pan"
        );

        self.real_center = new_center;
        self.rebuild_transform();
        Ok(())
    }

    /// Lays out the coordinate grid for the current state.
    ///
    /// # Errors
    ///
    /// See [`understory_grid::layout_grid`].
    pub fn layout_grid(&self) -> Result<GridLayout, GridError> {
        layout_grid(&self.grid_real_to_view(), self.view_size, &self.grid)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            view_size: self.view_size,
            real_center: self.real_center,
            pixels_per_unit: self.pixels_per_unit,
            min_pixels_per_unit: self.min_pixels_per_unit,
            max_pixels_per_unit: self.max_pixels_per_unit,
            unit_multiplier: self.unit_multiplier,
            visible_real_rect: self.visible_real_rect().ok(),
            zoom_allowed: self.zoom_allowed,
            pan_allowed: self.pan_allowed,
        }
    }

    fn clamp_pixels_per_unit(&self, pixels_per_unit: f64) -> f64 {
        pixels_per_unit.clamp(self.min_pixels_per_unit, self.max_pixels_per_unit)
    }

    fn checked_view_to_real(&self) -> Result<Matrix3x3, NotInvertible> {
        let result = self.view_to_real();
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(
                determinant = err.determinant,
                pixels_per_unit = self.pixels_per_unit,
                "viewport: real to view not invertible"
            );
        }
        result
    }

    fn rebuild_transform(&mut self) {
        let ppu = self.pixels_per_unit;
        let inv_unit = 1.0 / self.unit_multiplier;
        self.real_to_view = Matrix3x3::chain(&[
            Matrix3x3::translate(self.view_center()),
            // View y grows downward, real y grows upward.
            Matrix3x3::scale(ppu, -ppu),
            Matrix3x3::scale(inv_unit, inv_unit),
            Matrix3x3::translate(self.real_center.neg()),
        ]);
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// Canvas size in pixels.
    pub view_size: Size,
    /// Real-world point at the middle of the canvas.
    pub real_center: Vector2d,
    /// Zoom level in pixels per real unit.
    pub pixels_per_unit: f64,
    /// Minimum zoom level.
    pub min_pixels_per_unit: f64,
    /// Maximum zoom level.
    pub max_pixels_per_unit: f64,
    /// Stored real units per displayed unit.
    pub unit_multiplier: f64,
    /// Real-world rectangle covered by the canvas, if the transform inverts.
    pub visible_real_rect: Option<Rect>,
    /// Whether zooming is enabled.
    pub zoom_allowed: bool,
    /// Whether panning is enabled.
    pub pan_allowed: bool,
}
