// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for [`layout_grid`](crate::layout_grid).
///
/// All distances are in view units (pixels). The defaults are a 15 px inset,
/// a size factor of `1.3`, and line widths of `0.4` / `0.15` / `2.0` for
/// major, minor and axis lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Inset from every canvas edge.
    ///
    /// Visible-extent sampling, major lines and axis lines all stop this far
    /// from the edge, which keeps them clear of any border drawn by the host.
    pub margin: f64,
    /// Minor lines use `margin / minor_margin_divisor`, so they reach a bit
    /// closer to the edge than major lines.
    pub minor_margin_divisor: f64,
    /// Target line density. Larger values give coarser steps sooner.
    pub size_factor: f64,
    /// Stroke width of every 10th (labelled) line.
    pub major_line_width: f64,
    /// Stroke width of the lines in between.
    pub minor_line_width: f64,
    /// Stroke width of the lines through the real origin.
    pub axis_line_width: f64,
    /// Distance of the top/left labels from the top/left edge.
    pub label_inset_near: f64,
    /// Distance of the bottom/right labels from the bottom/right edge.
    pub label_inset_far: f64,
}

impl GridConfig {
    /// Default canvas inset in pixels.
    pub const DEFAULT_MARGIN: f64 = 15.0;
    /// Default target line density.
    pub const DEFAULT_SIZE_FACTOR: f64 = 1.3;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
            minor_margin_divisor: 1.2,
            size_factor: Self::DEFAULT_SIZE_FACTOR,
            major_line_width: 0.4,
            minor_line_width: 0.15,
            axis_line_width: 2.0,
            label_inset_near: 10.0,
            label_inset_far: 5.0,
        }
    }

    /// Sets the canvas inset.
    #[must_use]
    pub const fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the target line density.
    #[must_use]
    pub const fn with_size_factor(mut self, size_factor: f64) -> Self {
        self.size_factor = size_factor;
        self
    }

    /// Sets the major, minor and axis line widths.
    #[must_use]
    pub const fn with_line_widths(mut self, major: f64, minor: f64, axis: f64) -> Self {
        self.major_line_width = major;
        self.minor_line_width = minor;
        self.axis_line_width = axis;
        self
    }

    /// Sets the label distances from the near (top/left) and far
    /// (bottom/right) edges.
    #[must_use]
    pub const fn with_label_insets(mut self, near: f64, far: f64) -> Self {
        self.label_inset_near = near;
        self.label_inset_far = far;
        self
    }

    /// Inset used by minor lines.
    #[must_use]
    pub fn minor_margin(&self) -> f64 {
        self.margin / self.minor_margin_divisor
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;

    #[test]
    fn defaults() {
        let config = GridConfig::default();
        assert_eq!(config.margin, 15.0);
        assert_eq!(config.size_factor, 1.3);
        assert!((config.minor_margin() - 12.5).abs() < 1e-12);
        assert_eq!(config, GridConfig::new());
    }

    #[test]
    fn builders_only_touch_their_fields() {
        let config = GridConfig::new()
            .with_margin(0.0)
            .with_size_factor(2.0)
            .with_line_widths(1.0, 0.5, 3.0);
        assert_eq!(config.margin, 0.0);
        assert_eq!(config.size_factor, 2.0);
        assert_eq!(config.axis_line_width, 3.0);
        assert_eq!(config.label_inset_near, 10.0);
    }
}
