// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Line, Size};
use understory_plane2d::{Matrix3x3, Vector2d};

use crate::{GridConfig, GridError, GridStep, is_major};

/// Real-world axis a grid line or label marks a value on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Marks an x value; drawn as a vertical line.
    X,
    /// Marks a y value; drawn as a horizontal line.
    Y,
}

/// Visual class of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A multiple of the minor step that is not a multiple of ten.
    Minor,
    /// Every 10th minor multiple. Only these carry labels.
    Major,
    /// The line through the real origin.
    Axis,
}

/// Canvas edge a label is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelEdge {
    /// Top edge for x labels, left edge for y labels.
    Near,
    /// Bottom edge for x labels, right edge for y labels.
    Far,
}

/// One grid line, in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Visual class.
    pub kind: LineKind,
    /// Axis whose value this line marks.
    pub axis: Axis,
    /// Real-world value the line marks on `axis`.
    pub value: f64,
    /// Start point in view coordinates.
    pub from: Vector2d,
    /// End point in view coordinates.
    pub to: Vector2d,
    /// Stroke width in view units.
    pub width: f64,
}

impl GridLine {
    /// This line as a [`kurbo::Line`].
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.from, self.to)
    }
}

/// One numeric label, in view coordinates.
///
/// Labels are meant to be drawn horizontally centered on `position` after
/// rotating by `rotation` radians about it.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLabel {
    /// Axis whose value this label shows.
    pub axis: Axis,
    /// Edge the label is pinned to.
    pub edge: LabelEdge,
    /// Real-world value shown.
    pub value: f64,
    /// Formatted value.
    pub text: String,
    /// Anchor in view coordinates.
    pub position: Vector2d,
    /// Rotation about `position`; y labels read bottom to top.
    pub rotation: f64,
}

/// Everything needed to draw a grid for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Minor step chosen for the visible extent.
    pub step: GridStep,
    /// Real-world point under the inset top-left canvas corner.
    pub north_west: Vector2d,
    /// Real-world point under the inset bottom-right canvas corner.
    pub south_east: Vector2d,
    /// Visible multiples of the step along x, ascending.
    pub x_multiples: Vec<i64>,
    /// Visible multiples of the step along y, ascending.
    pub y_multiples: Vec<i64>,
    /// Lines in drawing order: minor, then major, then axis lines.
    pub lines: Vec<GridLine>,
    /// Labels for every major line, near edge then far edge.
    pub labels: Vec<GridLabel>,
}

impl GridLayout {
    /// Lines of one kind, in drawing order.
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// Real-world values of the `kind` lines along `axis`.
    pub fn values(&self, axis: Axis, kind: LineKind) -> impl Iterator<Item = f64> + '_ {
        self.lines
            .iter()
            .filter(move |l| l.kind == kind && l.axis == axis)
            .map(|l| l.value)
    }

    /// All `kind` lines as one path of move-to/line-to pairs, for renderers
    /// that stroke one path per line width.
    #[must_use]
    pub fn path(&self, kind: LineKind) -> BezPath {
        let mut path = BezPath::new();
        for line in self.lines_of(kind) {
            path.move_to(line.from);
            path.line_to(line.to);
        }
        path
    }
}

/// Lays out the grid for a canvas of `canvas` pixels seen through
/// `real_to_view`.
///
/// The transform is inverted to find the real-world rectangle under the
/// canvas (inset by [`GridConfig::margin`]); the smaller of its sides picks
/// the [`GridStep`]. Line positions are floored to whole pixels, label
/// positions are not.
///
/// The transform is expected to be axis-aligned with y pointing up in real
/// space, as produced by a translate/scale chain with a negative y scale.
///
/// # Errors
///
/// - [`GridError::DegenerateCanvas`] for non-positive or non-finite sizes.
/// - [`GridError::NotInvertible`] if `real_to_view` is singular.
/// - [`GridError::DegenerateExtent`] if the inset canvas covers no area in
///   real space, a non-finite one, or the transform flips the corners.
/// - [`GridError::InvalidSizeFactor`] for a bad [`GridConfig::size_factor`].
pub fn layout_grid(
    real_to_view: &Matrix3x3,
    canvas: Size,
    config: &GridConfig,
) -> Result<GridLayout, GridError> {
    let (width, height) = (canvas.width, canvas.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GridError::DegenerateCanvas { width, height });
    }

    let view_to_real = match real_to_view.invert() {
        Ok(m) => m,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(determinant = err.determinant, "grid: real to view not invertible");
            return Err(err.into());
        }
    };

    let margin = config.margin;
    let north_west = view_to_real * Vector2d::new(margin, margin);
    let south_east = view_to_real * Vector2d::new(width - margin, height - margin);
    let extent_x = south_east.x - north_west.x;
    let extent_y = north_west.y - south_east.y;
    if !(extent_x.is_finite() && extent_y.is_finite() && extent_x > 0.0 && extent_y > 0.0) {
        return Err(GridError::DegenerateExtent {
            width: extent_x,
            height: extent_y,
        });
    }

    let step = GridStep::for_extent(extent_x.min(extent_y), config.size_factor)?;
    let x_multiples = step.multiples(north_west.x, south_east.x);
    let y_multiples = step.multiples(south_east.y, north_west.y);

    let mut layout = GridLayout {
        step,
        north_west,
        south_east,
        x_multiples,
        y_multiples,
        lines: Vec::new(),
        labels: Vec::new(),
    };
    let emitter = LineEmitter {
        real_to_view,
        width,
        height,
        config,
        step,
    };
    emitter.push_lines(&mut layout, LineKind::Minor);
    emitter.push_lines(&mut layout, LineKind::Major);
    emitter.push_axes(&mut layout);
    emitter.push_labels(&mut layout);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        exponent = step.exponent(),
        x_multiples = layout.x_multiples.len(),
        y_multiples = layout.y_multiples.len(),
        lines = layout.lines.len(),
        labels = layout.labels.len(),
        "grid layout"
    );

    Ok(layout)
}

struct LineEmitter<'a> {
    real_to_view: &'a Matrix3x3,
    width: f64,
    height: f64,
    config: &'a GridConfig,
    step: GridStep,
}

impl LineEmitter<'_> {
    fn view_x(&self, real_x: f64) -> f64 {
        self.real_to_view.transform(Vector2d::new(real_x, 0.0)).x
    }

    fn view_y(&self, real_y: f64) -> f64 {
        self.real_to_view.transform(Vector2d::new(0.0, real_y)).y
    }

    fn vertical(&self, kind: LineKind, value: f64, vx: f64, margin: f64, width: f64) -> GridLine {
        GridLine {
            kind,
            axis: Axis::X,
            value,
            from: Vector2d::new(vx, margin),
            to: Vector2d::new(vx, self.height - margin),
            width,
        }
    }

    fn horizontal(&self, kind: LineKind, value: f64, vy: f64, margin: f64, width: f64) -> GridLine {
        GridLine {
            kind,
            axis: Axis::Y,
            value,
            from: Vector2d::new(margin, vy),
            to: Vector2d::new(self.width - margin, vy),
            width,
        }
    }

    fn push_lines(&self, layout: &mut GridLayout, kind: LineKind) {
        let major = kind == LineKind::Major;
        let (margin, width) = if major {
            (self.config.margin, self.config.major_line_width)
        } else {
            (self.config.minor_margin(), self.config.minor_line_width)
        };
        for &m in layout.x_multiples.iter().filter(|m| is_major(**m) == major) {
            let value = self.step.real(m);
            let vx = libm::floor(self.view_x(value));
            layout.lines.push(self.vertical(kind, value, vx, margin, width));
        }
        for &m in layout.y_multiples.iter().filter(|m| is_major(**m) == major) {
            let value = self.step.real(m);
            let vy = libm::floor(self.view_y(value));
            layout.lines.push(self.horizontal(kind, value, vy, margin, width));
        }
    }

    fn push_axes(&self, layout: &mut GridLayout) {
        let origin = self.real_to_view.transform(Vector2d::ZERO);
        let (margin, width) = (self.config.margin, self.config.axis_line_width);
        if layout.y_multiples.contains(&0) {
            let vy = libm::floor(origin.y);
            layout.lines.push(self.horizontal(LineKind::Axis, 0.0, vy, margin, width));
        }
        if layout.x_multiples.contains(&0) {
            let vx = libm::floor(origin.x);
            layout.lines.push(self.vertical(LineKind::Axis, 0.0, vx, margin, width));
        }
    }

    fn push_labels(&self, layout: &mut GridLayout) {
        let decimals = self.step.decimals();
        let near = self.config.label_inset_near;
        let far = self.config.label_inset_far;
        for &m in layout.x_multiples.iter().filter(|m| is_major(**m)) {
            let value = self.step.real(m);
            let vx = self.view_x(value);
            let text = format!("{value:.decimals$}");
            layout.labels.push(GridLabel {
                axis: Axis::X,
                edge: LabelEdge::Near,
                value,
                text: text.clone(),
                position: Vector2d::new(vx, near),
                rotation: 0.0,
            });
            layout.labels.push(GridLabel {
                axis: Axis::X,
                edge: LabelEdge::Far,
                value,
                text,
                position: Vector2d::new(vx, self.height - far),
                rotation: 0.0,
            });
        }
        for &m in layout.y_multiples.iter().filter(|m| is_major(**m)) {
            let value = self.step.real(m);
            let vy = self.view_y(value);
            let text = format!("{value:.decimals$}");
            layout.labels.push(GridLabel {
                axis: Axis::Y,
                edge: LabelEdge::Near,
                value,
                text: text.clone(),
                position: Vector2d::new(near, vy),
                rotation: -FRAC_PI_2,
            });
            layout.labels.push(GridLabel {
                axis: Axis::Y,
                edge: LabelEdge::Far,
                value,
                text,
                position: Vector2d::new(self.width - far, vy),
                rotation: -FRAC_PI_2,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Size;
    use understory_plane2d::{Matrix3x3, Vector2d};

    use super::{Axis, LabelEdge, LineKind, layout_grid};
    use crate::{GridConfig, GridError};

    fn centered(width: f64, height: f64, pix_per_unit: f64, center: Vector2d) -> Matrix3x3 {
        Matrix3x3::chain(&[
            Matrix3x3::translate(Vector2d::new(width / 2.0, height / 2.0)),
            Matrix3x3::scale(pix_per_unit, -pix_per_unit),
            Matrix3x3::translate(center.neg()),
        ])
    }

    #[test]
    fn default_view_picks_step_ten() {
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::ZERO);
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &GridConfig::default()).unwrap();

        assert_eq!(grid.north_west, Vector2d::new(-77.0, 57.0));
        assert_eq!(grid.south_east, Vector2d::new(77.0, -57.0));
        assert_eq!(grid.step.exponent(), 1);
        assert_eq!(grid.x_multiples, (-7..=7).collect::<Vec<i64>>());
        assert_eq!(grid.y_multiples, (-5..=5).collect::<Vec<i64>>());

        let major_x: Vec<f64> = grid.values(Axis::X, LineKind::Major).collect();
        assert_eq!(major_x, [0.0]);
        assert_eq!(grid.lines_of(LineKind::Minor).count(), 14 + 10);
        assert_eq!(grid.lines_of(LineKind::Major).count(), 2);
    }

    #[test]
    fn line_geometry_uses_margins_and_floors() {
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::new(0.3, 0.0));
        let config = GridConfig::default();
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &config).unwrap();

        // Real x = 10 sits at 400 + (10 - 0.3) * 5 = 448.5, floored to 448.
        let line = grid
            .lines_of(LineKind::Minor)
            .find(|l| l.axis == Axis::X && l.value == 10.0)
            .unwrap();
        assert_eq!(line.from, Vector2d::new(448.0, config.minor_margin()));
        assert_eq!(line.to, Vector2d::new(448.0, 600.0 - config.minor_margin()));
        assert_eq!(line.width, 0.15);

        let axis = grid
            .lines_of(LineKind::Axis)
            .find(|l| l.axis == Axis::X)
            .unwrap();
        assert_eq!(axis.from, Vector2d::new(398.0, 15.0));
        assert_eq!(axis.to, Vector2d::new(398.0, 585.0));
        assert_eq!(axis.width, 2.0);
    }

    #[test]
    fn axis_lines_need_visible_origin() {
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::new(1000.0, 0.0));
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &GridConfig::default()).unwrap();
        let axes: Vec<_> = grid.lines_of(LineKind::Axis).collect();
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].axis, Axis::Y);
        assert_eq!(axes[0].from.y, 300.0);
    }

    #[test]
    fn labels_sit_on_both_edges() {
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::ZERO);
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &GridConfig::default()).unwrap();

        assert_eq!(grid.labels.len(), 4);
        let x_far = grid
            .labels
            .iter()
            .find(|l| l.axis == Axis::X && l.edge == LabelEdge::Far)
            .unwrap();
        assert_eq!(x_far.text, "0");
        assert_eq!(x_far.position, Vector2d::new(400.0, 595.0));
        let y_near = grid
            .labels
            .iter()
            .find(|l| l.axis == Axis::Y && l.edge == LabelEdge::Near)
            .unwrap();
        assert_eq!(y_near.position, Vector2d::new(10.0, 300.0));
        assert!(y_near.rotation < 0.0);
    }

    #[test]
    fn deep_zoom_formats_decimals() {
        // 5000 px per unit: about 0.114 units visible vertically.
        let r2v = centered(800.0, 600.0, 5000.0, Vector2d::new(0.05, 0.0));
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &GridConfig::default()).unwrap();
        assert_eq!(grid.step.exponent(), -2);
        assert_eq!(grid.step.decimals(), 1);
        assert_eq!(grid.x_multiples, (-2..=12).collect::<Vec<i64>>());
        let texts: Vec<&str> = grid
            .labels
            .iter()
            .filter(|l| l.axis == Axis::X && l.edge == LabelEdge::Near)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, ["0.0", "0.1"]);
    }

    #[test]
    fn path_has_one_segment_per_line() {
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::ZERO);
        let grid = layout_grid(&r2v, Size::new(800.0, 600.0), &GridConfig::default()).unwrap();
        let path = grid.path(LineKind::Minor);
        assert_eq!(path.elements().len(), 2 * grid.lines_of(LineKind::Minor).count());
    }

    #[test]
    fn rejects_bad_inputs() {
        let config = GridConfig::default();
        let r2v = centered(800.0, 600.0, 5.0, Vector2d::ZERO);
        assert!(matches!(
            layout_grid(&r2v, Size::new(0.0, 600.0), &config),
            Err(GridError::DegenerateCanvas { .. })
        ));
        assert!(matches!(
            layout_grid(&Matrix3x3::scale(0.0, 5.0), Size::new(800.0, 600.0), &config),
            Err(GridError::NotInvertible(_))
        ));
        // Too small to leave anything inside the margin.
        assert!(matches!(
            layout_grid(&r2v, Size::new(20.0, 600.0), &config),
            Err(GridError::DegenerateExtent { .. })
        ));
        // y down in real space flips the corners.
        assert!(matches!(
            layout_grid(&Matrix3x3::scale(5.0, 5.0), Size::new(800.0, 600.0), &config),
            Err(GridError::DegenerateExtent { .. })
        ));
        assert!(matches!(
            layout_grid(&r2v, Size::new(800.0, 600.0), &config.with_size_factor(-1.0)),
            Err(GridError::InvalidSizeFactor(_))
        ));
        // The reported extent is the real width/height pair.
        let wide = centered(1000.0, 600.0, 5.0, Vector2d::ZERO);
        assert_eq!(
            layout_grid(&wide, Size::new(1000.0, 20.0), &config),
            Err(GridError::DegenerateExtent {
                width: 194.0,
                height: -2.0
            })
        );
    }
}
