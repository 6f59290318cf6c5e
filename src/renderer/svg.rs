//! SVG renderer backend.

use std::fmt::Write as _;

use crate::color::Color;
use crate::geometry::{Point, Transform};
use crate::renderer::Renderer;

/// Accumulated path data for one fill color.
#[derive(Debug, Default, Clone)]
struct SvgPath {
    data: String,
}

impl SvgPath {
    fn add_polygon(&mut self, points: &[Point]) {
        let Some(first) = points.first() else {
            return;
        };
        let _ = write!(self.data, "M{} {}", first.x, first.y);
        for point in &points[1..] {
            let _ = write!(self.data, "L{} {}", point.x, point.y);
        }
        self.data.push('Z');
    }

    fn add_circle(&mut self, north_west: Point, diameter: f64, counter_clockwise: bool) {
        let sweep = if counter_clockwise { 0 } else { 1 };
        let radius = diameter / 2.0;
        let _ = write!(
            self.data,
            "M{} {}a{},{} 0 1,{} {},0a{},{} 0 1,{} {},0",
            north_west.x,
            north_west.y + radius,
            radius,
            radius,
            sweep,
            diameter,
            radius,
            radius,
            sweep,
            -diameter,
        );
    }
}

/// Renders icons as an SVG document.
///
/// Figures are grouped into one `<path>` element per distinct fill color,
/// in first-use order, which keeps the output small and stable. Inverted
/// figures rely on the even-odd fill rule to cut holes.
///
/// # Example
///
/// ```
/// use hashicon::{HexHash, IconGenerator, IdenticonStyle, Rectangle, SvgRenderer};
///
/// let mut renderer = SvgRenderer::new(100.0, 100.0);
/// IconGenerator::new().generate(
///     &mut renderer,
///     Rectangle::from_size(100.0),
///     &IdenticonStyle::default(),
///     &HexHash::digest("example"),
/// );
/// let svg = renderer.to_svg();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    background: Color,
    paths: Vec<(Color, SvgPath)>,
    current: Option<usize>,
    transform: Transform,
}

impl SvgRenderer {
    /// Creates a renderer for a surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Color::TRANSPARENT,
            paths: Vec::new(),
            current: None,
            transform: Transform::default(),
        }
    }

    /// Produces the complete `<svg>` document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"xMidYMid meet\">",
            w = self.width,
            h = self.height,
        );

        if self.background.alpha > 0 {
            let _ = write!(
                svg,
                "<rect fill=\"{}\"{} x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/>",
                self.background.to_rgb_hex(),
                opacity_attribute(self.background),
                self.width,
                self.height,
            );
        }

        for (color, path) in &self.paths {
            let _ = write!(
                svg,
                "<path fill=\"{}\"{} fill-rule=\"evenodd\" d=\"{}\"/>",
                color.to_rgb_hex(),
                opacity_attribute(*color),
                path.data,
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    fn begin_shape(&mut self, color: Color) {
        let index = self
            .paths
            .iter()
            .position(|(existing, _)| *existing == color)
            .unwrap_or_else(|| {
                self.paths.push((color, SvgPath::default()));
                self.paths.len() - 1
            });
        self.current = Some(index);
    }

    fn end_shape(&mut self) {
        self.current = None;
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn add_polygon_no_transform(&mut self, points: Vec<Point>) {
        debug_assert!(self.current.is_some(), "figure added outside a shape scope");
        if let Some(index) = self.current {
            self.paths[index].1.add_polygon(&points);
        }
    }

    fn add_circle_no_transform(&mut self, north_west: Point, diameter: f64, counter_clockwise: bool) {
        debug_assert!(self.current.is_some(), "figure added outside a shape scope");
        if let Some(index) = self.current {
            self.paths[index]
                .1
                .add_circle(north_west, diameter, counter_clockwise);
        }
    }
}

/// Formats a `fill-opacity` attribute, empty for opaque colors.
fn opacity_attribute(color: Color) -> String {
    if color.alpha == 255 {
        String::new()
    } else {
        format!(" fill-opacity=\"{:.2}\"", f64::from(color.alpha) / 255.0)
    }
}
