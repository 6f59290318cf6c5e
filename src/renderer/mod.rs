//! Renderer interface and backends.
//!
//! The generator is backend-agnostic: it draws through the [`Renderer`]
//! trait, which separates figure construction (the provided `add_*`
//! helpers, which apply the current cell [`Transform`]) from the primitive
//! sinks a backend must implement (`*_no_transform`). Inverted figures are
//! expressed through winding: reversed polygon order and counter-clockwise
//! circles punch holes out of the surrounding figure under the even-odd
//! fill rule.

mod svg;

pub use svg::SvgRenderer;

pub(crate) mod png;

use crate::color::Color;
use crate::geometry::{Point, Transform};

/// Abstract drawing surface for icon generation.
///
/// One generation issues: one `set_background_color` call, then for each
/// shape a `begin_shape(color)`/`end_shape()` scope containing one
/// `set_transform` plus draw call per grid cell.
pub trait Renderer {
    /// Sets the background fill for the whole icon.
    fn set_background_color(&mut self, color: Color);

    /// Opens a drawing scope; all figures until [`end_shape`](Self::end_shape)
    /// share this fill color.
    fn begin_shape(&mut self, color: Color);

    /// Closes the current drawing scope.
    fn end_shape(&mut self);

    /// Sets the transform applied to subsequently added figures.
    fn set_transform(&mut self, transform: Transform);

    /// Returns the currently active transform.
    fn transform(&self) -> Transform;

    /// Adds a polygon whose points are already in surface coordinates.
    ///
    /// Point order encodes winding; inverted figures arrive reversed.
    fn add_polygon_no_transform(&mut self, points: Vec<Point>);

    /// Adds a circle positioned by its bounding-box corner in surface
    /// coordinates. `counter_clockwise` encodes inverted winding.
    fn add_circle_no_transform(&mut self, north_west: Point, diameter: f64, counter_clockwise: bool);

    /// Adds a polygon given in cell-local coordinates.
    fn add_polygon(&mut self, points: &[Point], invert: bool) {
        let transform = self.transform();
        let mut mapped: Vec<Point> = points
            .iter()
            .map(|p| transform.transform_point(p.x, p.y, 0.0, 0.0))
            .collect();
        if invert {
            mapped.reverse();
        }
        self.add_polygon_no_transform(mapped);
    }

    /// Adds an axis-aligned rectangle given in cell-local coordinates.
    fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            invert,
        );
    }

    /// Adds a right triangle filling half of the `(x, y, width, height)`
    /// box. `direction` in `0..=3` selects which corner of the box is cut
    /// away, counting clockwise from the top-left.
    fn add_triangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        direction: usize,
        invert: bool,
    ) {
        let mut points = vec![
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ];
        points.remove(direction % 4);
        self.add_polygon(&points, invert);
    }

    /// Adds a rhombus inscribed in the `(x, y, width, height)` box.
    fn add_rhombus(&mut self, x: f64, y: f64, width: f64, height: f64, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x + width / 2.0, y),
                Point::new(x + width, y + height / 2.0),
                Point::new(x + width / 2.0, y + height),
                Point::new(x, y + height / 2.0),
            ],
            invert,
        );
    }

    /// Adds a circle given in cell-local coordinates.
    fn add_circle(&mut self, x: f64, y: f64, diameter: f64, invert: bool) {
        let north_west = self
            .transform()
            .transform_point(x, y, diameter, diameter);
        self.add_circle_no_transform(north_west, diameter, invert);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{Event, RecordingRenderer};
    use super::*;

    #[test]
    fn add_rectangle_produces_clockwise_quad() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 10.0, 0));
        renderer.add_rectangle(1.0, 2.0, 3.0, 4.0, false);

        assert_eq!(
            renderer.events.last(),
            Some(&Event::Polygon(vec![
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]))
        );
    }

    #[test]
    fn invert_reverses_winding() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 10.0, 0));
        renderer.add_rectangle(0.0, 0.0, 2.0, 2.0, true);

        assert_eq!(
            renderer.events.last(),
            Some(&Event::Polygon(vec![
                Point::new(0.0, 2.0),
                Point::new(2.0, 2.0),
                Point::new(2.0, 0.0),
                Point::new(0.0, 0.0),
            ]))
        );
    }

    #[test]
    fn triangle_direction_removes_one_corner() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 10.0, 0));
        renderer.add_triangle(0.0, 0.0, 4.0, 4.0, 0, false);

        // Direction 0 removes the top-right corner.
        assert_eq!(
            renderer.events.last(),
            Some(&Event::Polygon(vec![
                Point::new(4.0, 4.0),
                Point::new(0.0, 4.0),
                Point::new(0.0, 0.0),
            ]))
        );
    }

    #[test]
    fn circle_transforms_bounding_box_corner() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(10.0, 10.0, 8.0, 2));
        renderer.add_circle(1.0, 1.0, 2.0, false);

        // rotation 2: (right - x - d, bottom - y - d) = (18-1-2, 18-1-2)
        assert_eq!(
            renderer.events.last(),
            Some(&Event::Circle(Point::new(15.0, 15.0), 2.0, false))
        );
    }

    #[test]
    fn polygon_points_rotate_with_transform() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_transform(Transform::new(0.0, 0.0, 4.0, 1));
        renderer.add_polygon(&[Point::new(1.0, 0.0)], false);

        // rotation 1: (right - y, x) = (4 - 0, 1)
        assert_eq!(
            renderer.events.last(),
            Some(&Event::Polygon(vec![Point::new(4.0, 1.0)]))
        );
    }
}
